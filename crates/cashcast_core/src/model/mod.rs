mod accounts;
mod estimate;
mod expenses;
mod ids;
mod income;
mod results;

/// Money in minor currency units
pub type Cents = i64;

pub use accounts::{Account, AccountKind, CreditCard, FutureStatement, starting_balance};
pub use estimate::{BalanceBase, BaseFailure, EstimatedTodayBalance, ScenarioEstimate};
pub use expenses::{FixedExpense, SingleShotExpense};
pub use ids::{AccountId, CardId, ExpenseId, IncomeId};
pub use income::{Certainty, Frequency, PaymentSchedule, RecurringIncome, SingleShotIncome};
pub use results::{
    CardAmountSource, DailySnapshot, DangerDay, ExpenseEvent, ExpenseSource, IncomeEvent,
    Projection, Scenario, ScenarioSummary,
};
