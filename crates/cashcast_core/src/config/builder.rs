//! Projection Builder
//!
//! Fluent setup with automatic id assignment. Future statements refer to
//! their card by name and are resolved when `build()` runs.
//!
//! ```ignore
//! use cashcast_core::config::{AccountBuilder, IncomeBuilder, ProjectionBuilder};
//!
//! let input = ProjectionBuilder::new()
//!     .start(2025, 1, 1)
//!     .days(90)
//!     .account(AccountBuilder::checking("Main").balance(500_000))
//!     .account(AccountBuilder::savings("Emergency").balance(2_000_000))
//!     .income(IncomeBuilder::recurring("Salary").amount(400_000).twice_monthly(5, 20))
//!     .income(IncomeBuilder::recurring("Tutoring").amount(30_000).weekly(6).probable())
//!     .fixed_expense("Rent", 180_000, 10)
//!     .credit_card("Visa", 95_000, 12)
//!     .future_statement("Visa", 2025, 3, 60_000)
//!     .build();
//! ```

use std::collections::HashMap;

use jiff::civil::Date;
use tracing::warn;

use super::account_builder::AccountBuilder;
use super::income_builder::{BuiltIncome, IncomeBuilder};
use super::{ProjectionInput, ProjectionOptions};
use crate::model::{
    AccountId, CardId, Cents, CreditCard, ExpenseId, FixedExpense, FutureStatement, IncomeId,
    SingleShotExpense,
};

/// Builder for `ProjectionInput` with automatic id assignment
#[derive(Debug, Default)]
pub struct ProjectionBuilder {
    input: ProjectionInput,
    next_account_id: u32,
    next_income_id: u32,
    next_expense_id: u32,
    next_card_id: u32,

    card_ids: HashMap<String, CardId>,
    pending_statements: Vec<PendingStatement>,
}

#[derive(Debug, Clone)]
struct PendingStatement {
    card_name: String,
    year: i16,
    month: i8,
    amount: Cents,
}

impl ProjectionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Options
    // =========================================================================

    #[must_use]
    pub fn start_date(mut self, date: Date) -> Self {
        self.input.options.start_date = Some(date);
        self
    }

    /// Set the start date (convenience method)
    #[must_use]
    pub fn start(self, year: i16, month: i8, day: i8) -> Self {
        self.start_date(jiff::civil::date(year, month, day))
    }

    #[must_use]
    pub fn days(mut self, days: i64) -> Self {
        self.input.options.projection_days = Some(days);
        self
    }

    #[must_use]
    pub fn options(mut self, options: ProjectionOptions) -> Self {
        self.input.options = options;
        self
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    #[must_use]
    pub fn account(mut self, builder: AccountBuilder) -> Self {
        self.next_account_id += 1;
        let id = AccountId(format!("account-{}", self.next_account_id));
        self.input.accounts.push(builder.build(id));
        self
    }

    /// Quick method to add a checking account
    #[must_use]
    pub fn checking(self, name: impl Into<String>, balance: Cents) -> Self {
        self.account(AccountBuilder::checking(name).balance(balance))
    }

    // =========================================================================
    // Incomes
    // =========================================================================

    #[must_use]
    pub fn income(mut self, builder: IncomeBuilder) -> Self {
        self.next_income_id += 1;
        let id = IncomeId(format!("income-{}", self.next_income_id));
        match builder.build(id) {
            BuiltIncome::Recurring(income) => self.input.incomes.push(income),
            BuiltIncome::SingleShot(income) => self.input.single_shot_incomes.push(income),
        }
        self
    }

    /// Quick method to add guaranteed monthly income
    #[must_use]
    pub fn monthly_income(self, name: impl Into<String>, amount: Cents, day: u8) -> Self {
        self.income(IncomeBuilder::recurring(name).amount(amount).monthly(day))
    }

    // =========================================================================
    // Expenses
    // =========================================================================

    fn next_expense(&mut self) -> ExpenseId {
        self.next_expense_id += 1;
        ExpenseId(format!("expense-{}", self.next_expense_id))
    }

    #[must_use]
    pub fn fixed_expense(mut self, name: impl Into<String>, amount: Cents, due_day: u8) -> Self {
        let id = self.next_expense();
        self.input.fixed_expenses.push(FixedExpense {
            id,
            name: name.into(),
            amount,
            due_day,
            is_active: true,
        });
        self
    }

    /// A fixed expense kept on file but excluded from projections
    #[must_use]
    pub fn inactive_fixed_expense(
        mut self,
        name: impl Into<String>,
        amount: Cents,
        due_day: u8,
    ) -> Self {
        let id = self.next_expense();
        self.input.fixed_expenses.push(FixedExpense {
            id,
            name: name.into(),
            amount,
            due_day,
            is_active: false,
        });
        self
    }

    #[must_use]
    pub fn single_shot_expense(mut self, name: impl Into<String>, amount: Cents, date: Date) -> Self {
        let id = self.next_expense();
        self.input.single_shot_expenses.push(SingleShotExpense {
            id,
            name: name.into(),
            amount,
            date,
        });
        self
    }

    // =========================================================================
    // Credit cards
    // =========================================================================

    #[must_use]
    pub fn credit_card(mut self, name: impl Into<String>, statement_balance: Cents, due_day: u8) -> Self {
        let name = name.into();
        self.next_card_id += 1;
        let id = CardId(format!("card-{}", self.next_card_id));
        self.card_ids.insert(name.clone(), id.clone());
        self.input.credit_cards.push(CreditCard {
            id,
            name,
            statement_balance,
            due_day,
            balance_updated_at: None,
        });
        self
    }

    /// Declare the bill for `card_name` in a given month
    #[must_use]
    pub fn future_statement(
        mut self,
        card_name: impl Into<String>,
        year: i16,
        month: i8,
        amount: Cents,
    ) -> Self {
        self.pending_statements.push(PendingStatement {
            card_name: card_name.into(),
            year,
            month,
            amount,
        });
        self
    }

    // =========================================================================
    // Build
    // =========================================================================

    /// Resolve card names and produce the input.
    ///
    /// Statements naming an unknown card are dropped with a warning.
    #[must_use]
    pub fn build(mut self) -> ProjectionInput {
        for pending in self.pending_statements {
            let Some(card_id) = self.card_ids.get(&pending.card_name) else {
                warn!(
                    card = %pending.card_name,
                    "future statement references unknown card, skipping"
                );
                continue;
            };
            self.input.future_statements.push(FutureStatement {
                credit_card_id: card_id.clone(),
                target_month: pending.month,
                target_year: pending.year,
                amount: pending.amount,
            });
        }
        self.input
    }
}
