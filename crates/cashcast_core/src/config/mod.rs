//! Projection configuration
//!
//! `ProjectionInput` is everything one projection reads: the entity
//! collections loaded by the host plus `ProjectionOptions`. It deserializes
//! with every collection optional so a scenario file only lists what it has.
//!
//! # Builder DSL
//!
//! ```ignore
//! use cashcast_core::config::{AccountBuilder, IncomeBuilder, ProjectionBuilder};
//!
//! let input = ProjectionBuilder::new()
//!     .start(2025, 1, 1)
//!     .days(30)
//!     .account(AccountBuilder::checking("Main").balance(500_000))
//!     .income(IncomeBuilder::recurring("Salary").amount(200_000).monthly(15))
//!     .fixed_expense("Rent", 100_000, 10)
//!     .build();
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::model::{
    Account, CreditCard, FixedExpense, FutureStatement, RecurringIncome, SingleShotExpense,
    SingleShotIncome,
};

pub mod account_builder;
pub mod builder;
pub mod income_builder;

pub use account_builder::AccountBuilder;
pub use builder::ProjectionBuilder;
pub use income_builder::IncomeBuilder;

pub const DEFAULT_PROJECTION_DAYS: u32 = 30;

/// Caller-supplied options; unset fields take their defaults at validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionOptions {
    /// First projected day. Defaults to today in the clock's zone.
    #[serde(default)]
    pub start_date: Option<Date>,
    /// Horizon length in days. Defaults to 30; must be positive.
    #[serde(default)]
    pub projection_days: Option<i64>,
}

/// Options after defaults have been applied and checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub start_date: Date,
    pub projection_days: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub incomes: Vec<RecurringIncome>,
    #[serde(default)]
    pub single_shot_incomes: Vec<SingleShotIncome>,
    #[serde(default)]
    pub fixed_expenses: Vec<FixedExpense>,
    #[serde(default)]
    pub single_shot_expenses: Vec<SingleShotExpense>,
    #[serde(default)]
    pub credit_cards: Vec<CreditCard>,
    #[serde(default)]
    pub future_statements: Vec<FutureStatement>,
    #[serde(default)]
    pub options: ProjectionOptions,
}

impl ProjectionInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Same entities, different start date
    #[must_use]
    pub fn with_start_date(&self, start_date: Date) -> Self {
        let mut input = self.clone();
        input.options.start_date = Some(start_date);
        input
    }

    /// Same entities, different horizon
    #[must_use]
    pub fn with_projection_days(&self, days: i64) -> Self {
        let mut input = self.clone();
        input.options.projection_days = Some(days);
        input
    }

    /// Total number of entities, for logging
    pub fn entity_count(&self) -> usize {
        self.accounts.len()
            + self.incomes.len()
            + self.single_shot_incomes.len()
            + self.fixed_expenses.len()
            + self.single_shot_expenses.len()
            + self.credit_cards.len()
            + self.future_statements.len()
    }
}
