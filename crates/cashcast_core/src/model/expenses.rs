//! Expenses

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Cents;
use super::ids::ExpenseId;

fn default_true() -> bool {
    true
}

/// A bill paid on the same day every month (rent, utilities, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedExpense {
    pub id: ExpenseId,
    pub name: String,
    pub amount: Cents,
    /// 1-31, clamped to month end
    pub due_day: u8,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleShotExpense {
    pub id: ExpenseId,
    pub name: String,
    pub amount: Cents,
    pub date: Date,
}
