//! Accounts, credit cards and declared future statements

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Cents;
use super::ids::{AccountId, CardId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Checking,
    Savings,
    Investment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub kind: AccountKind,
    /// Last balance the user entered
    pub balance: Cents,
    /// When `balance` was entered; `None` for accounts never updated
    #[serde(default)]
    pub balance_updated_at: Option<Timestamp>,
}

impl Account {
    pub fn is_checking(&self) -> bool {
        self.kind == AccountKind::Checking
    }
}

/// Sum of checking balances. Savings and investment accounts never fund
/// day-to-day cash flow, so they are excluded.
pub fn starting_balance(accounts: &[Account]) -> Cents {
    accounts
        .iter()
        .filter(|a| a.is_checking())
        .map(|a| a.balance)
        .sum()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditCard {
    pub id: CardId,
    pub name: String,
    /// Amount due at the next due date
    pub statement_balance: Cents,
    /// Day of month the bill is paid (1-31, clamped to month end)
    pub due_day: u8,
    #[serde(default)]
    pub balance_updated_at: Option<Timestamp>,
}

/// A bill amount the user declared ahead of time for one card and month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutureStatement {
    pub credit_card_id: CardId,
    /// 1-12
    pub target_month: i8,
    pub target_year: i16,
    pub amount: Cents,
}

impl FutureStatement {
    pub fn matches(&self, card: &CardId, year: i16, month: i8) -> bool {
        &self.credit_card_id == card && self.target_year == year && self.target_month == month
    }
}
