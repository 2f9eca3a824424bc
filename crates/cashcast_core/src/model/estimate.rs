//! Today-balance estimate types

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Cents;

/// The calendar day(s) the stored checking balances were last entered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BalanceBase {
    /// Every checking account was updated on the same day
    Single { date: Date },
    /// Updates are spread over several days
    Range { earliest: Date, latest: Date },
}

impl BalanceBase {
    /// Day the estimate walks forward from. Always the earliest update, which
    /// includes the most history and so never misses a pending event.
    pub fn computation_date(&self) -> Date {
        match *self {
            BalanceBase::Single { date } => date,
            BalanceBase::Range { earliest, .. } => earliest,
        }
    }
}

/// Why no reliable base could be determined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum BaseFailure {
    #[error("no checking accounts")]
    NoCheckingAccounts,
    #[error("a checking account has never had its balance updated")]
    MissingTimestamps,
}

impl BaseFailure {
    /// Stable code for hosts that branch on the reason
    pub fn reason_code(self) -> &'static str {
        match self {
            BaseFailure::NoCheckingAccounts => "no_checking_accounts",
            BaseFailure::MissingTimestamps => "missing_timestamps",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioEstimate {
    pub balance: Cents,
    /// True when at least one counted event fell inside the estimation
    /// interval, so an unchanged balance is a coincidence rather than idleness
    pub is_estimated: bool,
}

impl ScenarioEstimate {
    pub fn unchanged(balance: Cents) -> Self {
        Self {
            balance,
            is_estimated: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedTodayBalance {
    pub today: Date,
    pub base: Result<BalanceBase, BaseFailure>,
    /// Raw sum of stored checking balances
    pub starting_balance: Cents,
    pub optimistic: ScenarioEstimate,
    pub pessimistic: ScenarioEstimate,
}
