//! Income sources
//!
//! Recurring incomes ("projects") pair a `Frequency` with a `PaymentSchedule`
//! whose shape must agree with it; validation enforces the pairing before any
//! simulation runs.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Cents;
use super::ids::IncomeId;

/// How sure the household is that an income will arrive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Certainty {
    /// Counted in both scenarios
    Guaranteed,
    /// Optimistic scenario only
    Probable,
    /// Optimistic scenario only
    Uncertain,
}

impl Certainty {
    pub fn is_guaranteed(self) -> bool {
        self == Certainty::Guaranteed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Weekly,
    Biweekly,
    TwiceMonthly,
    Monthly,
}

/// When in the week or month a recurring income pays out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaymentSchedule {
    /// ISO weekday, 1 = Monday .. 7 = Sunday. Weekly and biweekly.
    DayOfWeek { day_of_week: u8 },
    /// 1-31, clamped to month end. Monthly.
    DayOfMonth { day_of_month: u8 },
    /// Two paydays per month, each optionally with its own amount.
    /// Either both amounts are set or neither is.
    TwiceMonthly {
        first_day: u8,
        second_day: u8,
        #[serde(default)]
        first_amount: Option<Cents>,
        #[serde(default)]
        second_amount: Option<Cents>,
    },
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringIncome {
    pub id: IncomeId,
    pub name: String,
    /// Per-occurrence amount; fallback when twice-monthly overrides are unset
    pub amount: Cents,
    pub certainty: Certainty,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub frequency: Frequency,
    #[serde(default)]
    pub payment_schedule: Option<PaymentSchedule>,
    /// Older records carry only a day-of-month. Used when
    /// `payment_schedule` is absent.
    #[serde(default)]
    pub payment_day: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleShotIncome {
    pub id: IncomeId,
    pub name: String,
    pub amount: Cents,
    pub date: Date,
    pub certainty: Certainty,
}
