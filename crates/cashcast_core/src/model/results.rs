//! Projection results
//!
//! A `Projection` is the day-by-day trajectory of both scenarios plus one
//! `ScenarioSummary` per scenario. Expenses are shared by the two scenarios;
//! only the income side differs.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Cents;
use super::ids::{CardId, ExpenseId, IncomeId};
use super::income::Certainty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// All active income regardless of certainty
    Optimistic,
    /// Guaranteed income only
    Pessimistic,
}

impl Scenario {
    pub const ALL: [Scenario; 2] = [Scenario::Optimistic, Scenario::Pessimistic];

    /// Whether an income of the given certainty counts in this scenario
    pub fn counts(self, certainty: Certainty) -> bool {
        match self {
            Scenario::Optimistic => true,
            Scenario::Pessimistic => certainty.is_guaranteed(),
        }
    }
}

/// One income occurrence on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeEvent {
    pub source_id: IncomeId,
    pub name: String,
    pub amount: Cents,
    pub certainty: Certainty,
}

/// Where a credit card bill amount came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardAmountSource {
    /// Current or next real month: the card's live statement balance
    Statement,
    /// A declared `FutureStatement`
    FutureStatement,
    /// Further out with nothing declared; amount is 0
    Undeclared,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpenseSource {
    Fixed { id: ExpenseId },
    SingleShot { id: ExpenseId },
    CreditCard { id: CardId, amount_source: CardAmountSource },
}

/// One expense occurrence on one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEvent {
    pub source: ExpenseSource,
    pub name: String,
    pub amount: Cents,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySnapshot {
    pub date: Date,
    /// 0-based position in the projection
    pub day_offset: u32,
    pub optimistic_balance: Cents,
    pub pessimistic_balance: Cents,
    /// Every income event of the day; the pessimistic view filters these
    pub income_events: Vec<IncomeEvent>,
    pub expense_events: Vec<ExpenseEvent>,
    pub is_optimistic_danger: bool,
    pub is_pessimistic_danger: bool,
}

impl DailySnapshot {
    /// Income counted by `scenario` on this day
    pub fn income(&self, scenario: Scenario) -> Cents {
        self.income_events
            .iter()
            .filter(|e| scenario.counts(e.certainty))
            .map(|e| e.amount)
            .sum()
    }

    pub fn optimistic_income(&self) -> Cents {
        self.income(Scenario::Optimistic)
    }

    pub fn pessimistic_income(&self) -> Cents {
        self.income(Scenario::Pessimistic)
    }

    pub fn total_expenses(&self) -> Cents {
        self.expense_events.iter().map(|e| e.amount).sum()
    }

    pub fn balance(&self, scenario: Scenario) -> Cents {
        match scenario {
            Scenario::Optimistic => self.optimistic_balance,
            Scenario::Pessimistic => self.pessimistic_balance,
        }
    }

    pub fn is_danger(&self, scenario: Scenario) -> bool {
        match scenario {
            Scenario::Optimistic => self.is_optimistic_danger,
            Scenario::Pessimistic => self.is_pessimistic_danger,
        }
    }

    /// Recompute both danger flags from the current balances
    pub fn refresh_danger_flags(&mut self) {
        self.is_optimistic_danger = self.optimistic_balance < 0;
        self.is_pessimistic_danger = self.pessimistic_balance < 0;
    }

    pub fn has_events(&self) -> bool {
        !self.income_events.is_empty() || !self.expense_events.is_empty()
    }
}

/// A day on which a scenario's balance is negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DangerDay {
    pub date: Date,
    pub day_offset: u32,
    pub balance: Cents,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub total_income: Cents,
    pub total_expenses: Cents,
    /// Last day's balance; 0 for an empty projection
    pub end_balance: Cents,
    pub danger_days: Vec<DangerDay>,
    pub danger_day_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub start_date: Date,
    pub end_date: Date,
    /// Sum of checking balances as stored
    pub starting_balance: Cents,
    pub days: Vec<DailySnapshot>,
    pub optimistic: ScenarioSummary,
    pub pessimistic: ScenarioSummary,
}

impl Projection {
    pub fn summary(&self, scenario: Scenario) -> &ScenarioSummary {
        match scenario {
            Scenario::Optimistic => &self.optimistic,
            Scenario::Pessimistic => &self.pessimistic,
        }
    }

    pub fn first_danger_day(&self, scenario: Scenario) -> Option<&DangerDay> {
        self.summary(scenario).danger_days.first()
    }

    /// Lowest balance reached by `scenario` and the first day it was reached
    pub fn lowest_balance(&self, scenario: Scenario) -> Option<(Date, Cents)> {
        self.days
            .iter()
            .map(|d| (d.date, d.balance(scenario)))
            .reduce(|low, cur| if cur.1 < low.1 { cur } else { low })
    }

    pub fn snapshot_on(&self, date: Date) -> Option<&DailySnapshot> {
        self.days.iter().find(|d| d.date == date)
    }
}
