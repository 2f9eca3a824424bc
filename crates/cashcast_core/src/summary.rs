//! Scenario summaries
//!
//! Pure reductions over a day sequence. Nothing here looks at entities; the
//! snapshots carry everything needed.

use jiff::civil::Date;

use crate::model::{Cents, DailySnapshot, DangerDay, Projection, Scenario, ScenarioSummary};

/// Totals, end balance and danger days for one scenario
pub fn summarize(days: &[DailySnapshot], scenario: Scenario) -> ScenarioSummary {
    let total_income = days.iter().map(|d| d.income(scenario)).sum();
    let total_expenses = days.iter().map(DailySnapshot::total_expenses).sum();
    let end_balance = days.last().map_or(0, |d| d.balance(scenario));
    let danger_days: Vec<DangerDay> = days
        .iter()
        .filter(|d| d.is_danger(scenario))
        .map(|d| DangerDay {
            date: d.date,
            day_offset: d.day_offset,
            balance: d.balance(scenario),
        })
        .collect();

    ScenarioSummary {
        total_income,
        total_expenses,
        end_balance,
        danger_day_count: danger_days.len(),
        danger_days,
    }
}

/// Wrap a day sequence into a `Projection` with both summaries
pub fn assemble_projection(
    start_date: Date,
    end_date: Date,
    starting_balance: Cents,
    days: Vec<DailySnapshot>,
) -> Projection {
    let optimistic = summarize(&days, Scenario::Optimistic);
    let pessimistic = summarize(&days, Scenario::Pessimistic);
    Projection {
        start_date,
        end_date,
        starting_balance,
        days,
        optimistic,
        pessimistic,
    }
}
