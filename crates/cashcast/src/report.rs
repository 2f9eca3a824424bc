//! Plain-text projection report

use std::io::{self, Write};

use cashcast_core::model::{
    BalanceBase, CardAmountSource, DailySnapshot, EstimatedTodayBalance, ExpenseEvent,
    ExpenseSource, Projection, Scenario, ScenarioEstimate,
};

use crate::format::format_cents;

const DANGER_MARK: &str = "!";

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Print every day instead of only the first, last and eventful ones
    pub all_days: bool,
}

fn expense_label(event: &ExpenseEvent) -> String {
    let suffix = match &event.source {
        ExpenseSource::CreditCard {
            amount_source: CardAmountSource::FutureStatement,
            ..
        } => " (declared)",
        ExpenseSource::CreditCard {
            amount_source: CardAmountSource::Undeclared,
            ..
        } => " (undeclared)",
        _ => "",
    };
    format!("{}{} -{}", event.name, suffix, format_cents(event.amount))
}

fn day_events(day: &DailySnapshot) -> String {
    let incomes = day.income_events.iter().map(|e| {
        let marker = if e.certainty.is_guaranteed() { "" } else { "?" };
        format!("{}{} +{}", e.name, marker, format_cents(e.amount))
    });
    let expenses = day.expense_events.iter().map(expense_label);
    incomes.chain(expenses).collect::<Vec<_>>().join("; ")
}

fn balance_cell(day: &DailySnapshot, scenario: Scenario) -> String {
    let mark = if day.is_danger(scenario) { DANGER_MARK } else { "" };
    format!("{}{}", format_cents(day.balance(scenario)), mark)
}

fn estimate_cell(estimate: &ScenarioEstimate) -> String {
    if estimate.is_estimated {
        format!("{} (estimated)", format_cents(estimate.balance))
    } else {
        format_cents(estimate.balance)
    }
}

fn write_estimate<W: Write>(out: &mut W, estimate: &EstimatedTodayBalance) -> io::Result<()> {
    let base = match &estimate.base {
        Ok(BalanceBase::Single { date }) => format!("balances entered {date}"),
        Ok(BalanceBase::Range { earliest, latest }) => {
            format!("balances entered {earliest} .. {latest}")
        }
        Err(reason) => format!("no estimate: {reason}"),
    };
    writeln!(out, "Today {} ({base})", estimate.today)?;
    writeln!(
        out,
        "  optimistic  {}",
        estimate_cell(&estimate.optimistic)
    )?;
    writeln!(
        out,
        "  pessimistic {}",
        estimate_cell(&estimate.pessimistic)
    )?;
    writeln!(out)
}

fn write_summary<W: Write>(
    out: &mut W,
    projection: &Projection,
    scenario: Scenario,
) -> io::Result<()> {
    let summary = projection.summary(scenario);
    let label = match scenario {
        Scenario::Optimistic => "Optimistic",
        Scenario::Pessimistic => "Pessimistic",
    };
    write!(
        out,
        "{label:<12} income {}  expenses {}  end {}  danger days {}",
        format_cents(summary.total_income),
        format_cents(summary.total_expenses),
        format_cents(summary.end_balance),
        summary.danger_day_count,
    )?;
    if let Some(first) = projection.first_danger_day(scenario) {
        write!(out, " (first {})", first.date)?;
    }
    if let Some((date, low)) = projection.lowest_balance(scenario) {
        write!(out, "  lowest {} on {date}", format_cents(low))?;
    }
    writeln!(out)
}

/// Render `projection` as a table plus per-scenario summaries.
pub fn write_report<W: Write>(
    out: &mut W,
    projection: &Projection,
    estimate: Option<&EstimatedTodayBalance>,
    options: ReportOptions,
) -> io::Result<()> {
    writeln!(
        out,
        "Projection {} .. {} ({} days), stored checking balance {}",
        projection.start_date,
        projection.end_date,
        projection.days.len(),
        format_cents(projection.starting_balance),
    )?;
    writeln!(out)?;

    if let Some(estimate) = estimate {
        write_estimate(out, estimate)?;
    }

    writeln!(
        out,
        "{:<10}  {:>16}  {:>16}  Events",
        "Date", "Optimistic", "Pessimistic"
    )?;
    let last = projection.days.len().saturating_sub(1);
    for (i, day) in projection.days.iter().enumerate() {
        if !options.all_days && i != 0 && i != last && !day.has_events() {
            continue;
        }
        writeln!(
            out,
            "{:<10}  {:>16}  {:>16}  {}",
            day.date.to_string(),
            balance_cell(day, Scenario::Optimistic),
            balance_cell(day, Scenario::Pessimistic),
            day_events(day),
        )?;
    }
    writeln!(out)?;

    for scenario in Scenario::ALL {
        write_summary(out, projection, scenario)?;
    }
    Ok(())
}
