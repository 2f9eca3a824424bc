//! Today's balance from stale stored balances
//!
//! Stored balances are whatever the user last typed in, on whatever day that
//! was. The estimate replays every event in `(base_date, today]` on top of
//! them; the rebased projection then starts from that estimate and simulates
//! from tomorrow on, so no event already folded into the estimate is counted
//! again.

use jiff::civil::Date;
use serde::Serialize;
use tracing::debug;

use crate::config::ProjectionInput;
use crate::date_math::{add_days, days_between};
use crate::error::Result;
use crate::model::{
    Account, BalanceBase, BaseFailure, DailySnapshot, EstimatedTodayBalance, Projection,
    ScenarioEstimate,
};
use crate::simulation::{calculate_projection, simulate_days};
use crate::summary::assemble_projection;
use crate::timezone::Clock;
use crate::validation::{FilteredInput, horizon_end, validate_input};

/// Result of `project_from_today`
#[derive(Debug, Clone, Serialize)]
pub struct TodayProjection {
    pub estimate: EstimatedTodayBalance,
    pub projection: Projection,
    /// Whether the projection was rebased onto the estimate
    pub rebased: bool,
}

/// Work out which day the stored checking balances describe.
///
/// Only checking accounts are considered. Every one of them must carry a
/// `balance_updated_at`.
pub fn determine_balance_base(
    accounts: &[Account],
    clock: &Clock,
) -> std::result::Result<BalanceBase, BaseFailure> {
    let mut checking = accounts.iter().filter(|a| a.is_checking()).peekable();
    if checking.peek().is_none() {
        return Err(BaseFailure::NoCheckingAccounts);
    }

    let mut earliest: Option<Date> = None;
    let mut latest: Option<Date> = None;
    for account in checking {
        let updated = account
            .balance_updated_at
            .ok_or(BaseFailure::MissingTimestamps)?;
        let day = clock.calendar_day(updated);
        earliest = Some(earliest.map_or(day, |e| e.min(day)));
        latest = Some(latest.map_or(day, |l| l.max(day)));
    }

    match (earliest, latest) {
        (Some(earliest), Some(latest)) if earliest == latest => {
            Ok(BalanceBase::Single { date: earliest })
        }
        (Some(earliest), Some(latest)) => Ok(BalanceBase::Range { earliest, latest }),
        _ => Err(BaseFailure::NoCheckingAccounts),
    }
}

/// Estimate today's balance in both scenarios.
pub fn calculate_estimated_today_balance(
    input: &ProjectionInput,
    clock: &Clock,
) -> Result<EstimatedTodayBalance> {
    let filtered = validate_input(input, clock)?;
    Ok(estimate_today(&filtered, clock))
}

/// Forward projection whose day 0 is today at the estimated balances.
///
/// The horizon comes from the input's `projection_days`; its start date is
/// ignored since day 0 is always `estimate.today`.
pub fn rebase_projection_from_estimated_today(
    input: &ProjectionInput,
    estimate: &EstimatedTodayBalance,
    clock: &Clock,
) -> Result<Projection> {
    let filtered = validate_input(input, clock)?;
    rebase(&filtered, estimate, clock)
}

/// Pick the right flow for "what happens from today on".
///
/// Rebases when the stored balances predate today; otherwise projects from
/// today with the stored balances as they are.
pub fn project_from_today(input: &ProjectionInput, clock: &Clock) -> Result<TodayProjection> {
    let today = clock.today();
    let filtered = validate_input(input, clock)?;
    let estimate = estimate_today(&filtered, clock);

    let stale = matches!(&estimate.base, Ok(base) if base.computation_date() < today);
    let projection = if stale {
        rebase(&filtered, &estimate, clock)?
    } else {
        calculate_projection(&input.with_start_date(today), clock)?
    };

    Ok(TodayProjection {
        estimate,
        projection,
        rebased: stale,
    })
}

fn estimate_today(filtered: &FilteredInput, clock: &Clock) -> EstimatedTodayBalance {
    let today = clock.today();
    let starting_balance = filtered.starting_balance();
    let base = determine_balance_base(&filtered.accounts, clock);

    let unchanged = |base| EstimatedTodayBalance {
        today,
        base,
        starting_balance,
        optimistic: ScenarioEstimate::unchanged(starting_balance),
        pessimistic: ScenarioEstimate::unchanged(starting_balance),
    };

    let base_date = match &base {
        Ok(b) => b.computation_date(),
        Err(reason) => {
            debug!(reason = reason.reason_code(), "no reliable balance base");
            return unchanged(base);
        }
    };

    // (base_date, today]
    let elapsed = days_between(base_date, today);
    if elapsed <= 0 {
        return unchanged(base);
    }

    let run = simulate_days(filtered, add_days(base_date, 1), elapsed as u32, today);
    let Some(last) = run.days.last() else {
        return unchanged(base);
    };

    let any_expense = run.days.iter().any(|d| !d.expense_events.is_empty());
    let any_income = run.days.iter().any(|d| !d.income_events.is_empty());
    let any_guaranteed = run
        .days
        .iter()
        .flat_map(|d| &d.income_events)
        .any(|e| e.certainty.is_guaranteed());

    let estimate = EstimatedTodayBalance {
        today,
        base,
        starting_balance,
        optimistic: ScenarioEstimate {
            balance: last.optimistic_balance,
            is_estimated: any_expense || any_income,
        },
        pessimistic: ScenarioEstimate {
            balance: last.pessimistic_balance,
            is_estimated: any_expense || any_guaranteed,
        },
    };

    debug!(
        %base_date,
        %today,
        elapsed,
        optimistic = estimate.optimistic.balance,
        pessimistic = estimate.pessimistic.balance,
        "today balance estimated"
    );
    estimate
}

fn rebase(
    filtered: &FilteredInput,
    estimate: &EstimatedTodayBalance,
    clock: &Clock,
) -> Result<Projection> {
    let today = estimate.today;
    let days = filtered.options.projection_days;
    // Validation only checked the horizon from the configured start
    let end_date = horizon_end(today, days)?;
    let raw_balance = filtered.starting_balance();

    let pessimistic_offset = estimate.pessimistic.balance - raw_balance;
    let optimistic_extra = estimate.optimistic.balance - estimate.pessimistic.balance;

    // Today's events are already inside the estimate
    let mut day_zero = DailySnapshot {
        date: today,
        day_offset: 0,
        optimistic_balance: estimate.optimistic.balance,
        pessimistic_balance: estimate.pessimistic.balance,
        income_events: Vec::new(),
        expense_events: Vec::new(),
        is_optimistic_danger: false,
        is_pessimistic_danger: false,
    };
    day_zero.refresh_danger_flags();

    let mut snapshots = Vec::with_capacity(days as usize);
    snapshots.push(day_zero);

    if days > 1 {
        let run = simulate_days(filtered, add_days(today, 1), days - 1, clock.today());
        for (mut day, offset) in run.days.into_iter().zip(1u32..) {
            day.day_offset = offset;
            day.pessimistic_balance += pessimistic_offset;
            day.optimistic_balance += pessimistic_offset + optimistic_extra;
            day.refresh_danger_flags();
            snapshots.push(day);
        }
    }

    debug!(
        %today,
        days,
        pessimistic_offset,
        optimistic_extra,
        "projection rebased onto today's estimate"
    );

    Ok(assemble_projection(today, end_date, raw_balance, snapshots))
}
