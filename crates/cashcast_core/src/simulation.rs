use jiff::civil::Date;
use tracing::{debug, trace};

use crate::config::ProjectionInput;
use crate::credit_cards::resolve_card_bill;
use crate::date_math::{add_days, is_clamped_day};
use crate::error::Result;
use crate::model::{
    Cents, DailySnapshot, ExpenseEvent, ExpenseSource, IncomeEvent, Projection, SingleShotIncome,
};
use crate::schedule::AnchorState;
use crate::summary::assemble_projection;
use crate::timezone::Clock;
use crate::validation::{FilteredInput, ScheduledIncome, validate_input};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// Raw output of one horizon walk
#[derive(Debug, Clone)]
pub struct DailyRun {
    pub start_date: Date,
    /// Last simulated day; equals `start_date` for an empty walk
    pub end_date: Date,
    pub starting_balance: Cents,
    pub days: Vec<DailySnapshot>,
}

/// Plain N-day projection from the stored balances.
///
/// Validates `input`, walks `projection_days` days from the start date and
/// summarizes both scenarios.
pub fn calculate_projection(input: &ProjectionInput, clock: &Clock) -> Result<Projection> {
    let filtered = validate_input(input, clock)?;
    let run = simulate_days(
        &filtered,
        filtered.options.start_date,
        filtered.options.projection_days,
        clock.today(),
    );
    let projection = assemble_projection(run.start_date, run.end_date, run.starting_balance, run.days);

    debug!(
        start = %projection.start_date,
        end = %projection.end_date,
        optimistic_end = projection.optimistic.end_balance,
        pessimistic_end = projection.pessimistic.end_balance,
        optimistic_danger_days = projection.optimistic.danger_day_count,
        pessimistic_danger_days = projection.pessimistic.danger_day_count,
        "projection calculated"
    );
    Ok(projection)
}

/// Run independent projections, one result per input.
///
/// With the `parallel` feature the inputs are spread over the rayon pool.
pub fn project_batch(inputs: &[ProjectionInput], clock: &Clock) -> Vec<Result<Projection>> {
    #[cfg(feature = "parallel")]
    {
        inputs
            .par_iter()
            .map(|input| calculate_projection(input, clock))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        inputs
            .iter()
            .map(|input| calculate_projection(input, clock))
            .collect()
    }
}

/// Walk `days` calendar days from `start_date`, starting at the stored
/// checking balance.
///
/// `today` is the clock's current day and only feeds the credit card
/// current/next-month rule. Anchored-frequency state lives for this call only.
pub fn simulate_days(filtered: &FilteredInput, start_date: Date, days: u32, today: Date) -> DailyRun {
    let starting_balance = filtered.starting_balance();
    let mut optimistic_balance = starting_balance;
    let mut pessimistic_balance = starting_balance;

    let mut anchors = AnchorState::new();
    #[cfg(debug_assertions)]
    let mut guaranteed_anchors = AnchorState::new();
    let mut snapshots = Vec::with_capacity(days as usize);

    for day_offset in 0..days {
        let date = add_days(start_date, day_offset as i32);

        let income_events = income_events_on(
            &filtered.active_incomes,
            &filtered.single_shot_incomes,
            date,
            day_offset,
            &mut anchors,
        );
        let expense_events = expense_events_on(filtered, date, today);

        let mut snapshot = DailySnapshot {
            date,
            day_offset,
            optimistic_balance: 0,
            pessimistic_balance: 0,
            income_events,
            expense_events,
            is_optimistic_danger: false,
            is_pessimistic_danger: false,
        };

        let optimistic_income = snapshot.optimistic_income();
        let pessimistic_income = snapshot.pessimistic_income();
        let expenses = snapshot.total_expenses();
        // Debug builds replay the guaranteed subset on its own anchors and
        // check it matches the filtered pessimistic income.
        #[cfg(debug_assertions)]
        {
            let guaranteed_events = income_events_on(
                &filtered.guaranteed_incomes,
                &filtered.single_shot_incomes,
                date,
                day_offset,
                &mut guaranteed_anchors,
            );
            assert_eq!(
                pessimistic_income,
                guaranteed_events
                    .iter()
                    .filter(|e| e.certainty.is_guaranteed())
                    .map(|e| e.amount)
                    .sum::<Cents>(),
                "guaranteed-only walk diverged on {date}"
            );
        }

        optimistic_balance += optimistic_income - expenses;
        pessimistic_balance += pessimistic_income - expenses;
        snapshot.optimistic_balance = optimistic_balance;
        snapshot.pessimistic_balance = pessimistic_balance;
        snapshot.refresh_danger_flags();

        trace!(
            %date,
            optimistic_income,
            pessimistic_income,
            expenses,
            optimistic_balance,
            pessimistic_balance,
            "day simulated"
        );
        snapshots.push(snapshot);
    }

    let end_date = if days == 0 {
        start_date
    } else {
        add_days(start_date, days as i32 - 1)
    };

    DailyRun {
        start_date,
        end_date,
        starting_balance,
        days: snapshots,
    }
}

/// Income events for one day: every due recurring income plus single-shot
/// incomes dated that day.
pub fn income_events_on(
    incomes: &[ScheduledIncome],
    single_shots: &[SingleShotIncome],
    date: Date,
    day_offset: u32,
    anchors: &mut AnchorState,
) -> Vec<IncomeEvent> {
    let recurring = incomes.iter().filter_map(|income| {
        income
            .recurrence
            .due_amount(&income.id, income.amount, date, day_offset, anchors)
            .map(|amount| IncomeEvent {
                source_id: income.id.clone(),
                name: income.name.clone(),
                amount,
                certainty: income.certainty,
            })
    });
    let one_off = single_shots
        .iter()
        .filter(|income| income.date == date)
        .map(|income| IncomeEvent {
            source_id: income.id.clone(),
            name: income.name.clone(),
            amount: income.amount,
            certainty: income.certainty,
        });
    recurring.chain(one_off).collect()
}

fn expense_events_on(filtered: &FilteredInput, date: Date, today: Date) -> Vec<ExpenseEvent> {
    let mut events = Vec::new();

    for expense in &filtered.fixed_expenses {
        if is_clamped_day(date, expense.due_day) {
            events.push(ExpenseEvent {
                source: ExpenseSource::Fixed {
                    id: expense.id.clone(),
                },
                name: expense.name.clone(),
                amount: expense.amount,
            });
        }
    }

    for expense in &filtered.single_shot_expenses {
        if expense.date == date {
            events.push(ExpenseEvent {
                source: ExpenseSource::SingleShot {
                    id: expense.id.clone(),
                },
                name: expense.name.clone(),
                amount: expense.amount,
            });
        }
    }

    for card in &filtered.credit_cards {
        if is_clamped_day(date, card.due_day) {
            let bill = resolve_card_bill(card, date, today, &filtered.future_statements);
            events.push(ExpenseEvent {
                source: ExpenseSource::CreditCard {
                    id: card.id.clone(),
                    amount_source: bill.source,
                },
                name: card.name.clone(),
                amount: bill.amount,
            });
        }
    }

    events
}
