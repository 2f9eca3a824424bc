//! Tests for the daily walk and the two-scenario split

use jiff::civil::date;

use super::{clock_at, ts};
use crate::config::{AccountBuilder, IncomeBuilder, ProjectionBuilder};
use crate::error::{EngineError, ValidationErrorKind};
use crate::model::{Scenario, starting_balance};
use crate::schedule::AnchorState;
use crate::simulation::{calculate_projection, income_events_on};
use crate::timezone::Clock;
use crate::validation::validate_input;

#[test]
fn test_end_to_end_monthly_income_and_rent() {
    let input = ProjectionBuilder::new()
        .start(2025, 1, 1)
        .days(30)
        .checking("Main", 500_000)
        .monthly_income("Salary", 200_000, 15)
        .fixed_expense("Rent", 100_000, 10)
        .build();

    let projection = calculate_projection(&input, &clock_at(2025, 1, 1)).unwrap();

    assert_eq!(projection.days.len(), 30);
    assert_eq!(projection.start_date, date(2025, 1, 1));
    assert_eq!(projection.end_date, date(2025, 1, 30));
    assert_eq!(projection.starting_balance, 500_000);
    assert_eq!(projection.optimistic.end_balance, 600_000);
    assert_eq!(projection.pessimistic.end_balance, 600_000);
    assert_eq!(projection.optimistic.danger_day_count, 0);
    assert_eq!(projection.pessimistic.danger_day_count, 0);

    let rent_day = projection.snapshot_on(date(2025, 1, 10)).unwrap();
    assert_eq!(rent_day.pessimistic_balance, 400_000);
    let payday = projection.snapshot_on(date(2025, 1, 15)).unwrap();
    assert_eq!(payday.optimistic_balance, 600_000);
}

#[test]
fn test_only_checking_accounts_fund_the_walk() {
    let input = ProjectionBuilder::new()
        .start(2025, 1, 1)
        .days(3)
        .checking("Main", 1_000)
        .checking("Joint", 2_000)
        .account(AccountBuilder::savings("Emergency").balance(50_000))
        .account(AccountBuilder::investment("Brokerage").balance(900_000))
        .build();

    assert_eq!(starting_balance(&input.accounts), 3_000);

    let projection = calculate_projection(&input, &clock_at(2025, 1, 1)).unwrap();
    assert_eq!(projection.starting_balance, 3_000);
    assert!(projection.days.iter().all(|d| d.optimistic_balance == 3_000));
}

#[test]
fn test_no_checking_accounts_start_at_zero() {
    let input = ProjectionBuilder::new()
        .start(2025, 1, 1)
        .days(5)
        .account(AccountBuilder::savings("Savings").balance(10_000))
        .single_shot_expense("Dentist", 2_500, date(2025, 1, 3))
        .build();

    let projection = calculate_projection(&input, &clock_at(2025, 1, 1)).unwrap();
    assert_eq!(projection.starting_balance, 0);
    assert_eq!(projection.pessimistic.end_balance, -2_500);
    assert_eq!(projection.pessimistic.danger_day_count, 3);
}

#[test]
fn test_uncertain_income_only_counts_optimistically() {
    let input = ProjectionBuilder::new()
        .start(2025, 1, 1)
        .days(10)
        .checking("Main", 10_000)
        .income(
            IncomeBuilder::recurring("Freelance")
                .amount(10_000)
                .monthly(5)
                .probable(),
        )
        .income(IncomeBuilder::single_shot("Refund", date(2025, 1, 7)).amount(500).uncertain())
        .income(IncomeBuilder::single_shot("Bonus", date(2025, 1, 8)).amount(700))
        .fixed_expense("Insurance", 15_000, 5)
        .build();

    let projection = calculate_projection(&input, &clock_at(2025, 1, 1)).unwrap();

    assert_eq!(projection.optimistic.total_income, 11_200);
    assert_eq!(projection.pessimistic.total_income, 700);
    assert_eq!(projection.optimistic.total_expenses, 15_000);
    assert_eq!(projection.pessimistic.total_expenses, 15_000);

    // 10_000 + 10_000 - 15_000 on Jan 5: optimistic stays positive
    assert_eq!(projection.optimistic.danger_day_count, 0);
    assert_eq!(projection.optimistic.end_balance, 6_200);

    // Jan 5 through Jan 10 are negative without the freelance payment
    assert_eq!(projection.pessimistic.danger_day_count, 6);
    assert_eq!(
        projection.first_danger_day(Scenario::Pessimistic).map(|d| d.date),
        Some(date(2025, 1, 5))
    );
    assert_eq!(projection.pessimistic.end_balance, -4_300);
}

#[test]
fn test_scenario_ordering_and_daily_balance_rule() {
    let input = ProjectionBuilder::new()
        .start(2025, 1, 1)
        .days(60)
        .checking("Main", 20_000)
        .income(IncomeBuilder::recurring("Salary").amount(150_000).twice_monthly(5, 20))
        .income(IncomeBuilder::recurring("Tips").amount(8_000).weekly(6).uncertain())
        .income(IncomeBuilder::recurring("Side gig").amount(30_000).biweekly(3).probable())
        .fixed_expense("Rent", 180_000, 1)
        .fixed_expense("Phone", 6_000, 31)
        .credit_card("Visa", 45_000, 12)
        .build();

    let projection = calculate_projection(&input, &clock_at(2025, 1, 1)).unwrap();

    assert!(projection.pessimistic.total_income <= projection.optimistic.total_income);
    assert_eq!(
        projection.pessimistic.total_expenses,
        projection.optimistic.total_expenses
    );

    let mut previous = (projection.starting_balance, projection.starting_balance);
    for day in &projection.days {
        let expenses = day.total_expenses();
        assert_eq!(
            day.optimistic_balance,
            previous.0 + day.optimistic_income() - expenses,
            "optimistic balance on {}",
            day.date
        );
        assert_eq!(
            day.pessimistic_balance,
            previous.1 + day.pessimistic_income() - expenses,
            "pessimistic balance on {}",
            day.date
        );
        assert_eq!(day.is_optimistic_danger, day.optimistic_balance < 0);
        assert_eq!(day.is_pessimistic_danger, day.pessimistic_balance < 0);
        previous = (day.optimistic_balance, day.pessimistic_balance);
    }

    for (offset, day) in projection.days.iter().enumerate() {
        assert_eq!(day.day_offset as usize, offset);
    }
}

#[test]
fn test_guaranteed_walk_agrees_with_filtered_events() {
    let input = ProjectionBuilder::new()
        .start(2025, 1, 1)
        .days(90)
        .checking("Main", 0)
        .income(IncomeBuilder::recurring("Salary").amount(100_000).biweekly(5))
        .income(IncomeBuilder::recurring("Contract").amount(40_000).biweekly(5).probable())
        .income(
            IncomeBuilder::recurring("Old payroll")
                .amount(25_000)
                .legacy(crate::model::Frequency::Weekly, 10),
        )
        .income(IncomeBuilder::single_shot("Gift", date(2025, 2, 14)).amount(5_000))
        .build();

    let clock = clock_at(2025, 1, 1);
    let filtered = validate_input(&input, &clock).unwrap();
    let mut all_anchors = AnchorState::new();
    let mut guaranteed_anchors = AnchorState::new();

    for offset in 0..90u32 {
        let day = crate::date_math::add_days(date(2025, 1, 1), offset as i32);
        let all = income_events_on(
            &filtered.active_incomes,
            &filtered.single_shot_incomes,
            day,
            offset,
            &mut all_anchors,
        );
        let guaranteed = income_events_on(
            &filtered.guaranteed_incomes,
            &filtered.single_shot_incomes,
            day,
            offset,
            &mut guaranteed_anchors,
        );

        let filtered_sum: i64 = all
            .iter()
            .filter(|e| e.certainty.is_guaranteed())
            .map(|e| e.amount)
            .sum();
        let guaranteed_sum: i64 = guaranteed
            .iter()
            .filter(|e| e.certainty.is_guaranteed())
            .map(|e| e.amount)
            .sum();
        assert_eq!(filtered_sum, guaranteed_sum, "pessimistic income on {day}");
    }
}

#[test]
fn test_day_31_expense_clamps_to_month_end() {
    let clock = clock_at(2025, 1, 1);
    let input = ProjectionBuilder::new()
        .start(2025, 2, 1)
        .days(28)
        .checking("Main", 10_000)
        .fixed_expense("Gym", 1_000, 31)
        .build();
    let projection = calculate_projection(&input, &clock).unwrap();
    assert_eq!(projection.optimistic.total_expenses, 1_000);
    assert_eq!(
        projection
            .snapshot_on(date(2025, 2, 28))
            .map(|d| d.expense_events.len()),
        Some(1)
    );

    let leap = input.with_start_date(date(2024, 2, 1)).with_projection_days(29);
    let projection = calculate_projection(&leap, &clock).unwrap();
    assert_eq!(projection.optimistic.total_expenses, 1_000);
    assert!(
        projection
            .snapshot_on(date(2024, 2, 28))
            .is_some_and(|d| d.expense_events.is_empty())
    );
    assert!(
        projection
            .snapshot_on(date(2024, 2, 29))
            .is_some_and(|d| d.expense_events.len() == 1)
    );
}

#[test]
fn test_inactive_entities_are_skipped() {
    let input = ProjectionBuilder::new()
        .start(2025, 1, 1)
        .days(31)
        .checking("Main", 1_000)
        .income(IncomeBuilder::recurring("Old job").amount(90_000).monthly(5).inactive())
        .inactive_fixed_expense("Cancelled streaming", 2_000, 3)
        .build();

    let projection = calculate_projection(&input, &clock_at(2025, 1, 1)).unwrap();
    assert!(projection.days.iter().all(|d| !d.has_events()));
    assert_eq!(projection.optimistic.end_balance, 1_000);
}

#[test]
fn test_start_defaults_to_today_in_clock_zone() {
    let input = ProjectionBuilder::new().checking("Main", 100).build();

    // 01:00 UTC on the 21st is still the 20th in Sao Paulo
    let clock = Clock::fixed(ts("2025-03-21T01:00:00Z"), "America/Sao_Paulo").unwrap();
    let projection = calculate_projection(&input, &clock).unwrap();

    assert_eq!(projection.start_date, date(2025, 3, 20));
    assert_eq!(projection.days.len(), 30);
    assert_eq!(projection.end_date, date(2025, 4, 18));
}

#[test]
fn test_one_day_horizon() {
    let input = ProjectionBuilder::new()
        .start(2025, 6, 10)
        .days(1)
        .checking("Main", 100)
        .fixed_expense("Rent", 300, 10)
        .build();

    let projection = calculate_projection(&input, &clock_at(2025, 6, 1)).unwrap();
    assert_eq!(projection.days.len(), 1);
    assert_eq!(projection.start_date, projection.end_date);
    assert_eq!(projection.lowest_balance(Scenario::Optimistic), Some((date(2025, 6, 10), -200)));
}

#[test]
fn test_validation_failures_abort_the_projection() {
    let clock = clock_at(2025, 1, 1);

    let zero_days = ProjectionBuilder::new().days(0).build();
    match calculate_projection(&zero_days, &clock) {
        Err(EngineError::Validation(err)) => {
            assert_eq!(err.kind, ValidationErrorKind::InvalidInput);
            assert_eq!(err.entity, "options");
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    // Inactive records are still checked
    let bad_income = ProjectionBuilder::new()
        .income(IncomeBuilder::recurring("Broken").amount(0).monthly(1).inactive())
        .build();
    match calculate_projection(&bad_income, &clock) {
        Err(EngineError::Validation(err)) => {
            assert_eq!(err.kind, ValidationErrorKind::InvalidAmount);
            assert_eq!(err.entity, "Broken");
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    let bad_day = ProjectionBuilder::new().fixed_expense("Rent", 1_000, 32).build();
    let err = calculate_projection(&bad_day, &clock).unwrap_err();
    assert!(err.to_string().contains("Rent"));
}

#[test]
fn test_horizon_past_the_calendar_end_is_rejected() {
    let input = ProjectionBuilder::new()
        .start(9999, 12, 31)
        .days(2)
        .checking("Main", 100)
        .build();

    match calculate_projection(&input, &clock_at(2025, 1, 1)) {
        Err(EngineError::Validation(err)) => {
            assert_eq!(err.kind, ValidationErrorKind::InvalidInput);
            assert_eq!(err.entity, "options");
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    let last_day = input.with_projection_days(1);
    let projection = calculate_projection(&last_day, &clock_at(2025, 1, 1)).unwrap();
    assert_eq!(projection.end_date, date(9999, 12, 31));
}
