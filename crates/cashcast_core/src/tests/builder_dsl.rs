//! Tests for the Builder DSL
//!
//! These tests demonstrate and verify the fluent builder API for creating projections.

use jiff::civil::date;

use super::clock_at;
use crate::config::{AccountBuilder, IncomeBuilder, ProjectionBuilder};
use crate::model::{
    AccountKind, CardId, Certainty, Frequency, PaymentSchedule, Scenario,
};
use crate::simulation::calculate_projection;

/// Test basic ProjectionBuilder usage
#[test]
fn test_projection_builder_basic() {
    let input = ProjectionBuilder::new().start(2025, 1, 1).days(90).build();

    assert_eq!(input.options.start_date, Some(date(2025, 1, 1)));
    assert_eq!(input.options.projection_days, Some(90));
    assert_eq!(input.entity_count(), 0);
}

/// Ids are assigned per entity family in insertion order
#[test]
fn test_ids_are_assigned_in_order() {
    let input = ProjectionBuilder::new()
        .checking("Main", 1_000)
        .account(AccountBuilder::savings("Rainy day"))
        .monthly_income("Salary", 100_000, 5)
        .income(IncomeBuilder::single_shot("Tax refund", date(2025, 4, 1)).amount(30_000))
        .fixed_expense("Rent", 80_000, 1)
        .single_shot_expense("Flights", 60_000, date(2025, 7, 1))
        .credit_card("Visa", 20_000, 12)
        .build();

    let account_ids: Vec<_> = input.accounts.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(account_ids, ["account-1", "account-2"]);
    assert_eq!(input.accounts[1].kind, AccountKind::Savings);

    assert_eq!(input.incomes[0].id.as_str(), "income-1");
    assert_eq!(input.single_shot_incomes[0].id.as_str(), "income-2");

    assert_eq!(input.fixed_expenses[0].id.as_str(), "expense-1");
    assert_eq!(input.single_shot_expenses[0].id.as_str(), "expense-2");
    assert_eq!(input.credit_cards[0].id, CardId::from("card-1"));
    assert_eq!(input.entity_count(), 7);
}

/// Test IncomeBuilder schedule presets
#[test]
fn test_income_builder_presets() {
    let input = ProjectionBuilder::new()
        .income(IncomeBuilder::recurring("Default").amount(1))
        .income(IncomeBuilder::recurring("Weekly").amount(1).weekly(5).probable())
        .income(IncomeBuilder::recurring("Split").amount(1).twice_monthly_split(1, 10, 15, 20))
        .income(IncomeBuilder::recurring("Legacy").amount(1).legacy(Frequency::Biweekly, 3))
        .build();

    let default = &input.incomes[0];
    assert_eq!(default.frequency, Frequency::Monthly);
    assert_eq!(
        default.payment_schedule,
        Some(PaymentSchedule::DayOfMonth { day_of_month: 1 })
    );
    assert_eq!(default.certainty, Certainty::Guaranteed);
    assert!(default.is_active);

    let weekly = &input.incomes[1];
    assert_eq!(weekly.frequency, Frequency::Weekly);
    assert_eq!(weekly.certainty, Certainty::Probable);

    assert!(matches!(
        input.incomes[2].payment_schedule,
        Some(PaymentSchedule::TwiceMonthly {
            first_amount: Some(10),
            second_amount: Some(20),
            ..
        })
    ));

    let legacy = &input.incomes[3];
    assert_eq!(legacy.payment_schedule, None);
    assert_eq!(legacy.payment_day, Some(3));
}

/// Future statements are matched to cards by name
#[test]
fn test_future_statements_resolve_card_names() {
    let input = ProjectionBuilder::new()
        .future_statement("Amex", 2025, 5, 12_000)
        .credit_card("Visa", 20_000, 12)
        .credit_card("Amex", 5_000, 3)
        .future_statement("Ghost card", 2025, 5, 1)
        .build();

    assert_eq!(input.future_statements.len(), 1);
    let statement = &input.future_statements[0];
    assert_eq!(statement.credit_card_id, CardId::from("card-2"));
    assert!(statement.matches(&CardId::from("card-2"), 2025, 5));
    assert!(!statement.matches(&CardId::from("card-1"), 2025, 5));
}

/// A complete household built with the DSL and projected
#[test]
fn test_builder_household_projection() {
    let input = ProjectionBuilder::new()
        .start(2025, 1, 1)
        .days(31)
        .account(
            AccountBuilder::checking("Main")
                .balance(300_000)
                .updated_at(super::ts("2024-12-31T20:00:00Z")),
        )
        .account(AccountBuilder::investment("Brokerage").balance(5_000_000))
        .income(IncomeBuilder::recurring("Salary").amount(400_000).twice_monthly(5, 20))
        .income(IncomeBuilder::recurring("Tutoring").amount(30_000).weekly(6).uncertain())
        .fixed_expense("Rent", 180_000, 10)
        .fixed_expense("Utilities", 25_000, 28)
        .credit_card("Visa", 95_000, 12)
        .build();

    let projection = calculate_projection(&input, &clock_at(2025, 1, 1)).unwrap();

    // Saturdays in January 2025: 4, 11, 18, 25
    assert_eq!(projection.optimistic.total_income, 920_000);
    assert_eq!(projection.pessimistic.total_income, 800_000);
    assert_eq!(projection.pessimistic.total_expenses, 300_000);
    assert_eq!(projection.pessimistic.end_balance, 800_000);
    assert_eq!(projection.optimistic.end_balance, 920_000);
    assert!(projection.first_danger_day(Scenario::Pessimistic).is_none());
}
