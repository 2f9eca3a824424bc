//! Input validation and filtering
//!
//! Checks every entity against its structural constraints and splits the
//! collections into what the simulator consumes. The first violation fails
//! the whole call; nothing downstream ever runs on a partially valid input.

use jiff::Span;
use jiff::civil::Date;
use tracing::debug;

use crate::config::{DEFAULT_PROJECTION_DAYS, ProjectionInput, ProjectionOptions, ResolvedOptions};
use crate::error::ValidationError;
use crate::model::{
    Account, Cents, Certainty, CreditCard, FixedExpense, Frequency, FutureStatement, IncomeId,
    PaymentSchedule, RecurringIncome, SingleShotExpense, SingleShotIncome, starting_balance,
};
use crate::schedule::{BIWEEKLY_INTERVAL_DAYS, Recurrence, WEEKLY_INTERVAL_DAYS};
use crate::timezone::Clock;

/// A recurring income that passed validation, with its rule resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledIncome {
    pub id: IncomeId,
    pub name: String,
    pub amount: Cents,
    pub certainty: Certainty,
    pub recurrence: Recurrence,
}

/// Validated entities, partitioned for the simulator
#[derive(Debug, Clone)]
pub struct FilteredInput {
    pub accounts: Vec<Account>,
    /// Active recurring incomes of any certainty
    pub active_incomes: Vec<ScheduledIncome>,
    /// Active recurring incomes that are also guaranteed
    pub guaranteed_incomes: Vec<ScheduledIncome>,
    pub single_shot_incomes: Vec<SingleShotIncome>,
    /// Active fixed expenses only
    pub fixed_expenses: Vec<FixedExpense>,
    pub single_shot_expenses: Vec<SingleShotExpense>,
    pub credit_cards: Vec<CreditCard>,
    pub future_statements: Vec<FutureStatement>,
    pub options: ResolvedOptions,
}

impl FilteredInput {
    /// Sum of checking balances
    pub fn starting_balance(&self) -> Cents {
        starting_balance(&self.accounts)
    }
}

/// Validate `input` and partition it. `clock` supplies the default start date.
pub fn validate_input(
    input: &ProjectionInput,
    clock: &Clock,
) -> Result<FilteredInput, ValidationError> {
    let options = resolve_options(&input.options, clock)?;

    for account in &input.accounts {
        validate_account(account)?;
    }

    let mut active_incomes = Vec::new();
    for income in &input.incomes {
        let recurrence = resolve_recurrence(income)?;
        if income.is_active {
            active_incomes.push(ScheduledIncome {
                id: income.id.clone(),
                name: income.name.clone(),
                amount: income.amount,
                certainty: income.certainty,
                recurrence,
            });
        }
    }
    let guaranteed_incomes = active_incomes
        .iter()
        .filter(|i| i.certainty.is_guaranteed())
        .cloned()
        .collect();

    for income in &input.single_shot_incomes {
        require_positive(&income.name, income.amount)?;
    }
    for expense in &input.fixed_expenses {
        require_positive(&expense.name, expense.amount)?;
        require_day_of_month(&expense.name, "due_day", expense.due_day)?;
    }
    for expense in &input.single_shot_expenses {
        require_positive(&expense.name, expense.amount)?;
    }
    for card in &input.credit_cards {
        require_non_negative(&card.name, "statement_balance", card.statement_balance)?;
        require_day_of_month(&card.name, "due_day", card.due_day)?;
    }
    for statement in &input.future_statements {
        validate_future_statement(statement)?;
    }

    let filtered = FilteredInput {
        accounts: input.accounts.clone(),
        active_incomes,
        guaranteed_incomes,
        single_shot_incomes: input.single_shot_incomes.clone(),
        fixed_expenses: input
            .fixed_expenses
            .iter()
            .filter(|e| e.is_active)
            .cloned()
            .collect(),
        single_shot_expenses: input.single_shot_expenses.clone(),
        credit_cards: input.credit_cards.clone(),
        future_statements: input.future_statements.clone(),
        options,
    };

    debug!(
        start = %filtered.options.start_date,
        days = filtered.options.projection_days,
        active_incomes = filtered.active_incomes.len(),
        guaranteed_incomes = filtered.guaranteed_incomes.len(),
        fixed_expenses = filtered.fixed_expenses.len(),
        credit_cards = filtered.credit_cards.len(),
        "input validated"
    );

    Ok(filtered)
}

fn resolve_options(
    options: &ProjectionOptions,
    clock: &Clock,
) -> Result<ResolvedOptions, ValidationError> {
    let days = options
        .projection_days
        .unwrap_or(i64::from(DEFAULT_PROJECTION_DAYS));
    let projection_days = u32::try_from(days)
        .ok()
        .filter(|d| *d > 0)
        .ok_or_else(|| {
            ValidationError::invalid_input("options", "projection_days must be a positive integer")
                .with_details(format!("projection_days={days}"))
        })?;

    let start_date = options.start_date.unwrap_or_else(|| clock.today());
    horizon_end(start_date, projection_days)?;

    Ok(ResolvedOptions {
        start_date,
        projection_days,
    })
}

/// Last day of a `days`-long walk from `start`, if the calendar reaches it.
pub(crate) fn horizon_end(start: Date, days: u32) -> Result<Date, ValidationError> {
    Span::new()
        .try_days(i64::from(days) - 1)
        .and_then(|span| start.checked_add(span))
        .map_err(|e| {
            ValidationError::invalid_input("options", "projection runs past the last supported date")
                .with_details(format!("start_date={start}, projection_days={days}: {e}"))
        })
}

fn validate_account(account: &Account) -> Result<(), ValidationError> {
    require_non_negative(&account.name, "balance", account.balance)
}

fn validate_future_statement(statement: &FutureStatement) -> Result<(), ValidationError> {
    let entity = format!(
        "future statement {} {}-{:02}",
        statement.credit_card_id, statement.target_year, statement.target_month
    );
    if !(1..=12).contains(&statement.target_month) {
        return Err(
            ValidationError::invalid_input(entity, "target_month must be between 1 and 12")
                .with_details(format!("target_month={}", statement.target_month)),
        );
    }
    require_non_negative(&entity, "amount", statement.amount)
}

/// Check a recurring income and turn its frequency/schedule pair into a rule.
pub fn resolve_recurrence(income: &RecurringIncome) -> Result<Recurrence, ValidationError> {
    let name = income.name.as_str();
    require_positive(name, income.amount)?;

    let Some(schedule) = &income.payment_schedule else {
        return resolve_legacy(income);
    };

    match (income.frequency, schedule) {
        (Frequency::Weekly, PaymentSchedule::DayOfWeek { day_of_week }) => {
            require_day_of_week(name, *day_of_week)?;
            Ok(Recurrence::Weekly {
                weekday: *day_of_week,
            })
        }
        (Frequency::Biweekly, PaymentSchedule::DayOfWeek { day_of_week }) => {
            require_day_of_week(name, *day_of_week)?;
            Ok(Recurrence::BiweeklyOnWeekday {
                weekday: *day_of_week,
            })
        }
        (Frequency::Monthly, PaymentSchedule::DayOfMonth { day_of_month }) => {
            require_day_of_month(name, "day_of_month", *day_of_month)?;
            Ok(Recurrence::Monthly { day: *day_of_month })
        }
        (
            Frequency::TwiceMonthly,
            PaymentSchedule::TwiceMonthly {
                first_day,
                second_day,
                first_amount,
                second_amount,
            },
        ) => {
            require_day_of_month(name, "first_day", *first_day)?;
            require_day_of_month(name, "second_day", *second_day)?;
            if first_day == second_day {
                return Err(ValidationError::invalid_input(
                    name,
                    "twice-monthly schedule needs two different days",
                )
                .with_details(format!("first_day={first_day}, second_day={second_day}")));
            }
            match (first_amount, second_amount) {
                (Some(first), Some(second)) => {
                    require_positive(name, *first)?;
                    require_positive(name, *second)?;
                }
                (None, None) => {}
                _ => {
                    return Err(ValidationError::invalid_input(
                        name,
                        "twice-monthly amounts must be set together or not at all",
                    ));
                }
            }
            Ok(Recurrence::TwiceMonthly {
                first_day: *first_day,
                second_day: *second_day,
                first_amount: *first_amount,
                second_amount: *second_amount,
            })
        }
        (frequency, schedule) => Err(ValidationError::invalid_input(
            name,
            "payment schedule does not match frequency",
        )
        .with_details(format!("frequency={frequency:?}, schedule={schedule:?}"))),
    }
}

/// Records that predate payment schedules carry only a day-of-month.
fn resolve_legacy(income: &RecurringIncome) -> Result<Recurrence, ValidationError> {
    let name = income.name.as_str();
    let Some(day) = income.payment_day else {
        return Err(ValidationError::invalid_input(
            name,
            "recurring income needs a payment schedule or a payment day",
        ));
    };
    require_day_of_month(name, "payment_day", day)?;

    match income.frequency {
        Frequency::Monthly => Ok(Recurrence::Monthly { day }),
        Frequency::Weekly => Ok(Recurrence::Anchored {
            day_of_month: day,
            interval_days: WEEKLY_INTERVAL_DAYS,
        }),
        Frequency::Biweekly => Ok(Recurrence::Anchored {
            day_of_month: day,
            interval_days: BIWEEKLY_INTERVAL_DAYS,
        }),
        Frequency::TwiceMonthly => Err(ValidationError::invalid_input(
            name,
            "twice-monthly income needs an explicit payment schedule",
        )),
    }
}

fn require_positive(entity: &str, amount: Cents) -> Result<(), ValidationError> {
    if amount <= 0 {
        return Err(
            ValidationError::invalid_amount(entity, "amount must be positive")
                .with_details(format!("amount={amount}")),
        );
    }
    Ok(())
}

fn require_non_negative(entity: &str, field: &str, value: Cents) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(
            ValidationError::invalid_amount(entity, format!("{field} must not be negative"))
                .with_details(format!("{field}={value}")),
        );
    }
    Ok(())
}

fn require_day_of_month(entity: &str, field: &str, day: u8) -> Result<(), ValidationError> {
    if !(1..=31).contains(&day) {
        return Err(ValidationError::invalid_input(
            entity,
            format!("{field} must be between 1 and 31"),
        )
        .with_details(format!("{field}={day}")));
    }
    Ok(())
}

fn require_day_of_week(entity: &str, day: u8) -> Result<(), ValidationError> {
    if !(1..=7).contains(&day) {
        return Err(
            ValidationError::invalid_input(entity, "day_of_week must be between 1 and 7")
                .with_details(format!("day_of_week={day}")),
        );
    }
    Ok(())
}
