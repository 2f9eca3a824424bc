//! Income Builder DSL
//!
//! ```ignore
//! use cashcast_core::config::IncomeBuilder;
//!
//! // Salary on the 5th and 20th, split unevenly
//! let salary = IncomeBuilder::recurring("Salary")
//!     .amount(400_000)
//!     .twice_monthly_split(5, 250_000, 20, 150_000);
//!
//! // Freelance invoice that may or may not be paid on time
//! let invoice = IncomeBuilder::single_shot("Invoice #12", jiff::civil::date(2025, 2, 14))
//!     .amount(80_000)
//!     .probable();
//! ```

use jiff::civil::Date;

use crate::model::{
    Cents, Certainty, Frequency, IncomeId, PaymentSchedule, RecurringIncome, SingleShotIncome,
};

/// Builder for recurring and single-shot incomes
#[derive(Debug, Clone)]
pub struct IncomeBuilder {
    pub(crate) name: String,
    amount: Cents,
    certainty: Certainty,
    kind: IncomeKind,
}

#[derive(Debug, Clone)]
enum IncomeKind {
    Recurring {
        is_active: bool,
        frequency: Frequency,
        schedule: Option<PaymentSchedule>,
        payment_day: Option<u8>,
    },
    SingleShot {
        date: Date,
    },
}

/// What an `IncomeBuilder` resolves to
#[derive(Debug, Clone)]
pub(crate) enum BuiltIncome {
    Recurring(RecurringIncome),
    SingleShot(SingleShotIncome),
}

impl IncomeBuilder {
    /// Recurring income, monthly on the 1st until configured otherwise
    #[must_use]
    pub fn recurring(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: 0,
            certainty: Certainty::Guaranteed,
            kind: IncomeKind::Recurring {
                is_active: true,
                frequency: Frequency::Monthly,
                schedule: Some(PaymentSchedule::DayOfMonth { day_of_month: 1 }),
                payment_day: None,
            },
        }
    }

    /// Income that arrives exactly once
    #[must_use]
    pub fn single_shot(name: impl Into<String>, date: Date) -> Self {
        Self {
            name: name.into(),
            amount: 0,
            certainty: Certainty::Guaranteed,
            kind: IncomeKind::SingleShot { date },
        }
    }

    // =========================================================================
    // Amount & certainty
    // =========================================================================

    #[must_use]
    pub fn amount(mut self, cents: Cents) -> Self {
        self.amount = cents;
        self
    }

    #[must_use]
    pub fn certainty(mut self, certainty: Certainty) -> Self {
        self.certainty = certainty;
        self
    }

    #[must_use]
    pub fn guaranteed(self) -> Self {
        self.certainty(Certainty::Guaranteed)
    }

    #[must_use]
    pub fn probable(self) -> Self {
        self.certainty(Certainty::Probable)
    }

    #[must_use]
    pub fn uncertain(self) -> Self {
        self.certainty(Certainty::Uncertain)
    }

    /// Keep the income on file but out of projections
    #[must_use]
    pub fn inactive(mut self) -> Self {
        if let IncomeKind::Recurring { is_active, .. } = &mut self.kind {
            *is_active = false;
        }
        self
    }

    // =========================================================================
    // Schedules (ignored for single-shot incomes)
    // =========================================================================

    fn schedule(mut self, freq: Frequency, sched: PaymentSchedule) -> Self {
        if let IncomeKind::Recurring {
            frequency,
            schedule,
            payment_day,
            ..
        } = &mut self.kind
        {
            *frequency = freq;
            *schedule = Some(sched);
            *payment_day = None;
        }
        self
    }

    /// Every week on an ISO weekday (1 = Monday)
    #[must_use]
    pub fn weekly(self, day_of_week: u8) -> Self {
        self.schedule(Frequency::Weekly, PaymentSchedule::DayOfWeek { day_of_week })
    }

    /// Every other week on an ISO weekday, counted from the first match
    #[must_use]
    pub fn biweekly(self, day_of_week: u8) -> Self {
        self.schedule(Frequency::Biweekly, PaymentSchedule::DayOfWeek { day_of_week })
    }

    #[must_use]
    pub fn monthly(self, day_of_month: u8) -> Self {
        self.schedule(Frequency::Monthly, PaymentSchedule::DayOfMonth { day_of_month })
    }

    /// Two paydays a month, each paying the base amount
    #[must_use]
    pub fn twice_monthly(self, first_day: u8, second_day: u8) -> Self {
        self.schedule(
            Frequency::TwiceMonthly,
            PaymentSchedule::TwiceMonthly {
                first_day,
                second_day,
                first_amount: None,
                second_amount: None,
            },
        )
    }

    /// Two paydays a month with their own amounts
    #[must_use]
    pub fn twice_monthly_split(
        self,
        first_day: u8,
        first_amount: Cents,
        second_day: u8,
        second_amount: Cents,
    ) -> Self {
        self.schedule(
            Frequency::TwiceMonthly,
            PaymentSchedule::TwiceMonthly {
                first_day,
                second_day,
                first_amount: Some(first_amount),
                second_amount: Some(second_amount),
            },
        )
    }

    /// Set an arbitrary frequency/schedule pair, matching or not
    #[must_use]
    pub fn with_schedule(self, frequency: Frequency, schedule: PaymentSchedule) -> Self {
        self.schedule(frequency, schedule)
    }

    /// Older record shape: a frequency plus a bare day-of-month
    #[must_use]
    pub fn legacy(mut self, freq: Frequency, day: u8) -> Self {
        if let IncomeKind::Recurring {
            frequency,
            schedule,
            payment_day,
            ..
        } = &mut self.kind
        {
            *frequency = freq;
            *schedule = None;
            *payment_day = Some(day);
        }
        self
    }

    pub(crate) fn build(self, id: IncomeId) -> BuiltIncome {
        match self.kind {
            IncomeKind::Recurring {
                is_active,
                frequency,
                schedule,
                payment_day,
            } => BuiltIncome::Recurring(RecurringIncome {
                id,
                name: self.name,
                amount: self.amount,
                certainty: self.certainty,
                is_active,
                frequency,
                payment_schedule: schedule,
                payment_day,
            }),
            IncomeKind::SingleShot { date } => BuiltIncome::SingleShot(SingleShotIncome {
                id,
                name: self.name,
                amount: self.amount,
                date,
                certainty: self.certainty,
            }),
        }
    }
}
