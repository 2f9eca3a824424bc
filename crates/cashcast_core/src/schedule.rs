//! Payment-day rules for recurring incomes
//!
//! `Recurrence` is the validated form of a `(Frequency, PaymentSchedule)`
//! pair. Most rules can be decided from the date alone; the anchored ones
//! (weekly/biweekly by day-of-month, biweekly by weekday) also need to know
//! when the series started inside the current walk, which `AnchorState`
//! tracks per source.

use jiff::civil::Date;
use rustc_hash::FxHashMap;

use crate::date_math::is_clamped_day;
use crate::model::{Cents, IncomeId};

pub const WEEKLY_INTERVAL_DAYS: u32 = 7;
pub const BIWEEKLY_INTERVAL_DAYS: u32 = 14;

/// A validated recurrence rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recurrence {
    /// Every week on an ISO weekday (1 = Monday)
    Weekly { weekday: u8 },
    /// Every other week on an ISO weekday, counted from the first match
    BiweeklyOnWeekday { weekday: u8 },
    /// Once a month on a clamped day-of-month
    Monthly { day: u8 },
    /// Twice a month on two clamped days, optionally with per-day amounts
    TwiceMonthly {
        first_day: u8,
        second_day: u8,
        first_amount: Option<Cents>,
        second_amount: Option<Cents>,
    },
    /// Legacy weekly/biweekly: first hit on a clamped day-of-month, then every
    /// `interval_days` after it
    Anchored { day_of_month: u8, interval_days: u32 },
}

/// Due iff `date` is the clamped occurrence of `day` in its month
#[inline]
pub fn is_day_of_month_due(date: Date, day: u8) -> bool {
    is_clamped_day(date, day)
}

/// Due iff `date` falls on ISO `weekday` (1 = Monday .. 7 = Sunday)
#[inline]
pub fn is_day_of_week_due(date: Date, weekday: u8) -> bool {
    date.weekday().to_monday_one_offset() as u8 == weekday
}

/// Amount paid on `date` by a twice-monthly schedule, if it pays that day.
///
/// Overrides apply only when both are set. When both configured days clamp to
/// the same date, the first day wins.
pub fn twice_monthly_amount(
    date: Date,
    first_day: u8,
    second_day: u8,
    first_amount: Option<Cents>,
    second_amount: Option<Cents>,
    base_amount: Cents,
) -> Option<Cents> {
    let overrides = first_amount.zip(second_amount);
    if is_clamped_day(date, first_day) {
        Some(overrides.map_or(base_amount, |(first, _)| first))
    } else if is_clamped_day(date, second_day) {
        Some(overrides.map_or(base_amount, |(_, second)| second))
    } else {
        None
    }
}

/// First-occurrence offsets of anchored series, scoped to one horizon walk.
#[derive(Debug, Default, Clone)]
pub struct AnchorState {
    first_occurrence: FxHashMap<IncomeId, u32>,
}

impl AnchorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Day offset at which the series for `source` started, if it has
    pub fn anchor(&self, source: &IncomeId) -> Option<u32> {
        self.first_occurrence.get(source).copied()
    }

    /// Decide an anchored occurrence.
    ///
    /// Before the series starts, `starts_today` anchors it at `day_offset`.
    /// Afterwards the source is due every `interval_days`, and only when
    /// `still_matches` holds.
    fn step(
        &mut self,
        source: &IncomeId,
        day_offset: u32,
        starts_today: bool,
        still_matches: bool,
        interval_days: u32,
    ) -> bool {
        match self.first_occurrence.get(source) {
            Some(&first) => {
                still_matches
                    && day_offset >= first
                    && (day_offset - first) % interval_days == 0
            }
            None if starts_today => {
                self.first_occurrence.insert(source.clone(), day_offset);
                true
            }
            None => false,
        }
    }
}

impl Recurrence {
    /// Amount paid by `source` on `date` (offset `day_offset` into the walk),
    /// or `None` when nothing is due.
    ///
    /// Must be called once per day in ascending offset order for anchored
    /// rules to see their first occurrence.
    pub fn due_amount(
        &self,
        source: &IncomeId,
        base_amount: Cents,
        date: Date,
        day_offset: u32,
        anchors: &mut AnchorState,
    ) -> Option<Cents> {
        let due = match *self {
            Recurrence::Weekly { weekday } => is_day_of_week_due(date, weekday),
            Recurrence::BiweeklyOnWeekday { weekday } => {
                let matches = is_day_of_week_due(date, weekday);
                anchors.step(
                    source,
                    day_offset,
                    matches,
                    matches,
                    BIWEEKLY_INTERVAL_DAYS,
                )
            }
            Recurrence::Monthly { day } => is_day_of_month_due(date, day),
            Recurrence::TwiceMonthly {
                first_day,
                second_day,
                first_amount,
                second_amount,
            } => {
                return twice_monthly_amount(
                    date,
                    first_day,
                    second_day,
                    first_amount,
                    second_amount,
                    base_amount,
                );
            }
            Recurrence::Anchored {
                day_of_month,
                interval_days,
            } => anchors.step(
                source,
                day_offset,
                is_clamped_day(date, day_of_month),
                true,
                interval_days,
            ),
        };
        due.then_some(base_amount)
    }
}
