//! Scenario-level tests for the projection engine
//!
//! Tests are organized by topic:
//! - `scenarios` - Daily walk, scenario split, danger days, validation failures
//! - `schedules` - Payment-frequency rules driven through the simulator
//! - `credit_cards` - Statement vs declared vs undeclared card bills
//! - `today_estimate` - Today-balance estimation, rebasing and flow selection
//! - `builder_dsl` - Builder DSL for fluent projection setup
//! - `batch` - Independent projections over many inputs

mod builder_dsl;
mod scenarios;

use jiff::Timestamp;

use crate::timezone::Clock;

/// Parse an RFC 3339 instant
pub(crate) fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

/// UTC clock frozen at noon on the given day
pub(crate) fn clock_at(year: i16, month: i8, day: i8) -> Clock {
    let now = jiff::civil::date(year, month, day)
        .at(12, 0, 0, 0)
        .to_zoned(jiff::tz::TimeZone::UTC)
        .unwrap()
        .timestamp();
    Clock::utc(now)
}
