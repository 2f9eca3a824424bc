//! Date-only time zone boundary
//!
//! Instants (`jiff::Timestamp`) come in from the host: stored
//! `balance_updated_at` values and the current time. They are turned into
//! calendar days here, in one IANA zone, and nothing past this module ever sees
//! a time-of-day again.

use jiff::Timestamp;
use jiff::civil::Date;
use jiff::tz::TimeZone;

use crate::error::DateError;

/// The injected "now" plus the zone used to resolve calendar days.
///
/// Passed explicitly into every engine entry point so a projection is fully
/// determined by its arguments.
#[derive(Debug, Clone)]
pub struct Clock {
    now: Timestamp,
    time_zone: TimeZone,
}

impl Clock {
    /// Real wall-clock time in the named zone
    pub fn system(zone: &str) -> Result<Self, DateError> {
        Self::fixed(Timestamp::now(), zone)
    }

    /// A clock frozen at `now`
    pub fn fixed(now: Timestamp, zone: &str) -> Result<Self, DateError> {
        Ok(Self {
            now,
            time_zone: time_zone(zone)?,
        })
    }

    #[must_use]
    pub fn with_time_zone(now: Timestamp, time_zone: TimeZone) -> Self {
        Self { now, time_zone }
    }

    #[must_use]
    pub fn utc(now: Timestamp) -> Self {
        Self::with_time_zone(now, TimeZone::UTC)
    }

    pub fn now(&self) -> Timestamp {
        self.now
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// Today's calendar day in this clock's zone
    pub fn today(&self) -> Date {
        calendar_day(self.now, &self.time_zone)
    }

    /// Calendar day of an arbitrary instant in this clock's zone
    pub fn calendar_day(&self, timestamp: Timestamp) -> Date {
        calendar_day(timestamp, &self.time_zone)
    }
}

/// Look up an IANA zone identifier such as `"America/Sao_Paulo"`.
pub fn time_zone(name: &str) -> Result<TimeZone, DateError> {
    TimeZone::get(name).map_err(|source| DateError::UnknownTimeZone {
        name: name.to_string(),
        source,
    })
}

/// The date an instant falls on in `tz`.
pub fn calendar_day(timestamp: Timestamp, tz: &TimeZone) -> Date {
    timestamp.to_zoned(tz.clone()).date()
}

/// Parse either a bare date (`2025-01-31`) or an RFC 3339 instant
/// (`2025-01-31T02:00:00Z`). Instants are resolved to their date in `tz`.
pub fn parse_calendar_day(input: &str, tz: &TimeZone) -> Result<Date, DateError> {
    let trimmed = input.trim();
    if let Ok(timestamp) = trimmed.parse::<Timestamp>() {
        return Ok(calendar_day(timestamp, tz));
    }
    trimmed.parse::<Date>().map_err(|source| DateError::Format {
        input: input.to_string(),
        source,
    })
}

/// Render a calendar day after passing it through `tz`.
///
/// Start-of-day in the zone is resolved and its date taken back out, so the
/// result always equals `date` and formatting twice gives the same string.
pub fn format_calendar_day(date: Date, tz: &TimeZone) -> Result<String, DateError> {
    let zoned = date
        .to_zoned(tz.clone())
        .map_err(|source| DateError::Format {
            input: date.to_string(),
            source,
        })?;
    Ok(zoned.date().to_string())
}
