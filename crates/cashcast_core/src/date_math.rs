//! Calendar-day arithmetic for the daily walk.
//!
//! Every projection touches `days × entities` dates, so the helpers here work
//! on Rata Die day numbers instead of building jiff `Span`s. All of them take
//! and return `jiff::civil::Date`; there is no time-of-day anywhere below the
//! timezone boundary.

use jiff::civil::Date;

#[inline]
pub fn is_leap_year(year: i16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`.
#[inline]
pub fn days_in_month(year: i16, month: i8) -> i8 {
    const DAYS: [i8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[(month - 1) as usize]
    }
}

/// Effective day for a configured day-of-month in a given month.
///
/// `min(day, days_in_month)`: a 31st falls on the 30th in April and on the
/// 28th/29th in February.
#[inline]
pub fn clamp_day_of_month(day: u8, year: i16, month: i8) -> i8 {
    let last = days_in_month(year, month);
    (day as i8).min(last)
}

/// True when `date` is the clamped occurrence of `day` in its own month.
#[inline]
pub fn is_clamped_day(date: Date, day: u8) -> bool {
    date.day() == clamp_day_of_month(day, date.year(), date.month())
}

/// (year, month) of the month after the given one.
#[inline]
pub fn next_month(year: i16, month: i8) -> (i16, i8) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Rata Die day number (days since 0001-01-01, proleptic Gregorian).
#[inline]
fn rata_die(d: Date) -> i32 {
    let y = d.year() as i32;
    let m = d.month() as i32;
    let day = d.day() as i32;

    // March-based year so February is the last month
    let a = (14 - m) / 12;
    let y2 = y - a;
    let m2 = m + 12 * a - 3;

    day + (153 * m2 + 2) / 5 + 365 * y2 + y2 / 4 - y2 / 100 + y2 / 400 - 306
}

#[inline]
fn rd_to_date(rd: i32) -> Date {
    let z = rd + 306;
    let h = 100 * z - 25;
    let a = h / 3_652_425;
    let b = a - a / 4;
    let y = (100 * b + h) / 36_525;
    let c = b + z - 365 * y - y / 4;
    let m = (5 * c + 456) / 153;
    let day = c - (153 * m - 457) / 5;

    let (year, month) = if m > 12 { (y + 1, m - 12) } else { (y, m) };

    jiff::civil::date(year as i16, month as i8, day as i8)
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
#[inline]
pub fn days_between(from: Date, to: Date) -> i32 {
    rata_die(to) - rata_die(from)
}

/// `d` shifted by `n` calendar days.
#[inline]
pub fn add_days(d: Date, n: i32) -> Date {
    rd_to_date(rata_die(d) + n)
}
