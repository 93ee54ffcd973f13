// src/calendar.rs

//! Working-day calendar arithmetic.
//!
//! Saturdays and Sundays are the only non-working days. There is no holiday
//! calendar.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::errors::{Result, WorkplanError};

/// Whether `date` falls on Monday..=Friday.
pub fn is_working_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Walk forward from `start` until `duration` working days have been counted
/// and return the last counted day.
///
/// `start` itself never counts, so `compute_end_date(s, 0) == s` even when
/// `s` is a weekend day.
pub fn compute_end_date(start: NaiveDate, duration: i64) -> Result<NaiveDate> {
    if duration < 0 {
        return Err(WorkplanError::InvalidDuration(duration));
    }

    let mut current = start;
    let mut counted = 0;

    while counted < duration {
        current = current
            .succ_opt()
            .ok_or(WorkplanError::DateOutOfRange(current))?;
        if is_working_day(current) {
            counted += 1;
        }
    }

    Ok(current)
}

/// Number of working days in the closed range `[start, end]`.
///
/// Returns 0 for an inverted range.
pub fn working_days_in_span(start: NaiveDate, end: NaiveDate) -> i64 {
    if end < start {
        return 0;
    }

    start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter(|day| is_working_day(*day))
        .count() as i64
}

/// Last day of a window that opens on `start` and covers `working_days`
/// working days, `start` included when it is itself a working day.
///
/// This is the inverse of [`working_days_in_span`] for any positive count.
pub fn end_of_span(start: NaiveDate, working_days: i64) -> Result<NaiveDate> {
    if working_days < 0 {
        return Err(WorkplanError::InvalidDuration(working_days));
    }

    if working_days > 0 && is_working_day(start) {
        compute_end_date(start, working_days - 1)
    } else {
        compute_end_date(start, working_days)
    }
}
