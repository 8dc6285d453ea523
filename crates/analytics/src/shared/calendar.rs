//! Calendar window arithmetic for the time-bucketed charts.
//!
//! Windows are inclusive `[start, end]` day pairs. Granularity is the
//! calendar date: an instant belongs to the day it falls on, so the
//! inclusive upper bound cannot drop end-of-day records.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Inclusive `[start, end]` pair of calendar days.
pub type Window = (NaiveDate, NaiveDate);

/// First and last day of the calendar month `offset_months` before
/// `reference`. Offset 0 is the month `reference` falls in.
pub fn month_window(reference: NaiveDate, offset_months: u32) -> Window {
    let shifted = reference
        .checked_sub_months(Months::new(offset_months))
        .unwrap_or(reference);
    let start = shifted.with_day(1).unwrap_or(shifted);
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .unwrap_or(start);
    (start, end)
}

/// The single calendar day `offset_days` before `reference`, as a window.
pub fn day_window(reference: NaiveDate, offset_days: u32) -> Window {
    let day = reference
        .checked_sub_days(Days::new(u64::from(offset_days)))
        .unwrap_or(reference);
    (day, day)
}

/// Window membership, inclusive on both ends.
pub fn in_window(date: NaiveDate, window: Window) -> bool {
    window.0 <= date && date <= window.1
}
