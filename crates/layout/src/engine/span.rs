// SPDX-License-Identifier: MIT

//!
//! The number of month columns the grid needs
//!

use crop_calendar_core::{CalendarRecord, MONTHS_PER_YEAR};

/// The fewest month columns a grid has (one year)
pub const MIN_SPAN: u8 = MONTHS_PER_YEAR;

/// The most month columns a grid has (two years)
pub const MAX_SPAN: u8 = 2 * MONTHS_PER_YEAR;

/// A number of month columns
pub type TimelineSpan = u8;

/// Work out how many month columns are needed to show every record's ranges,
/// including ranges that wrap into the next year
pub fn span<R: CalendarRecord>(records: &[R]) -> TimelineSpan {
    span_within(records, MIN_SPAN, MAX_SPAN)
}

/// As [`span`], but padded to at least `min` columns and capped at `max`.
/// The cap never cuts off a wrapped range: the result is at least the span
/// the records need.
pub fn span_within<R: CalendarRecord>(records: &[R], min: u8, max: u8) -> TimelineSpan {
    let needed = records
        .iter()
        .flat_map(|record| record.month_mask().decode())
        .filter(|range| range.wraps_year())
        .map(|range| range.last_column() + 1)
        .max()
        .unwrap_or(MIN_SPAN)
        .clamp(MIN_SPAN, MAX_SPAN);
    needed.max(min).min(max.max(needed))
}
