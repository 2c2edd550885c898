// SPDX-License-Identifier: MIT

//!
//! Month ranges (decoded from a [`crate::MonthMask`]) and their human readable
//! forms
//!

use crate::{CalendarRecord, MONTHS_PER_YEAR, MonthIndex};
use serde::{Deserialize, Serialize};

/// A maximal run of contiguous active months.
///
/// `start` and `end` are within the calendar year.  If the run continues from
/// December into the following January, `wraps_year` is set and
/// `wrapped_end` holds the last active month of that continuation.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MonthRange {
    start: MonthIndex,
    end: MonthIndex,
    wraps_year: bool,
    wrapped_end: Option<MonthIndex>,
}

impl MonthRange {
    /// A range that doesn't wrap into the next year
    pub(crate) fn new(start: MonthIndex, end: MonthIndex) -> Self {
        debug_assert!(start <= end);
        MonthRange {
            start,
            end,
            wraps_year: false,
            wrapped_end: None,
        }
    }

    /// A range that continues into January of the next year, ending at
    /// `wrapped_end`
    pub(crate) fn wrapping(start: MonthIndex, end: MonthIndex, wrapped_end: MonthIndex) -> Self {
        debug_assert!(start <= end);
        MonthRange {
            start,
            end,
            wraps_year: true,
            wrapped_end: Some(wrapped_end),
        }
    }

    /// The first month of the range
    pub fn start(&self) -> MonthIndex {
        self.start
    }

    /// The last month of the range within the starting year
    pub fn end(&self) -> MonthIndex {
        self.end
    }

    /// Whether the range continues into the next year
    pub fn wraps_year(&self) -> bool {
        self.wraps_year
    }

    /// The last month of the continuation into the next year (if any)
    pub fn wrapped_end(&self) -> Option<MonthIndex> {
        self.wrapped_end
    }

    /// The month the range finishes in, whichever year that is in
    pub fn final_month(&self) -> MonthIndex {
        self.wrapped_end.unwrap_or(self.end)
    }

    /// The last column the range occupies on a timeline whose columns carry on
    /// past December (i.e. column 12 is January of the following year)
    pub fn last_column(&self) -> u8 {
        match self.wrapped_end {
            Some(wrapped_end) => MONTHS_PER_YEAR + wrapped_end.value(),
            None => self.end.value(),
        }
    }

    /// The number of months the range covers
    pub fn month_count(&self) -> u8 {
        self.last_column() - self.start.value() + 1
    }

    /// Every month the range covers, in the order they occur
    pub fn months(&self) -> Vec<MonthIndex> {
        let mut months: Vec<MonthIndex> = (self.start.value()..=self.end.value())
            .map(MonthIndex::from_bit)
            .collect();
        if let Some(wrapped_end) = self.wrapped_end {
            months.extend((0..=wrapped_end.value()).map(MonthIndex::from_bit));
        }
        months
    }

    /// Short label, e.g. `Mar`, `Mar - May`, or `Nov - Feb (wraps year)`
    pub fn label(&self) -> String {
        let final_month = self.final_month();
        let mut label = if self.month_count() == 1 {
            self.start.abbreviation().to_string()
        } else {
            format!(
                "{} - {}",
                self.start.abbreviation(),
                final_month.abbreviation()
            )
        };
        if self.wraps_year {
            label.push_str(" (wraps year)");
        }
        label
    }
}

/// How to pick days of the month when writing a month range as a date range.
/// A mask only knows about months, so the days are a presentational choice.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DayConvention {
    /// From the 1st of the start month to the last day of the end month
    #[default]
    CalendarBounds,

    /// From `start_day` of the start month to `end_days_before_month_end` days
    /// before the end of the end month
    Inset {
        start_day: u8,
        end_days_before_month_end: u8,
    },
}

impl DayConvention {
    /// The day of the month a range starting in `month` starts on
    pub fn start_day(&self, month: MonthIndex) -> u8 {
        match self {
            DayConvention::CalendarBounds => 1,
            DayConvention::Inset { start_day, .. } => (*start_day).clamp(1, month.days_in_month()),
        }
    }

    /// The day of the month a range ending in `month` ends on
    pub fn end_day(&self, month: MonthIndex) -> u8 {
        let days = month.days_in_month();
        match self {
            DayConvention::CalendarBounds => days,
            DayConvention::Inset {
                end_days_before_month_end,
                ..
            } => days.saturating_sub(*end_days_before_month_end).max(1),
        }
    }
}

/// Write a range for people to read.  A record's period label is used as-is
/// when it has one, otherwise e.g. `Nov 1 - Feb 28`.
pub fn format_range<R: CalendarRecord>(
    range: &MonthRange,
    record: &R,
    convention: DayConvention,
) -> String {
    if let Some(period) = record.period() {
        return period.to_string();
    }
    let start = range.start();
    let end = range.final_month();
    format!(
        "{} {} - {} {}",
        start.abbreviation(),
        convention.start_day(start),
        end.abbreviation(),
        convention.end_day(end)
    )
}
