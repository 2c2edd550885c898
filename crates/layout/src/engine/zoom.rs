// SPDX-License-Identifier: MIT

//!
//! Zoom levels (how many months a grid column covers)
//!

use crate::month_to_cell;
use crop_calendar_core::{MONTH_ABBREVIATIONS, MONTHS_PER_YEAR, MonthRange};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How many months each column of the grid covers
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ZoomLevel {
    /// One month per column
    #[default]
    #[display("month")]
    Month,

    /// Three months per column
    #[display("quarter")]
    Quarter,
}

impl ZoomLevel {
    pub fn months_per_column(&self) -> u8 {
        match self {
            ZoomLevel::Month => 1,
            ZoomLevel::Quarter => 3,
        }
    }

    /// The number of columns needed to show `span` months
    pub fn column_count(&self, span: u8) -> u8 {
        span.div_ceil(self.months_per_column())
    }

    /// The heading of a column (e.g. `Mar` or `Q2`).  Columns past the end of
    /// the first year repeat the labels.
    pub fn column_label(&self, column: u8) -> String {
        match self {
            ZoomLevel::Month => {
                MONTH_ABBREVIATIONS[usize::from(column % MONTHS_PER_YEAR)].to_string()
            }
            ZoomLevel::Quarter => format!("Q{}", (column % 4) + 1),
        }
    }

    /// Which year a column is in (0 for the first year, 1 for the next)
    pub fn year_offset(&self, column: u8) -> u8 {
        (column * self.months_per_column()) / MONTHS_PER_YEAR
    }

    /// The first and last (inclusive) columns a range is drawn across
    pub fn cells(&self, range: &MonthRange) -> (u8, u8) {
        let months_per_column = self.months_per_column();
        (
            month_to_cell(range.start().value(), months_per_column),
            month_to_cell(range.last_column(), months_per_column),
        )
    }
}

impl FromStr for ZoomLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "month" | "months" => Ok(ZoomLevel::Month),
            "quarter" | "quarters" => Ok(ZoomLevel::Quarter),
            other => Err(format!("unknown zoom level `{other}` (month or quarter)")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crop_calendar_core::MonthMask;
    use crop_calendar_macros::month_mask;

    #[test]
    fn columns() {
        assert_eq!(ZoomLevel::Month.column_count(14), 14);
        assert_eq!(ZoomLevel::Quarter.column_count(12), 4);
        assert_eq!(ZoomLevel::Quarter.column_count(14), 5);
        assert_eq!(ZoomLevel::Quarter.column_count(24), 8);
    }

    #[test]
    fn labels() {
        assert_eq!(ZoomLevel::Month.column_label(0), "Jan");
        assert_eq!(ZoomLevel::Month.column_label(13), "Feb");
        assert_eq!(ZoomLevel::Month.year_offset(11), 0);
        assert_eq!(ZoomLevel::Month.year_offset(12), 1);
        assert_eq!(ZoomLevel::Quarter.column_label(1), "Q2");
        assert_eq!(ZoomLevel::Quarter.column_label(4), "Q1");
        assert_eq!(ZoomLevel::Quarter.year_offset(3), 0);
        assert_eq!(ZoomLevel::Quarter.year_offset(4), 1);
    }

    #[test]
    fn cells() {
        // Nov - Feb
        let ranges = month_mask!(0b1100_0000_0011).decode();
        assert_eq!(ZoomLevel::Month.cells(&ranges[0]), (10, 13));
        assert_eq!(ZoomLevel::Quarter.cells(&ranges[0]), (3, 4));

        // Mar - May
        let ranges = month_mask!(0b1_1100).decode();
        assert_eq!(ZoomLevel::Quarter.cells(&ranges[0]), (0, 1));
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("Quarter".parse::<ZoomLevel>(), Ok(ZoomLevel::Quarter));
        assert!("week".parse::<ZoomLevel>().is_err());
        assert_eq!(ZoomLevel::Month.to_string(), "month");
        assert_eq!(
            serde_json::to_string(&ZoomLevel::Quarter).unwrap(),
            r#""quarter""#
        );
    }
}
