// SPDX-License-Identifier: MIT

//!
//! Bar geometry
//!

use crate::{LayoutError, ZoomLevel, round_f64_to_nearest_0_1};
use crop_calendar_core::MonthRange;
use serde::Serialize;

/// The default space left between adjacent bars
pub const BAR_GUTTER: f64 = 8.0;

/// Where a bar starts (relative to the first column) and how wide it is
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarGeometry {
    pub left_offset: f64,
    pub width: f64,
}

impl BarGeometry {
    /// The x value where the bar ends
    pub fn right(&self) -> f64 {
        self.left_offset + self.width
    }
}

/// Lay out a range as a bar in a grid with one month per column, using the
/// default gutter.  A wrapping range carries on into columns 12 onwards.
pub fn layout_bar(range: &MonthRange, column_width: f64) -> Result<BarGeometry, LayoutError> {
    layout_bar_with_gutter(range, column_width, BAR_GUTTER)
}

/// As [`layout_bar`], with a given gutter.  The gutter must be positive and
/// is capped at half a column so a single month bar always has some width.
pub fn layout_bar_with_gutter(
    range: &MonthRange,
    column_width: f64,
    gutter: f64,
) -> Result<BarGeometry, LayoutError> {
    layout_bar_for_zoom(range, column_width, gutter, ZoomLevel::Month)
}

/// Lay out a range as a bar in a grid at the given zoom level.  `column_width`
/// is the width of one month; a grid column at quarter zoom is three months
/// wide.  A bar covers every grid column that any of its months fall in.
pub fn layout_bar_for_zoom(
    range: &MonthRange,
    column_width: f64,
    gutter: f64,
    zoom: ZoomLevel,
) -> Result<BarGeometry, LayoutError> {
    if !column_width.is_finite() || column_width <= 0.0 {
        return Err(LayoutError::InvalidColumnWidth(column_width));
    }
    if !gutter.is_finite() || gutter <= 0.0 {
        return Err(LayoutError::InvalidGutter(gutter));
    }
    let cell_width = column_width * f64::from(zoom.months_per_column());
    let gutter = gutter.min(cell_width / 2.0);
    let (first_cell, last_cell) = zoom.cells(range);
    let cells = f64::from(last_cell - first_cell + 1);
    Ok(BarGeometry {
        left_offset: round_f64_to_nearest_0_1(f64::from(first_cell) * cell_width),
        width: round_f64_to_nearest_0_1(cells * cell_width - gutter),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crop_calendar_core::MonthMask;

    fn ranges(mask: i64) -> Vec<MonthRange> {
        MonthMask::try_from(mask).unwrap().decode()
    }

    #[test]
    fn not_wrapping() {
        // Mar - May
        let range = ranges(0b1_1100)[0];
        assert_eq!(
            layout_bar(&range, 60.0),
            Ok(BarGeometry {
                left_offset: 120.0,
                width: 172.0
            })
        );
    }

    #[test]
    fn wrapping() {
        // Nov - Feb
        let range = ranges(0b1100_0000_0011)[0];
        assert_eq!(
            layout_bar(&range, 60.0),
            Ok(BarGeometry {
                left_offset: 600.0,
                width: 232.0
            })
        );
    }

    #[test]
    fn gutter() {
        let range = ranges(0b1)[0];
        let bar = layout_bar_with_gutter(&range, 10.0, 8.0).unwrap();
        assert_eq!(bar.width, 5.0);
        let bar = layout_bar_with_gutter(&range, 10.0, 2.0).unwrap();
        assert_eq!(bar.width, 8.0);
    }

    #[test]
    fn invalid_gutter() {
        let range = ranges(0b1)[0];
        assert_eq!(
            layout_bar_with_gutter(&range, 10.0, 0.0),
            Err(LayoutError::InvalidGutter(0.0))
        );
        assert_eq!(
            layout_bar_with_gutter(&range, 10.0, -2.0),
            Err(LayoutError::InvalidGutter(-2.0))
        );
        assert!(layout_bar_with_gutter(&range, 10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn quarter_zoom() {
        // Nov - Feb is in Q4 and the next Q1
        let range = ranges(0b1100_0000_0011)[0];
        let bar = layout_bar_for_zoom(&range, 20.0, 8.0, ZoomLevel::Quarter).unwrap();
        assert_eq!(bar.left_offset, 180.0);
        assert_eq!(bar.width, 112.0);
    }

    #[test]
    fn invalid_column_width() {
        let range = ranges(0b1)[0];
        assert_eq!(
            layout_bar(&range, 0.0),
            Err(LayoutError::InvalidColumnWidth(0.0))
        );
        assert!(layout_bar(&range, f64::NAN).is_err());
    }

    #[test]
    fn never_past_the_span() {
        let column_width = 37.5;
        for mask in 0..=4095 {
            let mask = MonthMask::try_from(mask).unwrap();
            let span = crate::span(&[crop_calendar_core::Record::new(mask)]);
            for range in mask.decode() {
                let bar = layout_bar(&range, column_width).unwrap();
                assert!(bar.left_offset >= 0.0);
                assert!(bar.width > 0.0);
                assert!(bar.right() <= f64::from(span) * column_width);
            }
        }
    }
}
