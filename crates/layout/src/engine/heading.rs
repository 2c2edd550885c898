// SPDX-License-Identifier: MIT

//!
//! Column headings
//!

use crate::PositionAndSize;
use serde::Serialize;
use std::fmt::Debug;

/// Information needed to draw a column heading
#[derive(Debug, Clone, Serialize)]
pub struct ColumnHeading {
    /// The grid column (0 is the first)
    pub column: u8,

    /// e.g. `Jan` or `Q1`
    pub text: String,

    /// 0 for the first year, 1 for the following year
    pub year_offset: u8,

    pub position_and_size: PositionAndSize,
}

impl ColumnHeading {
    /// Clone the heading and add an offset.  Used when placing the grid to
    /// the right of the group labels
    pub fn add_offset(&self, x_offset: f64) -> Self {
        let mut heading_with_offset = self.clone();
        heading_with_offset
            .position_and_size
            .add_offset(x_offset, 0.0);
        heading_with_offset
    }
}
