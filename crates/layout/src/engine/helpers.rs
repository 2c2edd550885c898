// SPDX-License-Identifier: MIT

//!
//! Helper functions
//!

/// Round an f64 value to the nearest 0.1, so geometry handed to frontends
/// doesn't carry float noise (e.g. `0.1 * 3.0`)
pub(crate) fn round_f64_to_nearest_0_1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// The grid column holding a month column when each grid column covers
/// `months_per_column` months
pub(crate) fn month_to_cell(month_column: u8, months_per_column: u8) -> u8 {
    month_column / months_per_column.max(1)
}
