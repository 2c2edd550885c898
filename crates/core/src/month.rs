// SPDX-License-Identifier: MIT

//!
//! The month index type
//!

use crate::MonthMaskError;
use serde::{Deserialize, Deserializer, Serialize};

/// The number of months in a calendar year
pub const MONTHS_PER_YEAR: u8 = 12;

/// Three letter month abbreviations, indexed by [`MonthIndex`]
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Full month names, indexed by [`MonthIndex`]
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Days in each month of a non-leap year
const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A month of the year as a 0-based index (0 = January, 11 = December).  This
/// is also the bit position of the month within a [`crate::MonthMask`].
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct MonthIndex(u8);

impl MonthIndex {
    /// January
    pub const JANUARY: MonthIndex = MonthIndex(0);

    /// December
    pub const DECEMBER: MonthIndex = MonthIndex(11);

    /// Get the underlying index (0 to 11)
    pub fn value(&self) -> u8 {
        self.0
    }

    /// e.g. `Jan`
    pub fn abbreviation(&self) -> &'static str {
        MONTH_ABBREVIATIONS[usize::from(self.0)]
    }

    /// e.g. `January`
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[usize::from(self.0)]
    }

    /// The number of days in the month (February always has 28, there is no
    /// year to check for leap years against)
    pub fn days_in_month(&self) -> u8 {
        DAYS_IN_MONTH[usize::from(self.0)]
    }

    /// The quarter the month falls in (0 to 3)
    pub fn quarter(&self) -> u8 {
        self.0 / 3
    }

    /// Iterate over all twelve months in calendar order
    pub fn all() -> impl Iterator<Item = MonthIndex> {
        (0..MONTHS_PER_YEAR).map(MonthIndex)
    }

    /// Only for use where the value is already known to be `0..12`
    pub(crate) fn from_bit(bit: u8) -> Self {
        debug_assert!(bit < MONTHS_PER_YEAR);
        MonthIndex(bit)
    }
}

impl TryFrom<i64> for MonthIndex {
    type Error = MonthMaskError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..i64::from(MONTHS_PER_YEAR)).contains(&value) {
            Ok(MonthIndex(value as u8))
        } else {
            Err(MonthMaskError::OutOfRange(value))
        }
    }
}

impl<'de> Deserialize<'de> for MonthIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        MonthIndex::try_from(value).map_err(serde::de::Error::custom)
    }
}
