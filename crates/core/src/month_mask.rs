// SPDX-License-Identifier: MIT

//!
//! The month mask type, and the algorithm that decodes it into month ranges
//!

use crate::{MONTHS_PER_YEAR, MonthIndex, MonthRange};
use log::trace;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// The largest valid mask (all twelve months active)
pub const MAX_MONTH_MASK: i64 = 0b1111_1111_1111;

/// The first month index considered to be in the back half of the year.  Only
/// a range starting at or after this month can continue into January.
pub const BACK_HALF_START: u8 = 6;

/// Errors that can arise in relation to a [`MonthMask`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonthMaskError {
    /// The mask is negative, not an integer, or doesn't fit in 12 bits
    #[error("Month mask `{0}` is not an integer between 0 and 4095")]
    InvalidMask(String),

    /// The month index is not allowed (must be 0 <= month <= 11)
    #[error("Month index `{0}` is not allowed (must be between 0 and 11)")]
    OutOfRange(i64),
}

/// The set of months in which something is active, stored as 12 bits.  Bit
/// `i` is set when month `i` is active (bit 0 is January).
///
/// Any 12-bit value is valid, including zero (no active months).
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Default, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct MonthMask(u16);

impl MonthMask {
    /// No active months
    pub fn empty() -> Self {
        MonthMask(0)
    }

    /// All twelve months active
    pub fn all() -> Self {
        MonthMask(MAX_MONTH_MASK as u16)
    }

    /// Encode a set of months as a mask
    pub fn from_months<I: IntoIterator<Item = MonthIndex>>(months: I) -> Self {
        months
            .into_iter()
            .fold(MonthMask(0), |mask, month| MonthMask(mask.0 | (1 << month.value())))
    }

    /// Validate a mask held in a JSON value (must be an integer 0 to 4095)
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, MonthMaskError> {
        match value.as_i64() {
            Some(mask) => MonthMask::try_from(mask),
            None => Err(MonthMaskError::InvalidMask(value.to_string())),
        }
    }

    /// Get the underlying 12-bit value
    pub fn value(&self) -> u16 {
        self.0
    }

    /// Whether the month is active
    pub fn contains(&self, month: MonthIndex) -> bool {
        self.bit(month.value())
    }

    /// Whether no months are active
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The number of active months
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// All active months in calendar order
    pub fn months(&self) -> Vec<MonthIndex> {
        MonthIndex::all().filter(|month| self.contains(*month)).collect()
    }

    /// Flip a single month
    pub fn toggle(self, month: MonthIndex) -> Self {
        MonthMask(self.0 ^ (1 << month.value()))
    }

    /// Flip a single month given as a raw index.  Fails (and nothing changes)
    /// if the index isn't 0 to 11.
    pub fn toggle_index(self, month_index: i64) -> Result<Self, MonthMaskError> {
        let month = MonthIndex::try_from(month_index)?;
        Ok(self.toggle(month))
    }

    /// The mask as 12 binary digits, December first (e.g. `110000000011` for
    /// November to February)
    pub fn as_binary_string(&self) -> String {
        format!("{:012b}", self.0)
    }

    /// Decode the mask into maximal contiguous ranges, in order of their
    /// start month.
    ///
    /// If January is active and the last range runs from the back half of the
    /// year through December, the January run is folded into that range as
    /// its year-wrapping continuation rather than being reported separately.
    pub fn decode(&self) -> Vec<MonthRange> {
        let mut ranges = Vec::new();
        let mut range_start: Option<u8> = None;

        for bit in 0..MONTHS_PER_YEAR {
            match (self.bit(bit), range_start) {
                (true, None) => range_start = Some(bit),
                (false, Some(start)) => {
                    ranges.push(MonthRange::new(
                        MonthIndex::from_bit(start),
                        MonthIndex::from_bit(bit - 1),
                    ));
                    range_start = None;
                }
                _ => (),
            }
        }

        // Still in a range at the end of the year
        if let Some(start) = range_start {
            ranges.push(MonthRange::new(
                MonthIndex::from_bit(start),
                MonthIndex::DECEMBER,
            ));
        }

        // Year wrap
        let wraps_into_january = self.bit(0)
            && ranges.last().is_some_and(|range| {
                range.start().value() >= BACK_HALF_START && range.end() == MonthIndex::DECEMBER
            });
        if wraps_into_january {
            let january_run = ranges.remove(0);
            if let Some(last) = ranges.last_mut() {
                *last = MonthRange::wrapping(last.start(), last.end(), january_run.end());
            }
        }

        trace!("decoded mask {} into {} range(s)", self.as_binary_string(), ranges.len());
        ranges
    }

    fn bit(&self, bit: u8) -> bool {
        (self.0 >> bit) & 1 == 1
    }
}

impl TryFrom<i64> for MonthMask {
    type Error = MonthMaskError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..=MAX_MONTH_MASK).contains(&value) {
            Ok(MonthMask(value as u16))
        } else {
            Err(MonthMaskError::InvalidMask(value.to_string()))
        }
    }
}

impl<'de> Deserialize<'de> for MonthMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        MonthMask::try_from(value).map_err(serde::de::Error::custom)
    }
}

/// Decode a raw mask, rejecting anything that isn't a 12-bit value
pub fn decode(mask: i64) -> Result<Vec<MonthRange>, MonthMaskError> {
    Ok(MonthMask::try_from(mask)?.decode())
}

/// Flip a single month of a mask
pub fn toggle(mask: MonthMask, month_index: i64) -> Result<MonthMask, MonthMaskError> {
    mask.toggle_index(month_index)
}
