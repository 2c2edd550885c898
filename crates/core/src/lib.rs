// SPDX-License-Identifier: MIT

//!
//! *Part of the wider crop calendar project*
//!
//! This crate defines the basic datatypes used across the crop calendar
//! project (layout engine, web API, CLI).
//!
//! The heart of the crate is the [`MonthMask`]: a 12-bit set of the months in
//! which something happens (e.g. planting or harvesting), along with the
//! algorithm that decodes a mask into contiguous [`MonthRange`]s, including
//! ranges that wrap from December into January.
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid.
//!

mod mask_edit;
mod month;
mod month_mask;
mod month_range;
mod record;
mod season;

pub use mask_edit::*;
pub use month::*;
pub use month_mask::*;
pub use month_range::*;
pub use record::*;
pub use season::*;

/// Mark that a type carries the information needed to place it on a crop
/// calendar: a [`MonthMask`], an optional period label, and named field
/// values that can be used to group records
pub trait CalendarRecord {
    /// Get the record's month mask
    fn month_mask(&self) -> MonthMask;

    /// Get the record's period label, if it has a non-blank one
    fn period(&self) -> Option<&str>;

    /// Get the value of a named field rendered as a string, or `None` if the
    /// field is missing or empty
    fn field(&self, name: &str) -> Option<String>;
}

impl<R: CalendarRecord + ?Sized> CalendarRecord for &R {
    fn month_mask(&self) -> MonthMask {
        (**self).month_mask()
    }

    fn period(&self) -> Option<&str> {
        (**self).period()
    }

    fn field(&self, name: &str) -> Option<String> {
        (**self).field(name)
    }
}
