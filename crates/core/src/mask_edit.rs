// SPDX-License-Identifier: MIT

//!
//! The state of an interactive month mask edit
//!

use crate::{MonthMask, MonthMaskError};
use log::debug;
use serde::{Deserialize, Serialize};

/// An in-progress edit of one record's month mask.  Every change returns a
/// new state, the record itself is only updated once the edit is committed
/// (by whoever persists it).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskEdit {
    /// The index of the record being edited
    record_index: usize,

    /// The mask before editing began
    original: MonthMask,

    /// The mask with all edits so far applied
    current: MonthMask,
}

impl MaskEdit {
    /// Begin editing the mask of the record at `record_index`
    pub fn begin(record_index: usize, mask: MonthMask) -> Self {
        MaskEdit {
            record_index,
            original: mask,
            current: mask,
        }
    }

    /// Flip a month.  If the month index isn't valid the edit is left as it
    /// was.
    pub fn toggle(self, month_index: i64) -> Result<Self, MonthMaskError> {
        let current = self.current.toggle_index(month_index)?;
        debug!(
            "record {} mask edited {} -> {}",
            self.record_index,
            self.current.as_binary_string(),
            current.as_binary_string()
        );
        Ok(MaskEdit { current, ..self })
    }

    /// The index of the record being edited
    pub fn record_index(&self) -> usize {
        self.record_index
    }

    /// The mask before editing began
    pub fn original(&self) -> MonthMask {
        self.original
    }

    /// The mask with all edits so far applied
    pub fn current(&self) -> MonthMask {
        self.current
    }

    /// Whether the mask differs from the original
    pub fn is_dirty(&self) -> bool {
        self.current != self.original
    }

    /// Finish editing, giving back the record index and its new mask
    pub fn commit(self) -> (usize, MonthMask) {
        (self.record_index, self.current)
    }

    /// Abandon editing, giving back the original mask
    pub fn cancel(self) -> MonthMask {
        self.original
    }
}
