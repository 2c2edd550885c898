// SPDX-License-Identifier: MIT

//!
//! The state behind an interactive crop calendar: the records, how they're
//! grouped and laid out, and the month mask currently being edited (if any).
//! Frontends hold one of these and hand it user actions.
//!

use crate::{GanttGrid, LayoutConfig, LayoutError, TimelineLayout};
use crop_calendar_core::{MaskEdit, MonthMask, MonthMaskError, Record};
use log::{debug, info};
use thiserror::Error;

/// Errors that can arise when editing a record's month mask
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("There is no record {0}")]
    NoSuchRecord(usize),

    #[error("No month mask is being edited")]
    NotEditing,

    #[error(transparent)]
    MonthMask(#[from] MonthMaskError),
}

/// An interactive crop calendar
#[derive(Debug, Clone, Default)]
pub struct CalendarEditor {
    records: Vec<Record>,
    grouping_fields: Vec<String>,
    layout: TimelineLayout,
    edit: Option<MaskEdit>,
}

impl CalendarEditor {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            layout: TimelineLayout::new(config),
            ..Default::default()
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Replace the records (abandoning any edit in progress)
    pub fn set_records(&mut self, records: Vec<Record>) {
        info!("editor set {} records", records.len());
        self.records = records;
        self.edit = None;
    }

    pub fn grouping_fields(&self) -> &[String] {
        &self.grouping_fields
    }

    pub fn set_grouping_fields(&mut self, grouping_fields: Vec<String>) {
        debug!("editor set grouping fields {grouping_fields:?}");
        self.grouping_fields = grouping_fields;
    }

    pub fn config(&self) -> &LayoutConfig {
        self.layout.config()
    }

    pub fn set_config(&mut self, config: LayoutConfig) {
        self.layout.set_config(config);
    }

    /// Lay out the records.  The record being edited is shown with its edited
    /// mask.
    pub fn grid(&self) -> Result<GanttGrid, LayoutError> {
        match self.edit {
            Some(edit) if edit.is_dirty() => {
                let mut records = self.records.clone();
                if let Some(record) = records.get_mut(edit.record_index()) {
                    *record = record.with_month_mask(edit.current());
                }
                self.layout.build(&records, &self.grouping_fields)
            }
            _ => self.layout.build(&self.records, &self.grouping_fields),
        }
    }

    /// The edit in progress
    pub fn edit(&self) -> Option<MaskEdit> {
        self.edit
    }

    /// Start editing a record's month mask (abandoning any other edit)
    pub fn begin_edit(&mut self, record_index: usize) -> Result<(), EditError> {
        let record = self
            .records
            .get(record_index)
            .ok_or(EditError::NoSuchRecord(record_index))?;
        self.edit = Some(MaskEdit::begin(record_index, record.month_mask()));
        Ok(())
    }

    /// Toggle a month of the mask being edited.  The edit is unchanged on
    /// error.
    pub fn toggle_month(&mut self, month_index: i64) -> Result<MonthMask, EditError> {
        let edit = self.edit.ok_or(EditError::NotEditing)?.toggle(month_index)?;
        self.edit = Some(edit);
        Ok(edit.current())
    }

    /// Toggle the month under a point of the grid, if it's in the lane of the
    /// record being edited.  Returns whether a month was toggled.
    pub fn toggle_at(&mut self, grid: &GanttGrid, x: f64, y: f64) -> Result<bool, EditError> {
        let edit = self.edit.ok_or(EditError::NotEditing)?;
        match (grid.record_at(y), grid.month_at(x)) {
            (Some(record_index), Some(month)) if record_index == edit.record_index() => {
                self.toggle_month(i64::from(month.value()))?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Save the edited mask to its record, returning the updated record (for
    /// the caller to persist upstream)
    pub fn commit_edit(&mut self) -> Result<&Record, EditError> {
        let (record_index, mask) = self.edit.take().ok_or(EditError::NotEditing)?.commit();
        let record = self
            .records
            .get_mut(record_index)
            .ok_or(EditError::NoSuchRecord(record_index))?;
        *record = record.with_month_mask(mask);
        info!("committed month mask {mask} for record {record_index}");
        Ok(record)
    }

    /// Abandon the edit in progress, returning the record's unchanged mask
    pub fn cancel_edit(&mut self) -> Option<MonthMask> {
        self.edit.take().map(MaskEdit::cancel)
    }
}
