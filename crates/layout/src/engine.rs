// SPDX-License-Identifier: MIT

//!
//! The `crop-calendar-layout` engine
//!

mod bar;
mod filter;
mod group;
mod heading;
mod helpers;
mod layout_params;
mod point;
mod sort;
mod span;
mod zoom;

pub(crate) use group::group_indices;
pub(crate) use sort::sort_groups_by_values;
pub(crate) use helpers::*;

pub use bar::*;
pub use filter::*;
pub use group::{
    GROUP_KEY_SEPARATOR, UNKNOWN_FIELD_VALUE, group, group_key, group_key_parts, group_key_values,
};
pub use heading::*;
pub use layout_params::*;
pub use point::*;
pub use sort::*;
pub use span::*;
pub use zoom::*;

use crate::{Colour, LayoutConfig};
use crop_calendar_core::{CalendarRecord, MONTHS_PER_YEAR, MonthIndex, MonthRange, format_range};
use log::debug;
use serde::Serialize;
use thiserror::Error;

/// Errors that can arise when laying out records
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("At least one grouping field is needed")]
    InvalidGrouping,

    #[error("Column width must be a positive number (got {0})")]
    InvalidColumnWidth(f64),

    #[error("Bar gutter must be a positive number (got {0})")]
    InvalidGutter(f64),
}

/// Information needed to draw a single bar (one month range of one record)
#[derive(Debug, Clone, Serialize)]
pub struct GanttBar {
    pub range: MonthRange,

    /// e.g. `Nov - Feb (wraps year)`
    pub label: String,

    /// The record's period, or a date range made from the months
    pub date_text: String,

    pub position_and_size: PositionAndSize,
}

/// One record's lane within a row
#[derive(Debug, Clone, Serialize)]
pub struct GanttLane {
    /// The position of the record in the records that were laid out
    pub record_index: usize,

    /// The top of the lane
    pub y: f64,

    pub height: f64,

    pub bars: Vec<GanttBar>,
}

/// One group's row
#[derive(Debug, Clone, Serialize)]
pub struct GanttRow {
    pub key: String,
    pub key_parts: Vec<String>,
    pub colour: Colour,

    /// Shown when a bar in the row is hovered over
    pub highlight_colour: Colour,

    pub label_box: PositionAndSize,
    pub lanes: Vec<GanttLane>,
}

/// Everything a frontend needs to draw (or export) the Gantt grid
#[derive(Debug, Clone, Serialize)]
pub struct GanttGrid {
    /// The number of month columns
    pub span: TimelineSpan,

    pub zoom: ZoomLevel,

    /// The width of a grid column (several months wide when zoomed out)
    pub cell_width: f64,

    pub label_width: f64,
    pub header_height: f64,
    pub headings: Vec<ColumnHeading>,
    pub rows: Vec<GanttRow>,

    /// The total width/height of the grid including labels and headings
    pub size: Size,

    pub record_count: usize,
    pub group_count: usize,
}

impl GanttGrid {
    /// The record whose lane is at height `y` (if any)
    pub fn record_at(&self, y: f64) -> Option<usize> {
        self.rows
            .iter()
            .flat_map(|row| row.lanes.iter())
            .find(|lane| y >= lane.y && y < lane.y + lane.height)
            .map(|lane| lane.record_index)
    }

    /// The month at `x`.  Only months can be picked out at month zoom.
    pub fn month_at(&self, x: f64) -> Option<MonthIndex> {
        if self.zoom != ZoomLevel::Month || x < self.label_width || x >= self.size.x {
            return None;
        }
        let column = ((x - self.label_width) / self.cell_width).floor() as i64;
        MonthIndex::try_from(column % i64::from(MONTHS_PER_YEAR)).ok()
    }
}

/// The `crop-calendar-layout` engine.  Turns records into a [`GanttGrid`]
/// using a [`LayoutConfig`].
#[derive(Debug, Clone, Default)]
pub struct TimelineLayout {
    config: LayoutConfig,
}

impl TimelineLayout {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LayoutConfig) {
        debug!("layout set config");
        self.config = config;
    }

    /// Lay out the records grouped by the grouping fields
    pub fn build<R: CalendarRecord, S: AsRef<str>>(
        &self,
        records: &[R],
        grouping_fields: &[S],
    ) -> Result<GanttGrid, LayoutError> {
        let config = &self.config;
        if !config.column_width.is_finite() || config.column_width <= 0.0 {
            return Err(LayoutError::InvalidColumnWidth(config.column_width));
        }

        let groups = group_indices(records, grouping_fields)?;

        // Every record in a group has the same grouping field values
        let mut keys: Vec<(String, Vec<String>)> = groups
            .iter()
            .map(|(key, indices)| {
                let values = indices
                    .first()
                    .map(|&index| group_key_values(&records[index], grouping_fields))
                    .unwrap_or_default();
                (key.clone(), values)
            })
            .collect();
        sort_groups_by_values(
            &mut keys,
            config.group_order,
            grouping_fields,
            &config.process_field,
        );

        let span = span_within(records, config.min_span, config.max_span);
        let zoom = config.zoom;
        let cell_width = config.column_width * f64::from(zoom.months_per_column());
        debug!(
            "laying out {} records in {} groups over {span} months",
            records.len(),
            keys.len()
        );

        let headings = (0..zoom.column_count(span))
            .map(|column| {
                ColumnHeading {
                    column,
                    text: zoom.column_label(column),
                    year_offset: zoom.year_offset(column),
                    position_and_size: PositionAndSize::new(
                        f64::from(column) * cell_width,
                        0.0,
                        cell_width,
                        config.header_height,
                    ),
                }
                .add_offset(config.label_width)
            })
            .collect::<Vec<ColumnHeading>>();

        let bar_height = config.bar_height.clamp(0.0, config.row_height);
        let bar_top = (config.row_height - bar_height) / 2.0;

        let mut rows = Vec::with_capacity(keys.len());
        let mut y = config.header_height;
        for (group_number, (key, key_parts)) in keys.into_iter().enumerate() {
            let indices = groups.get(&key).map(Vec::as_slice).unwrap_or_default();
            let row_top = y;

            let mut lanes = Vec::with_capacity(indices.len());
            for &record_index in indices {
                let record = &records[record_index];
                let mut bars = Vec::new();
                for range in record.month_mask().decode() {
                    let geometry =
                        layout_bar_for_zoom(&range, config.column_width, config.bar_gutter, zoom)?;
                    let mut position_and_size =
                        PositionAndSize::from_bar(geometry, y + bar_top, bar_height);
                    position_and_size.add_offset(config.label_width, 0.0);
                    bars.push(GanttBar {
                        range,
                        label: range.label(),
                        date_text: format_range(&range, record, config.day_convention),
                        position_and_size,
                    });
                }
                lanes.push(GanttLane {
                    record_index,
                    y,
                    height: config.row_height,
                    bars,
                });
                y += config.row_height;
            }

            let colour = Colour::for_group(group_number);
            rows.push(GanttRow {
                key,
                key_parts,
                colour,
                highlight_colour: Colour::lightened_colour(colour),
                label_box: PositionAndSize::new(0.0, row_top, config.label_width, y - row_top),
                lanes,
            });
        }

        let grid_width = f64::from(zoom.column_count(span)) * cell_width;
        let size = Point {
            x: config.label_width + grid_width,
            y,
        }
        .max(Point {
            x: config.label_width,
            y: config.header_height,
        });

        Ok(GanttGrid {
            span,
            zoom,
            cell_width,
            label_width: config.label_width,
            header_height: config.header_height,
            headings,
            group_count: rows.len(),
            rows,
            size,
            record_count: records.len(),
        })
    }
}
