// SPDX-License-Identifier: MIT

//!
//! The WASM frontend.  Drawing is left to JavaScript; this hands it the laid
//! out grid and takes user actions (e.g. toggling a month) back.
//!
//! ```sh
//! wasm-pack build --target web
//! ```
//!

use crate::{
    CalendarEditor, ExportTable, JsonExport, LayoutConfig, export_file_name, filter_records,
    unique_values,
};
use chrono::Local;
use crop_calendar_core::{MonthMask, Record, decode, groupable_fields};
use log::{debug, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

/// The prefix of export file names
const EXPORT_FILE_PREFIX: &str = "crop-calendar";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    console_log::init_with_level(log::Level::Debug).map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::info!("Start crop calendar layout");
    Ok(())
}

/// Decode a month mask into its month ranges
#[wasm_bindgen]
pub fn decode_month_mask(mask: i32) -> Result<JsValue, JsValue> {
    to_js(&decode(i64::from(mask)).map_err(js_error)?)
}

/// Flip a single month of a month mask
#[wasm_bindgen]
pub fn toggle_month_mask(mask: i32, month_index: i32) -> Result<u16, JsValue> {
    MonthMask::try_from(i64::from(mask))
        .and_then(|mask| mask.toggle_index(i64::from(month_index)))
        .map(|mask| mask.value())
        .map_err(js_error)
}

/// Convert to a plain JS value (objects rather than `Map`s)
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    Ok(serde_wasm_bindgen::from_value(value)?)
}

fn js_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// The crop calendar for use on the web
#[wasm_bindgen]
pub struct CropCalendarLayoutWasm {
    editor: CalendarEditor,
}

impl Default for CropCalendarLayoutWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl CropCalendarLayoutWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        info!("Constructing a new crop calendar layout");
        Self {
            editor: CalendarEditor::new(LayoutConfig::default()),
        }
    }

    //--------------------------------------------------------------------------
    // Setup
    //--------------------------------------------------------------------------

    #[wasm_bindgen]
    pub fn set_records(&mut self, records: JsValue) -> Result<(), JsValue> {
        let records: Vec<Record> = from_js(records)?;
        self.editor.set_records(records);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn records(&self) -> Result<JsValue, JsValue> {
        to_js(&self.editor.records())
    }

    #[wasm_bindgen]
    pub fn set_grouping_fields(&mut self, grouping_fields: JsValue) -> Result<(), JsValue> {
        self.editor.set_grouping_fields(from_js(grouping_fields)?);
        Ok(())
    }

    /// Set the config (any missing values are defaulted)
    #[wasm_bindgen]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config: LayoutConfig = from_js(config)?;
        config.validate().map_err(js_error)?;
        self.editor.set_config(config);
        Ok(())
    }

    /// The fields that the records can be grouped by
    #[wasm_bindgen]
    pub fn groupable_fields(&self) -> Result<JsValue, JsValue> {
        to_js(&groupable_fields(self.editor.records()))
    }

    //--------------------------------------------------------------------------
    // Layout
    //--------------------------------------------------------------------------

    /// Everything needed to draw the grid
    #[wasm_bindgen]
    pub fn grid(&self) -> Result<JsValue, JsValue> {
        let grid = self.editor.grid().map_err(js_error)?;
        debug!("grid has {} rows", grid.rows.len());
        to_js(&grid)
    }

    #[wasm_bindgen]
    pub fn unique_values(&self, field: &str) -> Result<JsValue, JsValue> {
        to_js(&unique_values(self.editor.records(), field))
    }

    /// The records whose `field` value is one of `values`
    #[wasm_bindgen]
    pub fn filter_records(&self, field: &str, values: JsValue) -> Result<JsValue, JsValue> {
        let values: Vec<String> = from_js(values)?;
        to_js(&filter_records(self.editor.records(), field, &values))
    }

    //--------------------------------------------------------------------------
    // Editing
    //--------------------------------------------------------------------------

    #[wasm_bindgen]
    pub fn begin_edit(&mut self, record_index: usize) -> Result<(), JsValue> {
        self.editor.begin_edit(record_index).map_err(js_error)
    }

    /// Toggle a month of the mask being edited, returning the new mask
    #[wasm_bindgen]
    pub fn toggle_month(&mut self, month_index: i32) -> Result<u16, JsValue> {
        self.editor
            .toggle_month(i64::from(month_index))
            .map(|mask| mask.value())
            .map_err(js_error)
    }

    /// Toggle the month clicked on (if it's in the lane being edited)
    #[wasm_bindgen]
    pub fn toggle_at(&mut self, x: f64, y: f64) -> Result<bool, JsValue> {
        let grid = self.editor.grid().map_err(js_error)?;
        self.editor.toggle_at(&grid, x, y).map_err(js_error)
    }

    /// Save the edit, returning the updated record for persisting upstream
    #[wasm_bindgen]
    pub fn commit_edit(&mut self) -> Result<JsValue, JsValue> {
        let record = self.editor.commit_edit().map_err(js_error)?;
        to_js(record)
    }

    /// Abandon the edit, returning the unchanged mask (if there was an edit)
    #[wasm_bindgen]
    pub fn cancel_edit(&mut self) -> Option<u16> {
        self.editor.cancel_edit().map(|mask| mask.value())
    }

    //--------------------------------------------------------------------------
    // Export
    //--------------------------------------------------------------------------

    #[wasm_bindgen]
    pub fn export_json(&self) -> Result<JsValue, JsValue> {
        to_js(&JsonExport::new(
            self.editor.records(),
            self.editor.grouping_fields(),
        ))
    }

    /// A table of the records with the given columns (or the default columns)
    #[wasm_bindgen]
    pub fn export_table(&self, columns: JsValue) -> Result<JsValue, JsValue> {
        let columns: Option<Vec<String>> = from_js(columns)?;
        to_js(&ExportTable::new(
            self.editor.records(),
            self.editor.grouping_fields(),
            columns.as_deref(),
        ))
    }

    /// e.g. `crop-calendar-2025-03-01.xlsx`
    #[wasm_bindgen]
    pub fn export_file_name(&self, extension: &str) -> String {
        export_file_name(EXPORT_FILE_PREFIX, extension, Local::now().date_naive())
    }
}
