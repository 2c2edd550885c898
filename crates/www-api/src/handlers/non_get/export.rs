// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for export data
//!

use crate::helpers::ApiJson;
use axum::Json;
use crop_calendar_core::Record;
use crop_calendar_layout::{ExportTable, JsonExport};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub records: Vec<Record>,
    #[serde(default)]
    pub grouping_fields: Vec<String>,
    #[serde(default)]
    pub columns: Option<Vec<String>>,
}

/// Handle a request for a JSON export of records
pub async fn handle_post_export_json(
    ApiJson(payload): ApiJson<ExportRequest>,
) -> Json<JsonExport> {
    Json(JsonExport::new(&payload.records, &payload.grouping_fields))
}

/// Handle a request for a table of records
pub async fn handle_post_export_table(
    ApiJson(payload): ApiJson<ExportRequest>,
) -> Json<ExportTable> {
    Json(ExportTable::new(
        &payload.records,
        &payload.grouping_fields,
        payload.columns.as_deref(),
    ))
}
