// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for laying out records
//!

use crate::{ApiError, SharedConfig, helpers::*};
use axum::Json;
use axum::extract::State;
use crop_calendar_core::Record;
use crop_calendar_layout::{
    GanttGrid, GroupOrder, LayoutConfig, TimelineLayout, TimelineSpan, ValueCount,
    filter_records, sort_groups, span_within, unique_values,
};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct TimelineRequest {
    pub records: Vec<Record>,
    pub grouping_fields: Vec<String>,
    #[serde(default)]
    pub config: Option<LayoutConfig>,
}

#[derive(Debug, Deserialize)]
pub struct SpanRequest {
    pub records: Vec<Record>,
}

#[derive(Debug, Serialize)]
pub struct SpanResponse {
    pub span: TimelineSpan,
}

#[derive(Debug, Deserialize)]
pub struct SortGroupsRequest {
    pub keys: Vec<String>,
    #[serde(default)]
    pub order: GroupOrder,
    #[serde(default)]
    pub grouping_fields: Vec<String>,
    #[serde(default)]
    pub process_field: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FilterRequest {
    pub records: Vec<Record>,
    pub field: String,
    pub values: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ValuesRequest {
    pub records: Vec<Record>,
    pub field: String,
}

/// Handle a request to lay out records as a Gantt grid
pub async fn handle_post_timeline(
    State(config): State<SharedConfig>,
    ApiJson(payload): ApiJson<TimelineRequest>,
) -> Result<Json<GanttGrid>, ApiError> {
    let config = config_or_default(payload.config, &config)?;
    let grid = TimelineLayout::new(config).build(&payload.records, &payload.grouping_fields)?;
    debug!("laid out {} rows", grid.rows.len());
    Ok(Json(grid))
}

/// Handle a request for the number of month columns records need
pub async fn handle_post_span(
    State(config): State<SharedConfig>,
    ApiJson(payload): ApiJson<SpanRequest>,
) -> Json<SpanResponse> {
    Json(SpanResponse {
        span: span_within(&payload.records, config.min_span, config.max_span),
    })
}

/// Handle a request to order group keys
pub async fn handle_post_sort_groups(
    ApiJson(payload): ApiJson<SortGroupsRequest>,
) -> Json<Vec<String>> {
    Json(sort_groups(
        &payload.keys,
        payload.order,
        &payload.grouping_fields,
        payload.process_field.as_deref(),
    ))
}

/// Handle a request to keep the records with particular field values
pub async fn handle_post_filter(
    ApiJson(payload): ApiJson<FilterRequest>,
) -> Json<Vec<Record>> {
    let kept = filter_records(&payload.records, &payload.field, &payload.values)
        .into_iter()
        .cloned()
        .collect();
    Json(kept)
}

/// Handle a request for the values a field takes (with counts)
pub async fn handle_post_values(
    ApiJson(payload): ApiJson<ValuesRequest>,
) -> Json<Vec<ValueCount>> {
    Json(unique_values(&payload.records, &payload.field))
}
