// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for turning season text into a month mask
//!

use crate::helpers::{ApiJson, MonthMaskSummary};
use axum::Json;
use crop_calendar_core::parse_season;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SeasonRequest {
    pub text: String,
}

/// Handle a request to parse season text (e.g. `Nov - Feb`)
pub async fn handle_post_season(
    ApiJson(payload): ApiJson<SeasonRequest>,
) -> Json<MonthMaskSummary> {
    Json(parse_season(&payload.text).into())
}
