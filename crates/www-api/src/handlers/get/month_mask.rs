// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Web API for a single month mask
//!

use crate::ApiError;
use crate::helpers::{ApiPath, MonthMaskSummary};
use axum::Json;
use crop_calendar_core::{MonthMask, MonthRange, toggle};
use serde::Serialize;

/// A month mask and its decoded ranges
#[derive(Debug, Serialize)]
pub struct DecodedMonthMask {
    #[serde(flatten)]
    pub summary: MonthMaskSummary,
    pub ranges: Vec<MonthRange>,
}

/// A toggled month mask
#[derive(Debug, Serialize)]
pub struct ToggledMonthMask {
    pub mask: MonthMask,
    pub binary: String,
}

/// Handle a request to decode a month mask
pub async fn handle_get_month_mask(
    ApiPath(mask): ApiPath<i64>,
) -> Result<Json<DecodedMonthMask>, ApiError> {
    let mask = MonthMask::try_from(mask)?;
    Ok(Json(DecodedMonthMask {
        summary: mask.into(),
        ranges: mask.decode(),
    }))
}

/// Handle a request to toggle one month of a month mask
pub async fn handle_get_month_mask_toggle(
    ApiPath((mask, month)): ApiPath<(i64, i64)>,
) -> Result<Json<ToggledMonthMask>, ApiError> {
    let mask = toggle(MonthMask::try_from(mask)?, month)?;
    Ok(Json(ToggledMonthMask {
        mask,
        binary: mask.as_binary_string(),
    }))
}
