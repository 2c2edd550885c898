// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Generic helpers
//!

use crate::{ApiError, SharedConfig};
use axum::extract::{FromRequest, FromRequestParts};
use crop_calendar_core::{MonthIndex, MonthMask};
use crop_calendar_layout::LayoutConfig;
use serde::Serialize;

/// A JSON body.  Bodies that can't be read are rejected with an [`ApiError`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Path parameters.  Parameters that can't be read are rejected with an
/// [`ApiError`]
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

#[derive(Serialize)]
pub struct ErrorMsg {
    pub error_msg: String,
}

/// A month mask in the forms clients tend to want
#[derive(Debug, Serialize)]
pub struct MonthMaskSummary {
    pub mask: MonthMask,
    pub binary: String,
    pub months: Vec<MonthIndex>,
}

impl From<MonthMask> for MonthMaskSummary {
    fn from(mask: MonthMask) -> Self {
        MonthMaskSummary {
            mask,
            binary: mask.as_binary_string(),
            months: mask.months(),
        }
    }
}

/// The config sent with a request (checked), otherwise the server's config
pub fn config_or_default(
    config: Option<LayoutConfig>,
    default: &SharedConfig,
) -> Result<LayoutConfig, ApiError> {
    match config {
        Some(config) => {
            config.validate()?;
            Ok(config)
        }
        None => Ok(LayoutConfig::clone(default)),
    }
}
