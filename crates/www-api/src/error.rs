// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! API error response
//!

use crate::helpers::ErrorMsg;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crop_calendar_core::{MonthMaskError, RecordError};
use crop_calendar_layout::{ConfigError, LayoutError};
use log::debug;

/// Container for API errors.  Can be sent back to the client
pub struct ApiError(pub (StatusCode, Json<ErrorMsg>));

impl ApiError {
    /// The request can't be carried out as asked
    pub fn bad_request<E: ToString>(error: E) -> Self {
        let error_msg = error.to_string();
        debug!("bad request: {error_msg}");
        ApiError((StatusCode::BAD_REQUEST, Json(ErrorMsg { error_msg })))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::bad_request(rejection.body_text())
    }
}

impl From<MonthMaskError> for ApiError {
    fn from(value: MonthMaskError) -> Self {
        ApiError::bad_request(value)
    }
}

impl From<RecordError> for ApiError {
    fn from(value: RecordError) -> Self {
        ApiError::bad_request(value)
    }
}

impl From<LayoutError> for ApiError {
    fn from(value: LayoutError) -> Self {
        ApiError::bad_request(value)
    }
}

impl From<ConfigError> for ApiError {
    fn from(value: ConfigError) -> Self {
        ApiError::bad_request(value)
    }
}
