// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! All GET requests
//!

use crate::SharedConfig;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

mod month_mask;

///
pub fn router() -> Router<SharedConfig> {
    // GET request routes for API v1
    #[rustfmt::skip]
    let apiv1 = Router::new()
        .route("/health",                           get(handle_get_health))
        .route("/month-mask/{mask}",                get(month_mask::handle_get_month_mask))
        .route("/month-mask/{mask}/toggle/{month}", get(month_mask::handle_get_month_mask_toggle));

    apiv1
}

/// Handle a request to check the API is up
pub async fn handle_get_health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}
