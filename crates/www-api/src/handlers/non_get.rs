// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! All requests that aren't GET requests
//!

pub mod export;
pub mod season;
pub mod timeline;

use crate::SharedConfig;
use axum::{Router, routing::post};
pub use export::*;
pub use season::*;
pub use timeline::*;

///
pub fn router() -> Router<SharedConfig> {
    // Non-GET request routes for API v1
    #[rustfmt::skip]
    let apiv1 = Router::new()
        .route("/season",       post(handle_post_season))
        .route("/timeline",     post(handle_post_timeline))
        .route("/span",         post(handle_post_span))
        .route("/groups/sort",  post(handle_post_sort_groups))
        .route("/filter",       post(handle_post_filter))
        .route("/values",       post(handle_post_values))
        .route("/export/json",  post(handle_post_export_json))
        .route("/export/table", post(handle_post_export_table));

    apiv1
}
