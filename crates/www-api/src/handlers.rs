// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! All handlers
//!

use crate::SharedConfig;
use axum::Router;

pub mod get;
pub mod non_get;

/// All routes for API v1
pub fn router() -> Router<SharedConfig> {
    // GET request routes for API v1
    let router = get::router();

    // Non-GET request routes for API v1
    router.merge(non_get::router())
}
