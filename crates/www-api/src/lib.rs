// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider crop calendar project*
//!
//! This crate provides the web API, which may also be run locally.  It exposes
//! the month mask operations (decode, toggle, parsing season text) and the
//! timeline layout (grouping, ordering, spans, bar geometry, filtering and
//! export data) over JSON, so that any frontend can draw a crop calendar
//! without reimplementing them.
//!

mod error;
mod handlers;
mod helpers;

use error::*;

use axum::Router;
use crop_calendar_layout::LayoutConfig;
use log::info;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// The state shared by all handlers
pub type SharedConfig = Arc<LayoutConfig>;

/// Set up the API.  `config` is the layout config used when a request doesn't
/// bring its own.
pub fn prepare_api_router(config: LayoutConfig) -> Router {
    info!("Preparing API router");

    // Get the router
    let apiv1 = handlers::router();

    // Add the state
    let apiv1 = apiv1.with_state(Arc::new(config));

    // Add URL path prefix
    Router::new()
        .nest("/api/v1", apiv1)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = prepare_api_router(LayoutConfig::default())
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
        send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    fn records() -> Value {
        json!([
            {"country": "Sudan", "process": "Harvesting", "month_mask": 3075},
            {"country": "Sudan", "process": "Planting", "month_mask": 112, "period": "May - Jul"},
            {"country": "Chad", "process": "Growing", "month_mask": 448}
        ])
    }

    #[tokio::test]
    async fn health() {
        let (status, body) = get("/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn decode() {
        let (status, body) = get("/api/v1/month-mask/3075").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mask"], 3075);
        assert_eq!(body["binary"], "110000000011");
        assert_eq!(body["months"], json!([0, 1, 10, 11]));
        assert_eq!(
            body["ranges"],
            json!([{"start": 10, "end": 11, "wraps_year": true, "wrapped_end": 1}])
        );

        let (status, body) = get("/api/v1/month-mask/4096").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error_msg"].as_str().unwrap().contains("4096"));

        let (status, _) = get("/api/v1/month-mask/-1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn toggle() {
        let (status, body) = get("/api/v1/month-mask/1/toggle/11").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"mask": 2049, "binary": "100000000001"}));

        let (status, body) = get("/api/v1/month-mask/1/toggle/12").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error_msg"].is_string());
    }

    #[tokio::test]
    async fn season() {
        let (status, body) = post("/api/v1/season", json!({"text": "November to February"})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mask"], 3075);
        assert_eq!(body["months"], json!([0, 1, 10, 11]));
    }

    #[tokio::test]
    async fn timeline() {
        let (status, body) = post(
            "/api/v1/timeline",
            json!({"records": records(), "grouping_fields": ["country", "process"]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["span"], 14);
        assert_eq!(body["group_count"], 3);
        assert_eq!(body["rows"][0]["key"], "Chad | Growing");

        let (status, body) = post(
            "/api/v1/timeline",
            json!({
                "records": records(),
                "grouping_fields": ["country", "process"],
                "config": {"group_order": "by_process_priority"}
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rows"][0]["key"], "Sudan | Planting");

        let (status, body) = post(
            "/api/v1/timeline",
            json!({"records": records(), "grouping_fields": []}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error_msg"].is_string());

        let (status, _) = post(
            "/api/v1/timeline",
            json!({
                "records": records(),
                "grouping_fields": ["country"],
                "config": {"column_width": 0}
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn span() {
        let (status, body) = post("/api/v1/span", json!({"records": records()})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"span": 14}));

        let (status, body) = post("/api/v1/span", json!({"records": []})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"span": 12}));
    }

    #[tokio::test]
    async fn invalid_record() {
        let (status, body) = post(
            "/api/v1/span",
            json!({"records": [{"country": "Chad", "month_mask": 5000}]}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error_msg"].as_str().unwrap().contains("5000"));

        let (status, body) = post("/api/v1/timeline", json!({"records": records()})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error_msg"].is_string());
    }

    #[tokio::test]
    async fn unreadable_body() {
        let (status, body) = send(
            Request::post("/api/v1/season")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{ not json"))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error_msg"].is_string());
    }

    #[tokio::test]
    async fn non_integer_path() {
        let (status, body) = get("/api/v1/month-mask/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error_msg"].is_string());

        let (status, body) = get("/api/v1/month-mask/1/toggle/1.5").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error_msg"].is_string());
    }

    #[tokio::test]
    async fn sort_groups() {
        let (status, body) = post(
            "/api/v1/groups/sort",
            json!({
                "keys": ["Chad|Growing", "Chad|Harvesting", "Chad|Planting"],
                "order": "by_process_priority",
                "grouping_fields": ["country", "process"],
                "process_field": "process"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!(["Chad|Planting", "Chad|Growing", "Chad|Harvesting"])
        );
    }

    #[tokio::test]
    async fn filter_and_values() {
        let (status, body) = post(
            "/api/v1/filter",
            json!({"records": records(), "field": "country", "values": ["Chad"]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["process"], "Growing");

        let (status, body) = post(
            "/api/v1/values",
            json!({"records": records(), "field": "country"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{"value": "Chad", "count": 1}, {"value": "Sudan", "count": 2}])
        );
    }

    #[tokio::test]
    async fn export() {
        let (status, body) = post(
            "/api/v1/export/json",
            json!({"records": records(), "grouping_fields": ["country"]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["format"], "Crop Calendar Gantt Export");
        assert_eq!(body["totalRecords"], 3);
        assert_eq!(body["records"][0]["month_mask"], "110000000011");

        let (status, body) = post(
            "/api/v1/export/table",
            json!({
                "records": records(),
                "grouping_fields": ["country"],
                "columns": ["country", "month_mask"]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["headers"], json!(["country", "month_mask"]));
        assert_eq!(body["rows"][2], json!(["Chad", "000111000000"]));
    }
}
