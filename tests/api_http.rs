// tests/api_http.rs
//
// HTTP-level tests for the public API Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value as Json};
use tower::ServiceExt as _; // for `oneshot`

use lead_stream::{router, AppState, StreamConfig};

const BODY_LIMIT: usize = 1024 * 1024; // 1MB, safe for tests

/// Seeded state, no scheduler: ingestion only through /ingest/tick.
fn test_router() -> Router {
    let cfg = StreamConfig {
        seed: Some(1234),
        ..StreamConfig::default()
    };
    router(AppState::from_config(&cfg))
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app.clone().oneshot(req).await.expect("oneshot");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    (status, bytes)
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Json) {
    let req = Request::get(uri).body(Body::empty()).expect("build GET");
    let (status, bytes) = send(app, req).await;
    let v = serde_json::from_slice(&bytes).unwrap_or(Json::Null);
    (status, v)
}

#[tokio::test]
async fn health_returns_ok() {
    let app = test_router();
    let req = Request::get("/health").body(Body::empty()).unwrap();
    let (status, bytes) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(bytes).unwrap(), "ok");
}

#[tokio::test]
async fn leads_default_to_high_priority_tab() {
    let app = test_router();
    let (status, v) = get_json(&app, "/leads").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["total_count"], 5);
    assert_eq!(v["total_pages"], 1);
    assert_eq!(v["page"], 1);
    assert_eq!(v["page_size"], 10);
    for item in v["items"].as_array().unwrap() {
        assert_eq!(item["priority_class"], "hot");
    }
}

#[tokio::test]
async fn leads_search_and_paging_params() {
    let app = test_router();

    let (_, v) = get_json(&app, "/leads?tab=all-leads&q=acme").await;
    assert_eq!(v["total_count"], 1);
    assert_eq!(v["items"][0]["company"], "Acme Corp");
    assert_eq!(v["items"][0]["status"]["type"], "viewed_demo");

    let (_, v) = get_json(&app, "/leads?tab=all-leads&page=2&page_size=4").await;
    assert_eq!(v["total_count"], 9);
    assert_eq!(v["total_pages"], 3);
    assert_eq!(v["items"].as_array().unwrap().len(), 4);
    assert_eq!(v["items"][0]["id"], "5");
}

#[tokio::test]
async fn invalid_query_params_are_400() {
    let app = test_router();

    let (status, v) = get_json(&app, "/leads?page=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(v["error"].as_str().unwrap().contains("page"));

    let (status, _) = get_json(&app, "/leads?page_size=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, v) = get_json(&app, "/leads?tab=hot").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(v["error"].as_str().unwrap().contains("unknown tab"));
}

#[tokio::test]
async fn malformed_query_values_get_a_json_error() {
    let app = test_router();

    let (status, v) = get_json(&app, "/leads?page=-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(v["error"].as_str().unwrap().contains("query string"));

    let (status, v) = get_json(&app, "/leads?page_size=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(v["error"].is_string());
}

#[tokio::test]
async fn malformed_selection_body_gets_a_json_error() {
    let app = test_router();

    let req = Request::put("/selection")
        .header("content-type", "application/json")
        .body(Body::from("not json"))
        .unwrap();
    let (status, bytes) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let v: Json = serde_json::from_slice(&bytes).unwrap();
    assert!(v["error"].is_string());

    let (_, v) = get_json(&app, "/selection").await;
    assert_eq!(v, Json::Null);
}

#[tokio::test]
async fn lead_lookup_and_404() {
    let app = test_router();
    let (status, v) = get_json(&app, "/leads/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["name"], "Francois Mehmud");
    assert_eq!(v["status"], json!({ "type": "downloaded_whitepaper" }));

    let (status, _) = get_json(&app, "/leads/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn summary_reflects_seed() {
    let app = test_router();
    let (status, v) = get_json(&app, "/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["total_value"], 86_000);
    assert_eq!(v["hot_count"], 5);
    assert_eq!(v["closed_count"], 0);
    assert_eq!(v["target_value"], 812_500);
}

#[tokio::test]
async fn manual_tick_prepends_a_lead() {
    let app = test_router();
    let req = Request::post("/ingest/tick").body(Body::empty()).unwrap();
    let (status, bytes) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    let tick: Json = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(tick["len"], 10);

    let (_, v) = get_json(&app, "/leads?tab=all-leads&page_size=50").await;
    assert_eq!(v["total_count"], 10);
    assert_eq!(v["items"][0]["id"], tick["id"]);
}

#[tokio::test]
async fn selection_put_get_delete() {
    let app = test_router();

    let (_, v) = get_json(&app, "/selection").await;
    assert_eq!(v, Json::Null);

    let req = Request::put("/selection")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "id": "7" }).to_string()))
        .unwrap();
    let (status, bytes) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    let picked: Json = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(picked["name"], "Victor Heid");

    let (_, v) = get_json(&app, "/selection").await;
    assert_eq!(v["id"], "7");

    let req = Request::put("/selection")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "id": "nope" }).to_string()))
        .unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let req = Request::delete("/selection").body(Body::empty()).unwrap();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, v) = get_json(&app, "/selection").await;
    assert_eq!(v, Json::Null);
}
