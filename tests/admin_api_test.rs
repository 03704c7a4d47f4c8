use std::env;
use std::sync::Once;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;
use trevnoctilla_backend::{routes, AppState};

static INIT: Once = Once::new();

fn setup_app() -> Router {
    INIT.call_once(|| {
        env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
        env::set_var("BASE_URL", "https://www.trevnoctilla.com");
        env::set_var("PAYFAST_MERCHANT_ID", "10000100");
        env::set_var("PAYFAST_MERCHANT_KEY", "46f0cd694581a");
        env::set_var("PUBLIC_RPS", "1000");
        env::set_var("ADMIN_RPS", "1000");
        trevnoctilla_backend::config::init_config().expect("init config");
    });

    let state = AppState::new();
    Router::new()
        .route(
            "/api/admin/ad-service/status",
            get(routes::admin::ad_service_status),
        )
        .route(
            "/api/admin/ad-service/start",
            post(routes::admin::start_ad_service),
        )
        .route(
            "/api/admin/ad-service/stop",
            post(routes::admin::stop_ad_service),
        )
        .route(
            "/api/admin/ad-service/reset",
            post(routes::admin::reset_ad_service),
        )
        .route("/api/admin/backup/status", get(routes::admin::backup_status))
        .route("/api/admin/backup/run", post(routes::admin::run_backup))
        .with_state(state)
}

async fn json_body(body: Body) -> JsonValue {
    let bytes = to_bytes(body, usize::MAX).await.expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn ad_service_status_reports_idle_defaults() {
    let app = setup_app();
    let req = Request::builder()
        .uri("/api/admin/ad-service/status")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let payload = json_body(resp.into_body()).await;
    assert_eq!(payload["status"]["is_running"].as_bool(), Some(false));
    assert_eq!(payload["status"]["total_views"].as_u64(), Some(0));
    assert_eq!(payload["status"]["target_daily_views"].as_u64(), Some(12));
    assert!(payload["status"]["last_view_time"].is_null());
    assert_eq!(
        payload["status"]["recent_history"].as_array().map(Vec::len),
        Some(0)
    );
}

#[tokio::test]
async fn ad_service_actions_acknowledge() {
    let app = setup_app();
    for (path, message) in [
        ("/api/admin/ad-service/start", "Ad service started successfully"),
        ("/api/admin/ad-service/stop", "Ad service stopped successfully"),
        ("/api/admin/ad-service/reset", "Ad statistics reset successfully"),
        ("/api/admin/backup/run", "Backup started successfully"),
    ] {
        let req = Request::builder()
            .method("POST")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "unexpected status for {path}");
        let payload = json_body(resp.into_body()).await;
        assert_eq!(payload["success"].as_bool(), Some(true));
        assert_eq!(payload["message"].as_str(), Some(message));
    }
}

#[tokio::test]
async fn backup_status_reports_empty_directory() {
    let app = setup_app();
    let req = Request::builder()
        .uri("/api/admin/backup/status")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let payload = json_body(resp.into_body()).await;
    assert_eq!(payload["total_backups"].as_u64(), Some(0));
    assert_eq!(payload["backup_directory"].as_str(), Some("/backups"));
    assert_eq!(payload["backup_files"].as_array().map(Vec::len), Some(0));
}
