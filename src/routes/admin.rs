use axum::response::Json;
use serde_json::json;

use crate::dto::admin_dto::{ActionResponse, AdServiceStatus, BackupStatus};

// The ad-service and backup surfaces are stubs: the admin dashboard expects
// these shapes, but nothing real sits behind them yet.

pub async fn ad_service_status() -> Json<serde_json::Value> {
    let status = AdServiceStatus {
        is_running: false,
        total_views: 0,
        today_views: 0,
        target_daily_views: 12,
        last_view_time: None,
        recent_history: vec![],
    };
    Json(json!({ "status": status }))
}

pub async fn start_ad_service() -> Json<ActionResponse> {
    Json(ActionResponse::ok("Ad service started successfully"))
}

pub async fn stop_ad_service() -> Json<ActionResponse> {
    Json(ActionResponse::ok("Ad service stopped successfully"))
}

pub async fn reset_ad_service() -> Json<ActionResponse> {
    Json(ActionResponse::ok("Ad statistics reset successfully"))
}

pub async fn backup_status() -> Json<BackupStatus> {
    Json(BackupStatus {
        total_backups: 0,
        backup_directory: "/backups".to_string(),
        backup_files: vec![],
    })
}

pub async fn run_backup() -> Json<ActionResponse> {
    Json(ActionResponse::ok("Backup started successfully"))
}
