use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AdServiceStatus {
    pub is_running: bool,
    pub total_views: u64,
    pub today_views: u64,
    pub target_daily_views: u64,
    pub last_view_time: Option<String>,
    pub recent_history: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BackupStatus {
    pub total_backups: u64,
    pub backup_directory: String,
    pub backup_files: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

impl ActionResponse {
    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}
