use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItnStatus {
    Success,
    Failed,
}

/// Outcome of the most recent ITN processing attempt. `data` is whatever the
/// notify handler parsed out of the request; no validation happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItnAttempt {
    pub timestamp: String,
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub data: serde_json::Value,
    pub errors: Vec<String>,
    pub status: ItnStatus,
}

/// Single-slot store for the last ITN attempt, shared across request
/// handlers. Writes replace the slot unconditionally; there is no history.
///
/// Debugging aid only. State lives in process memory and is gone on restart;
/// back it with real storage before relying on it for anything else.
#[derive(Clone)]
pub struct ItnRecorder {
    slot: Arc<Mutex<Option<ItnAttempt>>>,
}

impl ItnRecorder {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Replaces the stored attempt with `attempt`.
    pub fn record(&self, attempt: ItnAttempt) {
        let mut guard = self.slot.lock().expect("itn recorder mutex poisoned");
        *guard = Some(attempt);
    }

    /// Returns the most recent attempt, or `None` if nothing has been
    /// recorded since the process started.
    pub fn current(&self) -> Option<ItnAttempt> {
        let guard = self.slot.lock().expect("itn recorder mutex poisoned");
        guard.clone()
    }

    /// Resets the slot back to empty. The notify flow never calls this; it
    /// exists so tests and operators can drop a stale record.
    pub fn clear(&self) {
        let mut guard = self.slot.lock().expect("itn recorder mutex poisoned");
        *guard = None;
    }
}

impl Default for ItnRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attempt(request_id: &str, status: ItnStatus) -> ItnAttempt {
        ItnAttempt {
            timestamp: "2024-01-01T00:00:00Z".to_string(),
            request_id: request_id.to_string(),
            data: json!({ "amount": 100 }),
            errors: vec![],
            status,
        }
    }

    #[test]
    fn empty_before_first_record() {
        let recorder = ItnRecorder::new();
        assert_eq!(recorder.current(), None);
    }

    #[test]
    fn record_then_current_returns_exact_record() {
        let recorder = ItnRecorder::new();
        let a = attempt("r1", ItnStatus::Success);
        recorder.record(a.clone());
        assert_eq!(recorder.current(), Some(a));
    }

    #[test]
    fn last_write_wins_with_no_history() {
        let recorder = ItnRecorder::new();
        recorder.record(attempt("r1", ItnStatus::Success));

        let b = ItnAttempt {
            timestamp: "2024-01-01T00:05:00Z".to_string(),
            request_id: "r2".to_string(),
            data: json!({}),
            errors: vec!["invalid signature".to_string()],
            status: ItnStatus::Failed,
        };
        recorder.record(b.clone());

        let current = recorder.current().expect("slot should hold r2");
        assert_eq!(current, b);
        assert_eq!(current.request_id, "r2");
    }

    #[test]
    fn current_is_side_effect_free() {
        let recorder = ItnRecorder::new();
        recorder.record(attempt("r1", ItnStatus::Success));
        let first = recorder.current();
        let second = recorder.current();
        assert_eq!(first, second);
    }

    #[test]
    fn clear_returns_slot_to_empty() {
        let recorder = ItnRecorder::new();
        recorder.record(attempt("r1", ItnStatus::Failed));
        recorder.clear();
        assert_eq!(recorder.current(), None);
    }

    #[test]
    fn clones_share_the_same_slot() {
        let recorder = ItnRecorder::new();
        let handle = recorder.clone();
        handle.record(attempt("r1", ItnStatus::Success));
        assert_eq!(recorder.current().map(|a| a.request_id), Some("r1".into()));
    }

    #[test]
    fn attempt_serializes_with_camel_case_request_id() {
        let a = attempt("ITN-1-abc", ItnStatus::Failed);
        let value = serde_json::to_value(&a).expect("serialize");
        assert_eq!(value["requestId"].as_str(), Some("ITN-1-abc"));
        assert_eq!(value["status"].as_str(), Some("failed"));
    }
}
