use chrono::{DateTime, SecondsFormat, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn to_rfc3339(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// ISO-8601 timestamp for "right now", as stored on attempts and returned by
/// the debug endpoint.
pub fn now_rfc3339() -> String {
    to_rfc3339(now())
}
