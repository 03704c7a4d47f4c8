use rand::{distributions::Alphanumeric, thread_rng, Rng};

fn random_suffix(length: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Correlation id attached to every inbound ITN, e.g. `ITN-1712345678901-x7Kp2mQ9a`.
pub fn generate_itn_request_id() -> String {
    format!(
        "ITN-{}-{}",
        chrono::Utc::now().timestamp_millis(),
        random_suffix(9)
    )
}

/// Merchant payment reference. PayFast allows at most 80 chars, alphanumeric
/// and underscores.
pub fn generate_payment_id() -> String {
    format!(
        "pf_{}_{}",
        chrono::Utc::now().timestamp_millis(),
        random_suffix(9)
    )
}
