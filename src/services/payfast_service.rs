use std::collections::HashMap;

use md5::{Digest, Md5};
use subtle::ConstantTimeEq;

/// PayFast signing and verification.
///
/// Two different parameter strings are in play:
/// - ITN verification hashes the fields sorted alphabetically with raw
///   (already URL-decoded) values, which is how PayFast signs the
///   notifications it sends us.
/// - Outbound payment requests hash the fields in submission order with
///   urlencoded values, matching PayFast's reference PHP integration.
///
/// In both cases `signature` and `merchant_key` are excluded, empty values
/// are skipped, and the optional passphrase is appended last before the MD5.
#[derive(Clone)]
pub struct PayfastService {
    merchant_id: String,
    merchant_key: String,
    passphrase: Option<String>,
}

impl PayfastService {
    pub fn new(merchant_id: String, merchant_key: String, passphrase: Option<String>) -> Self {
        Self {
            merchant_id,
            merchant_key,
            passphrase,
        }
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    pub fn merchant_key(&self) -> &str {
        &self.merchant_key
    }

    /// Signature PayFast is expected to have sent for this ITN payload.
    pub fn itn_signature(&self, data: &HashMap<String, String>) -> String {
        let mut keys: Vec<&String> = data
            .iter()
            .filter(|(key, value)| {
                key.as_str() != "signature"
                    && key.as_str() != "merchant_key"
                    && !value.trim().is_empty()
            })
            .map(|(key, _)| key)
            .collect();
        keys.sort();

        let mut param_string = keys
            .iter()
            .map(|key| format!("{}={}", key, data[key.as_str()].trim()))
            .collect::<Vec<_>>()
            .join("&");

        if let Some(passphrase) = self.trimmed_passphrase() {
            param_string.push_str("&passphrase=");
            param_string.push_str(passphrase);
        }

        md5_hex(&param_string)
    }

    /// Compares the `signature` field against the expected ITN signature.
    /// Missing signature fails verification.
    pub fn verify_itn_signature(&self, data: &HashMap<String, String>) -> bool {
        let Some(received) = data.get("signature") else {
            return false;
        };
        let expected = self.itn_signature(data);
        let received = received.trim().to_lowercase();
        ConstantTimeEq::ct_eq(received.as_bytes(), expected.as_bytes()).into()
    }

    pub fn verify_merchant(&self, data: &HashMap<String, String>) -> bool {
        data.get("merchant_id").map(String::as_str) == Some(self.merchant_id.as_str())
            && data.get("merchant_key").map(String::as_str) == Some(self.merchant_key.as_str())
    }

    /// Signs an outbound payment request. `fields` must be in submission
    /// order; the redirect URLs are submitted to PayFast but never hashed.
    pub fn request_signature(&self, fields: &[(String, String)]) -> String {
        let mut param_string = fields
            .iter()
            .filter(|(key, value)| {
                !matches!(
                    key.as_str(),
                    "signature" | "merchant_key" | "return_url" | "cancel_url" | "notify_url"
                ) && !value.trim().is_empty()
            })
            .map(|(key, value)| format!("{}={}", key, urlencode(value.trim())))
            .collect::<Vec<_>>()
            .join("&");

        if let Some(passphrase) = self.trimmed_passphrase() {
            param_string.push_str("&passphrase=");
            param_string.push_str(&urlencode(passphrase));
        }

        md5_hex(&param_string)
    }

    fn trimmed_passphrase(&self) -> Option<&str> {
        self.passphrase
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

fn md5_hex(input: &str) -> String {
    hex::encode(Md5::digest(input.as_bytes()))
}

/// PHP urlencode() style: spaces as `+`, uppercase hex escapes.
fn urlencode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
