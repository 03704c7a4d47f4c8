use std::collections::HashMap;

use axum::{
    extract::{rejection::FormRejection, Query, State},
    http::header,
    response::{IntoResponse, Json, Response},
    Form,
};
use serde_json::json;
use tracing::{error, info, warn};
use validator::Validate;

use crate::{
    config::get_config,
    dto::payment_dto::{InitiatePaymentRequest, InitiatePaymentResponse},
    error::Result,
    services::itn_recorder::{ItnAttempt, ItnStatus},
    utils::{time, token},
    AppState,
};

// PayFast treats any non-200 as a delivery failure and retries, so the
// notify endpoint always answers 200 with one of these plain-text bodies.
const ITN_VALID: &str = "VALID";
const ITN_INVALID: &str = "INVALID";
const ENDPOINT_ACCESSIBLE: &str = "ENDPOINT_ACCESSIBLE";

/// PayFast posts ITNs as application/x-www-form-urlencoded. A body that does
/// not parse still gets the 200 INVALID answer, never an extractor rejection.
pub async fn handle_itn(
    State(state): State<AppState>,
    form: std::result::Result<Form<HashMap<String, String>>, FormRejection>,
) -> Response {
    match form {
        Ok(Form(data)) => process_itn(&state, data),
        Err(rejection) => {
            let request_id = token::generate_itn_request_id();
            error!(request_id = %request_id, error = %rejection, "Failed to parse ITN form data");
            state.itn_recorder.record(ItnAttempt {
                timestamp: time::now_rfc3339(),
                request_id,
                data: serde_json::Value::Null,
                errors: vec![format!("Failed to parse form data: {}", rejection)],
                status: ItnStatus::Failed,
            });
            itn_response(ITN_INVALID)
        }
    }
}

/// Some PayFast notifications arrive as GETs with the same fields in the
/// query string. A bare or `test=true` request is an accessibility check
/// and must not disturb the recorder.
pub async fn handle_itn_get(
    State(state): State<AppState>,
    Query(data): Query<HashMap<String, String>>,
) -> Response {
    if data.is_empty() || data.get("test").map(String::as_str) == Some("true") {
        info!("PayFast notify endpoint accessibility check");
        return itn_response(ENDPOINT_ACCESSIBLE);
    }
    process_itn(&state, data)
}

fn process_itn(state: &AppState, data: HashMap<String, String>) -> Response {
    let request_id = token::generate_itn_request_id();
    info!(
        request_id = %request_id,
        payment_status = data.get("payment_status").map(String::as_str),
        m_payment_id = data.get("m_payment_id").map(String::as_str),
        "PayFast ITN received"
    );

    let payload = serde_json::to_value(&data).unwrap_or(serde_json::Value::Null);

    if !state.payfast_service.verify_itn_signature(&data) {
        let message = "Signature verification failed".to_string();
        error!(request_id = %request_id, "{}", message);
        state.itn_recorder.record(ItnAttempt {
            timestamp: time::now_rfc3339(),
            request_id,
            data: payload,
            errors: vec![message],
            status: ItnStatus::Failed,
        });
        return itn_response(ITN_INVALID);
    }

    if !state.payfast_service.verify_merchant(&data) {
        let received_id = data.get("merchant_id").cloned().unwrap_or_default();
        error!(
            request_id = %request_id,
            received_merchant_id = %received_id,
            "Merchant credentials mismatch"
        );
        state.itn_recorder.record(ItnAttempt {
            timestamp: time::now_rfc3339(),
            request_id,
            data: payload,
            errors: vec![
                "Merchant credentials mismatch".to_string(),
                format!(
                    "Expected merchant_id {}, received {}",
                    state.payfast_service.merchant_id(),
                    received_id
                ),
            ],
            status: ItnStatus::Failed,
        });
        return itn_response(ITN_INVALID);
    }

    let m_payment_id = data.get("m_payment_id").map(String::as_str).unwrap_or("");
    match data.get("payment_status").map(String::as_str) {
        Some("COMPLETE") => {
            // TODO: flip the payment row to paid once payments move off the
            // debug recorder onto real storage.
            info!(request_id = %request_id, m_payment_id, "Payment completed");
        }
        Some("FAILED") => {
            info!(request_id = %request_id, m_payment_id, "Payment failed");
        }
        Some("PENDING") => {
            info!(request_id = %request_id, m_payment_id, "Payment pending");
        }
        Some("CANCELLED") => {
            info!(request_id = %request_id, m_payment_id, "Payment cancelled");
        }
        other => {
            warn!(request_id = %request_id, status = ?other, "Unknown payment status");
        }
    }

    state.itn_recorder.record(ItnAttempt {
        timestamp: time::now_rfc3339(),
        request_id,
        data: payload,
        errors: vec![],
        status: ItnStatus::Success,
    });

    itn_response(ITN_VALID)
}

fn itn_response(body: &'static str) -> Response {
    ([(header::CONTENT_TYPE, "text/plain")], body).into_response()
}

/// Builds the signed field set the frontend submits to PayFast's process
/// page. The redirect URLs are part of the submission but not the signature.
pub async fn initiate_payment(
    State(state): State<AppState>,
    Json(req): Json<InitiatePaymentRequest>,
) -> Result<Json<InitiatePaymentResponse>> {
    req.validate()?;
    let config = get_config();
    let service = &state.payfast_service;

    let payment_id = token::generate_payment_id();

    let mut fields: Vec<(String, String)> = vec![
        ("merchant_id".to_string(), service.merchant_id().to_string()),
        (
            "merchant_key".to_string(),
            service.merchant_key().to_string(),
        ),
        ("m_payment_id".to_string(), payment_id.clone()),
        ("amount".to_string(), format!("{:.2}", req.amount)),
        ("item_name".to_string(), req.item_name.trim().to_string()),
    ];
    push_optional(&mut fields, "item_description", req.item_description.as_deref());
    fields.push(("return_url".to_string(), config.return_url()));
    fields.push(("cancel_url".to_string(), config.cancel_url()));
    fields.push(("notify_url".to_string(), config.notify_url()));
    push_optional(&mut fields, "name_first", req.name_first.as_deref());
    push_optional(&mut fields, "name_last", req.name_last.as_deref());
    push_optional(&mut fields, "cell_number", req.cell_number.as_deref());
    push_optional(&mut fields, "custom_str1", req.custom_str1.as_deref());
    push_optional(&mut fields, "custom_str2", req.custom_str2.as_deref());

    let signature = service.request_signature(&fields);
    fields.push(("signature".to_string(), signature));

    info!(payment_id = %payment_id, "PayFast payment initiated");

    let payment_data = fields
        .iter()
        .map(|(key, value)| (key.clone(), serde_json::Value::String(value.clone())))
        .collect::<serde_json::Map<_, _>>();

    Ok(Json(InitiatePaymentResponse {
        success: true,
        payment_url: config.payfast_process_url.clone(),
        payment_data: serde_json::Value::Object(payment_data),
        payment_id,
    }))
}

fn push_optional(fields: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            fields.push((key.to_string(), trimmed.to_string()));
        }
    }
}

/// Debug view of the most recent ITN attempt. `timestamp` is generated at
/// read time, not stored.
pub async fn get_last_itn(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "lastITN": state.itn_recorder.current(),
        "timestamp": time::now_rfc3339(),
    }))
}
