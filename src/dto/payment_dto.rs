use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InitiatePaymentRequest {
    #[validate(range(min = 0.01, message = "amount must be positive"))]
    pub amount: f64,
    #[validate(length(min = 1, max = 100))]
    pub item_name: String,
    pub item_description: Option<String>,
    pub name_first: Option<String>,
    pub name_last: Option<String>,
    pub cell_number: Option<String>,
    pub custom_str1: Option<String>,
    pub custom_str2: Option<String>,
}

/// Everything the frontend needs to POST the user to PayFast's process page.
#[derive(Debug, Clone, Serialize)]
pub struct InitiatePaymentResponse {
    pub success: bool,
    pub payment_url: String,
    pub payment_data: serde_json::Value,
    pub payment_id: String,
}
