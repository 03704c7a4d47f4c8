pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{itn_recorder::ItnRecorder, payfast_service::PayfastService};

#[derive(Clone)]
pub struct AppState {
    pub itn_recorder: ItnRecorder,
    pub payfast_service: PayfastService,
}

impl AppState {
    pub fn new() -> Self {
        let config = crate::config::get_config();

        let itn_recorder = ItnRecorder::new();
        let payfast_service = PayfastService::new(
            config.payfast_merchant_id.clone(),
            config.payfast_merchant_key.clone(),
            config.payfast_passphrase.clone(),
        );

        Self {
            itn_recorder,
            payfast_service,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
