use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

const SANDBOX_PROCESS_URL: &str = "https://sandbox.payfast.co.za/eng/process";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub base_url: String,
    pub payfast_merchant_id: String,
    pub payfast_merchant_key: String,
    pub payfast_passphrase: Option<String>,
    pub payfast_process_url: String,
    pub payfast_return_url: Option<String>,
    pub payfast_cancel_url: Option<String>,
    pub payfast_notify_url: Option<String>,
    pub public_dir: String,
    pub public_rps: u32,
    pub admin_rps: u32,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            base_url: get_env("BASE_URL")?,
            payfast_merchant_id: get_env("PAYFAST_MERCHANT_ID")?,
            payfast_merchant_key: get_env("PAYFAST_MERCHANT_KEY")?,
            payfast_passphrase: env::var("PAYFAST_PASSPHRASE").ok(),
            payfast_process_url: env::var("PAYFAST_PROCESS_URL")
                .unwrap_or_else(|_| SANDBOX_PROCESS_URL.to_string()),
            payfast_return_url: env::var("PAYFAST_RETURN_URL").ok(),
            payfast_cancel_url: env::var("PAYFAST_CANCEL_URL").ok(),
            payfast_notify_url: env::var("PAYFAST_NOTIFY_URL").ok(),
            public_dir: env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
            public_rps: get_env_parse("PUBLIC_RPS")?,
            admin_rps: get_env_parse("ADMIN_RPS")?,
        })
    }

    /// Where PayFast should send the user after a completed payment.
    pub fn return_url(&self) -> String {
        self.payfast_return_url
            .clone()
            .unwrap_or_else(|| format!("{}/payment/success", self.base_url))
    }

    pub fn cancel_url(&self) -> String {
        self.payfast_cancel_url
            .clone()
            .unwrap_or_else(|| format!("{}/payment/cancel", self.base_url))
    }

    pub fn notify_url(&self) -> String {
        self.payfast_notify_url
            .clone()
            .unwrap_or_else(|| format!("{}/api/payments/payfast/notify", self.base_url))
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse<T>(name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = get_env(name)?;
    raw.parse()
        .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
