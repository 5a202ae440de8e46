// src/config.rs
//! Environment configuration, read once at startup.

use anyhow::{bail, Result};

pub const DEFAULT_RECIPIENT: &str = "andrey.koldayev@r-express.ru";

pub const ENV_SMTP_USER: &str = "OUTLOOK_EMAIL";
pub const ENV_SMTP_PASS: &str = "OUTLOOK_PASSWORD";
pub const ENV_RECIPIENT: &str = "TARGET_EMAIL";
pub const ENV_API_URL: &str = "API_URL";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Sender account, also used as the SMTP login.
    pub smtp_user: String,
    pub smtp_pass: String,
    /// Report recipient; defaults when `TARGET_EMAIL` is unset.
    pub recipient: String,
    /// Endpoint that receives the aggregated `RunResult` payload.
    pub api_url: String,
}

impl AppConfig {
    /// Read configuration from the environment. Any missing required
    /// variable fails the whole run before network activity starts.
    pub fn from_env() -> Result<Self> {
        let smtp_user = std::env::var(ENV_SMTP_USER).ok();
        let smtp_pass = std::env::var(ENV_SMTP_PASS).ok();
        let api_url = std::env::var(ENV_API_URL).ok();

        let missing: Vec<&str> = [
            (ENV_SMTP_USER, &smtp_user),
            (ENV_SMTP_PASS, &smtp_pass),
            (ENV_API_URL, &api_url),
        ]
        .iter()
        .filter(|(_, v)| v.is_none())
        .map(|(name, _)| *name)
        .collect();

        if !missing.is_empty() {
            bail!(
                "required environment variables are not set: {}",
                missing.join(", ")
            );
        }

        Ok(Self {
            smtp_user: smtp_user.unwrap_or_default(),
            smtp_pass: smtp_pass.unwrap_or_default(),
            recipient: std::env::var(ENV_RECIPIENT)
                .unwrap_or_else(|_| DEFAULT_RECIPIENT.to_string()),
            api_url: api_url.unwrap_or_default(),
        })
    }
}
