//! Env-driven configuration for the service and library.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binaries. Defaults are provided for convenience during development.
//! The model credential has no default: when it is missing the server still
//! starts, and model-backed routes answer with a configuration error.
use std::env;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub api_host: String,
    pub api_port: String,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Config {
            openai_api_key: get(API_KEY_ENV).map(|v| v.trim().to_string()),
            openai_base_url: get("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_host: get("API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            api_port: get("API_PORT").unwrap_or_else(|| DEFAULT_PORT.to_string()),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.openai_api_key.is_some()
    }

    pub fn socket_addr(&self) -> std::net::SocketAddr {
        let ip: std::net::IpAddr = self.api_host.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid API_HOST '{}', falling back to {}",
                self.api_host,
                DEFAULT_HOST
            );
            std::net::IpAddr::from([127, 0, 0, 1])
        });
        let port: u16 = self.api_port.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid API_PORT '{}', falling back to {}",
                self.api_port,
                DEFAULT_PORT
            );
            DEFAULT_PORT
        });
        std::net::SocketAddr::new(ip, port)
    }

    pub fn log_summary(&self) {
        tracing::info!(
            "{}: {}",
            API_KEY_ENV,
            self.openai_api_key
                .as_deref()
                .map(mask_secret)
                .unwrap_or_else(|| "<unset>".to_string())
        );
        tracing::info!("OPENAI_BASE_URL: {}", self.openai_base_url);
        tracing::info!("OPENAI_MODEL: {}", self.openai_model);
        tracing::info!("API_HOST: {}", self.api_host);
        tracing::info!("API_PORT: {}", self.api_port);
    }
}

fn mask_secret(secret: &str) -> String {
    let len = secret.chars().count();
    if len <= 4 {
        return "****".to_string();
    }
    let tail: String = secret.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
    format!("****{}", tail)
}
