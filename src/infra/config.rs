//! Centralized configuration (env file variant + environment variables + defaults).
//!
//! `ENV` picks the variant (`dev` when unset) and `./config/.env.<ENV>` is
//! loaded into the process environment. Variables already set in the
//! environment take precedence over the file.

use anyhow::{anyhow, Context};
use reqwest::Url;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENV: &str = "dev";
pub const DEFAULT_CONFIG_DIR: &str = "./config";
pub const DEFAULT_USER_SERVICE_ADDR: &str = "0.0.0.0:8081";
pub const DEFAULT_PRODUCT_SERVICE_ADDR: &str = "0.0.0.0:8082";
pub const DEFAULT_USER_SERVICE_TIMEOUT_MS: u64 = 5_000;

/// Selected config variant (`ENV`, default `dev`).
pub fn environment() -> String {
    std::env::var("ENV")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENV.to_string())
}

/// Path of the env file for the selected variant.
pub fn env_file_path() -> PathBuf {
    let dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    PathBuf::from(dir).join(format!(".env.{}", environment()))
}

/// Loads the selected env file into the process environment.
///
/// Fails when the file is missing or unreadable.
pub fn load_env_file() -> anyhow::Result<PathBuf> {
    let path = env_file_path();
    dotenv::from_path(&path)
        .with_context(|| format!("Error reading config file {}", path.display()))?;
    Ok(path)
}

/// Settings for the user (directory) service.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    pub bind_addr: SocketAddr,
}

impl UserServiceConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            bind_addr: bind_addr(&lookup, "USER_SERVICE_ADDR", DEFAULT_USER_SERVICE_ADDR)?,
        })
    }
}

/// Settings for the product (booking) service.
#[derive(Debug, Clone)]
pub struct ProductServiceConfig {
    pub bind_addr: SocketAddr,
    /// Base of the user service's get-user endpoint; the email is appended
    /// as one path segment.
    pub user_service_url: Url,
    /// Upper bound on a single enrichment call.
    pub user_service_timeout: Duration,
}

impl ProductServiceConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let raw_url = lookup("USER_SERVICE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow!("USER_SERVICE_URL is not set in the environment"))?;
        let user_service_url = Url::parse(raw_url.trim())
            .with_context(|| format!("USER_SERVICE_URL is not a valid URL: {raw_url}"))?;
        if !matches!(user_service_url.scheme(), "http" | "https") {
            return Err(anyhow!(
                "USER_SERVICE_URL must be an http(s) URL, got {raw_url}"
            ));
        }

        let timeout_ms = match lookup("USER_SERVICE_TIMEOUT_MS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .with_context(|| format!("USER_SERVICE_TIMEOUT_MS must be a valid u64, got {v}"))?
                .max(1),
            None => DEFAULT_USER_SERVICE_TIMEOUT_MS,
        };

        Ok(Self {
            bind_addr: bind_addr(&lookup, "PRODUCT_SERVICE_ADDR", DEFAULT_PRODUCT_SERVICE_ADDR)?,
            user_service_url,
            user_service_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

fn bind_addr(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> anyhow::Result<SocketAddr> {
    let raw = lookup(key).unwrap_or_else(|| default.to_string());
    raw.trim()
        .parse::<SocketAddr>()
        .with_context(|| format!("{key} must be a socket address, got {raw}"))
}
