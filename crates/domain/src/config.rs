//! Application configuration structures
//!
//! Loaded by the infrastructure layer from environment variables or a config
//! file; see `studyline-infra::config` for the loading strategy.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_HTTP_BACKOFF_MS, DEFAULT_HTTP_MAX_ATTEMPTS,
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_LOOKAHEAD_HOURS, DEFAULT_LOOKBACK_HOURS,
};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    pub platform: PlatformApiConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub calendar_window: CalendarWindowConfig,
}

/// Remote platform API endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PlatformApiConfig {
    /// Base URL for the platform API (e.g. "https://api.studyline.io/v1")
    pub base_url: String,
    /// Optional bearer token forwarded on every request
    #[serde(default)]
    pub token: Option<String>,
}

impl Default for PlatformApiConfig {
    fn default() -> Self {
        Self { base_url: "http://localhost:4000/api".to_string(), token: None }
    }
}

/// HTTP client behaviour (timeouts, retries)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HttpConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    #[serde(default = "default_backoff_ms")]
    pub base_backoff_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            max_attempts: DEFAULT_HTTP_MAX_ATTEMPTS,
            base_backoff_ms: DEFAULT_HTTP_BACKOFF_MS,
        }
    }
}

/// API facade server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR.to_string() }
    }
}

/// Calendar fetch window used for upcoming/overdue queries, relative to the
/// query's "now".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CalendarWindowConfig {
    #[serde(default = "default_lookback_hours")]
    pub lookback_hours: u32,
    #[serde(default = "default_lookahead_hours")]
    pub lookahead_hours: u32,
}

impl Default for CalendarWindowConfig {
    fn default() -> Self {
        Self { lookback_hours: DEFAULT_LOOKBACK_HOURS, lookahead_hours: DEFAULT_LOOKAHEAD_HOURS }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

fn default_max_attempts() -> usize {
    DEFAULT_HTTP_MAX_ATTEMPTS
}

fn default_backoff_ms() -> u64 {
    DEFAULT_HTTP_BACKOFF_MS
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

fn default_lookback_hours() -> u32 {
    DEFAULT_LOOKBACK_HOURS
}

fn default_lookahead_hours() -> u32 {
    DEFAULT_LOOKAHEAD_HOURS
}
