//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the required variables are missing, falls back to a config file
//! 3. Probes a short list of paths for the file
//! 4. Supports TOML and JSON formats
//!
//! ## Environment Variables
//! - `STUDYLINE_API_BASE_URL`: Platform API base URL (required)
//! - `STUDYLINE_API_TOKEN`: Bearer token for the platform API (optional)
//! - `STUDYLINE_HTTP_TIMEOUT_SECS`: HTTP timeout in seconds
//! - `STUDYLINE_HTTP_MAX_ATTEMPTS`: Total HTTP attempts per request
//! - `STUDYLINE_BIND_ADDR`: API facade bind address
//! - `STUDYLINE_LOOKBACK_HOURS` / `STUDYLINE_LOOKAHEAD_HOURS`: calendar
//!   window for upcoming/overdue queries
//!
//! ## File Locations
//! The loader probes `config.toml`, `config.json`, `studyline.toml`, and
//! `studyline.json` in the current working directory, then the parent
//! directory.

use std::path::{Path, PathBuf};

use studyline_domain::{Config, Result, StudylineError};

/// Load configuration with automatic fallback strategy.
///
/// # Errors
/// Returns `StudylineError::Config` if neither source yields a usable
/// configuration.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "environment incomplete, trying config file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables.
///
/// Only the API base URL is required; everything else falls back to domain
/// defaults.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("STUDYLINE_API_BASE_URL")?;
    let token = std::env::var("STUDYLINE_API_TOKEN").ok();

    let mut config = Config {
        platform: studyline_domain::PlatformApiConfig { base_url, token },
        ..Config::default()
    };

    if let Ok(raw) = std::env::var("STUDYLINE_HTTP_TIMEOUT_SECS") {
        config.http.timeout_secs = parse_env("STUDYLINE_HTTP_TIMEOUT_SECS", &raw)?;
    }
    if let Ok(raw) = std::env::var("STUDYLINE_HTTP_MAX_ATTEMPTS") {
        config.http.max_attempts = parse_env("STUDYLINE_HTTP_MAX_ATTEMPTS", &raw)?;
    }
    if let Ok(addr) = std::env::var("STUDYLINE_BIND_ADDR") {
        config.server.bind_addr = addr;
    }
    if let Ok(raw) = std::env::var("STUDYLINE_LOOKBACK_HOURS") {
        config.calendar_window.lookback_hours = parse_env("STUDYLINE_LOOKBACK_HOURS", &raw)?;
    }
    if let Ok(raw) = std::env::var("STUDYLINE_LOOKAHEAD_HOURS") {
        config.calendar_window.lookahead_hours = parse_env("STUDYLINE_LOOKAHEAD_HOURS", &raw)?;
    }

    Ok(config)
}

/// Load configuration from a file, probing default locations when no
/// explicit path is given.
pub fn load_from_file(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => probe_paths().ok_or_else(|| {
            StudylineError::Config("no config file found in probed locations".into())
        })?,
    };

    let contents = std::fs::read_to_string(&path).map_err(|e| {
        StudylineError::Config(format!("failed to read {}: {e}", path.display()))
    })?;

    let config = parse_config(&path, &contents)?;
    tracing::info!(path = %path.display(), "configuration loaded from file");
    Ok(config)
}

fn parse_config(path: &Path, contents: &str) -> Result<Config> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(contents)
            .map_err(|e| StudylineError::Config(format!("invalid TOML config: {e}"))),
        Some("json") => serde_json::from_str(contents)
            .map_err(|e| StudylineError::Config(format!("invalid JSON config: {e}"))),
        other => Err(StudylineError::Config(format!(
            "unsupported config format: {:?} ({})",
            other,
            path.display()
        ))),
    }
}

fn probe_paths() -> Option<PathBuf> {
    const NAMES: [&str; 4] = ["config.toml", "config.json", "studyline.toml", "studyline.json"];

    for dir in [".", ".."] {
        for name in NAMES {
            let candidate = Path::new(dir).join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| StudylineError::Config(format!("missing environment variable {name}")))
}

fn parse_env<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    raw.parse::<T>()
        .map_err(|e| StudylineError::Config(format!("invalid value for {name}: {e}")))
}
