//! Client configuration resolved from CLI flags and environment variables.

use std::path::PathBuf;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while resolving [`ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid GraphQL endpoint `{0}`: expected an http:// or https:// URL")]
    InvalidEndpoint(String),
    #[error("no state directory: pass --state-dir, or set PORTAL_STATE_DIR or HOME")]
    NoStateDir,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub state_dir: PathBuf,
    pub timeouts: Timeouts,
}

impl ClientConfig {
    /// Build typed config from already-parsed flags plus the environment.
    ///
    /// `endpoint` and `state_dir` come from clap (which also reads
    /// `PORTAL_GRAPHQL_ENDPOINT` / `PORTAL_STATE_DIR`). Optional:
    /// - `PORTAL_REQUEST_TIMEOUT_SECS`: default 30
    /// - `PORTAL_CONNECT_TIMEOUT_SECS`: default 10
    /// - `XDG_STATE_HOME` / `HOME`: state dir fallback
    pub fn from_env(endpoint: &str, state_dir: Option<PathBuf>) -> Result<Self, ConfigError> {
        let endpoint = parse_endpoint(endpoint)?;
        let state_dir = state_dir
            .or_else(|| {
                default_state_dir(std::env::var("XDG_STATE_HOME").ok().as_deref(), std::env::var("HOME").ok().as_deref())
            })
            .ok_or(ConfigError::NoStateDir)?;
        let timeouts = Timeouts {
            request_secs: parse_secs(
                std::env::var("PORTAL_REQUEST_TIMEOUT_SECS").ok().as_deref(),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            ),
            connect_secs: parse_secs(
                std::env::var("PORTAL_CONNECT_TIMEOUT_SECS").ok().as_deref(),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
        };
        Ok(Self { endpoint, state_dir, timeouts })
    }
}

fn parse_endpoint(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_owned())
    } else {
        Err(ConfigError::InvalidEndpoint(raw.to_owned()))
    }
}

fn default_state_dir(xdg_state_home: Option<&str>, home: Option<&str>) -> Option<PathBuf> {
    if let Some(xdg) = xdg_state_home.filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(xdg).join("portal"));
    }
    home.filter(|v| !v.is_empty())
        .map(|h| PathBuf::from(h).join(".portal"))
}

fn parse_secs(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
