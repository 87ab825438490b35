//! Host configuration parsed from environment variables.
//!
//! - `PORT`: listen port, default 8080
//! - `PROCESSMART_DIST_DIR`: built client bundle, default `client/dist`
//! - `PROCESSMART_API_UPSTREAM`: backend base URL; enables the `/api` proxy

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DIST_DIR: &str = "client/dist";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
    #[error("PROCESSMART_API_UPSTREAM must be an http(s) URL, got {0:?}")]
    InvalidUpstream(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub api_upstream: Option<String>,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| get(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let dist_dir = PathBuf::from(var("PROCESSMART_DIST_DIR").unwrap_or_else(|| DEFAULT_DIST_DIR.to_owned()));
        let api_upstream = var("PROCESSMART_API_UPSTREAM").map(parse_upstream).transpose()?;

        Ok(Self { port, dist_dir, api_upstream })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse_upstream(raw: String) -> Result<String, ConfigError> {
    if !(raw.starts_with("http://") || raw.starts_with("https://")) {
        return Err(ConfigError::InvalidUpstream(raw));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}
