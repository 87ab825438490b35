//! Client configuration resolved at build time.
//!
//! The WASM bundle has no process environment at runtime, so the backend URL
//! is baked in from `PROCESSMART_API_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend base URL used when `PROCESSMART_API_URL` is unset or blank.
pub const DEFAULT_API_URL: &str = "/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_URL.to_owned() }
    }
}

impl ClientConfig {
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("PROCESSMART_API_URL"))
    }

    pub fn from_raw(api_url: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(|raw| raw.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .to_owned();
        Self { api_base_url }
    }
}
