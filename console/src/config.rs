//! Client configuration baked in at build time.
//!
//! The WASM bundle has no process environment, so the API location is read
//! with `option_env!` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const API_VERSION: &str = "v1";

/// How often the admin layout re-checks the stored session.
pub const SESSION_CHECK_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// How long a success notice stays up before it dismisses itself.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub version: String,
}

impl ApiConfig {
    pub fn new(base_url: &str, version: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_owned(),
            version: version.trim_matches('/').to_owned(),
        }
    }

    /// Build from `CONSOLE_API_BASE_URL` as seen by the compiler.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("CONSOLE_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL), API_VERSION)
    }

    /// `{base_url}/api/{version}`; endpoint paths are appended to this.
    pub fn api_root(&self) -> String {
        format!("{}/api/{}", self.base_url, self.version)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
