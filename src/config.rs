//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the backend
//! location is baked in when the crate is compiled. Set `BANKABC_API_BASE`
//! while building to point the portal at a different backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when `BANKABC_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Location of the banking REST backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Configuration compiled into this build.
    pub fn from_env() -> Self {
        Self::with_base(option_env!("BANKABC_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    /// Configuration for an explicit backend. Trailing slashes are dropped so
    /// endpoint paths can always start with `/`.
    pub fn with_base(base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    /// Absolute URL for an endpoint path such as `/api/auth/login`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
