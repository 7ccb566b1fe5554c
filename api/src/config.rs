//! Where the backend lives.

/// Fallback origin for native builds when `DSAMATE_API_BASE` is unset.
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Environment variable consulted by native builds.
pub const API_BASE_ENV: &str = "DSAMATE_API_BASE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve the base url for the current platform.
    ///
    /// In the browser the page origin is used so relative API paths keep working
    /// behind any host. Native shells read `DSAMATE_API_BASE`.
    pub fn from_env() -> Self {
        Self::new(resolve_base_url())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(target_arch = "wasm32")]
fn resolve_base_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve_base_url() -> String {
    std::env::var(API_BASE_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
}
