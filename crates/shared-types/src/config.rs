use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";
pub const DEFAULT_APP_NAME: &str = "SEIRA 2.0";

/// `[api]` table of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

/// `[app]` table of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSection {
    #[serde(default = "default_app_name")]
    pub name: String,
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            name: default_app_name(),
        }
    }
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

/// Client configuration. Every field has a default so a missing or partial
/// `config.toml` still yields a usable config.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub app: AppSection,
}

impl ClientConfig {
    /// Replace the API base, ignoring blank values. Trailing slashes are dropped.
    pub fn with_api_base(mut self, base: &str) -> Self {
        let base = base.trim().trim_end_matches('/');
        if !base.is_empty() {
            self.api.base_url = base.to_string();
        }
        self
    }

    /// Base URL without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}
