use shared_types::ClientConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding `[api] base_url`.
pub const API_BASE_ENV: &str = "SEIRA_API_BASE";

/// Parse `config.toml` contents. A malformed file falls back to defaults.
pub fn parse_config(contents: &str) -> ClientConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse client config, using defaults");
        ClientConfig::default()
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> ClientConfig {
    let config = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            tracing::info!(error = %e, path = CONFIG_PATH, "no client config file, using defaults");
            ClientConfig::default()
        }
    };

    let _ = dotenvy::dotenv();
    match std::env::var(API_BASE_ENV) {
        Ok(base) => config.with_api_base(&base),
        Err(_) => config,
    }
}

#[cfg(target_arch = "wasm32")]
fn read_config() -> ClientConfig {
    match option_env!("SEIRA_API_BASE") {
        Some(base) => ClientConfig::default().with_api_base(base),
        None => ClientConfig::default(),
    }
}

/// The process-wide client config, loaded on first use.
pub fn client_config() -> &'static ClientConfig {
    CONFIG.get_or_init(|| {
        let config = read_config();
        tracing::info!(api_base = config.api_base(), app = %config.app.name, "client config loaded");
        config
    })
}
