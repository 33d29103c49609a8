//! Loading of `/config.toml`, served next to `index.html`

use contracts::shared::config::ClientConfig;
use gloo_net::http::Request;

pub const CONFIG_PATH: &str = "/config.toml";

/// Fetch and parse the client configuration.
///
/// A missing or invalid file falls back to the embedded default; an empty
/// backend URL means the page origin.
pub async fn load_config() -> ClientConfig {
    let config = match fetch_config_text().await {
        Ok(text) => match ClientConfig::from_toml(&text) {
            Ok(config) => {
                log::info!("loaded {}", CONFIG_PATH);
                config
            }
            Err(e) => {
                log::error!("invalid {}: {}", CONFIG_PATH, e);
                ClientConfig::embedded_default()
            }
        },
        Err(e) => {
            log::warn!("{} not available ({}), using defaults", CONFIG_PATH, e);
            ClientConfig::embedded_default()
        }
    };
    config.with_origin_fallback(&super::api_utils::page_origin())
}

async fn fetch_config_text() -> Result<String, String> {
    let response = Request::get(CONFIG_PATH)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}
