//! API utilities for frontend-backend communication
//!
//! The backend location comes from `/config.toml`, loaded once at start-up
//! (see [`crate::shared::config::load_config`]) and installed here.
//! Every request to the hosted backend carries the public `apikey` and a
//! bearer token: the signed-in user's access token, or the anon key.

use contracts::shared::config::{BackendConfig, ClientConfig};
use contracts::shared::error::ApiError;
use gloo_net::http::{RequestBuilder, Response};
use once_cell::sync::{Lazy, OnceCell};

use crate::system::auth::context;

static CONFIG: OnceCell<ClientConfig> = OnceCell::new();
static FALLBACK: Lazy<ClientConfig> = Lazy::new(ClientConfig::embedded_default);

/// Install the loaded configuration; the first call wins
pub fn install_config(config: ClientConfig) {
    if CONFIG.set(config).is_err() {
        log::warn!("client config already installed, keeping the first one");
    }
}

pub fn client_config() -> &'static ClientConfig {
    CONFIG.get().unwrap_or(&FALLBACK)
}

pub fn backend() -> &'static BackendConfig {
    &client_config().backend
}

/// Origin of the page, e.g. "https://erp.example.com"
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Add `apikey` and `Authorization` headers, refreshing an expired access token first
pub async fn with_backend_headers(builder: RequestBuilder) -> RequestBuilder {
    let backend = backend();
    let token = context::access_token()
        .await
        .unwrap_or_else(|| backend.anon_key.clone());
    builder
        .header("apikey", &backend.anon_key)
        .header("Authorization", &format!("Bearer {}", token))
}

/// Pass successful responses through, decode the backend's error body otherwise
pub async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_response(status, &body);
    log::warn!("backend call to {} failed: {}", response.url(), error);
    Err(error)
}

pub fn network_error(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

pub fn decode_error(e: gloo_net::Error) -> ApiError {
    ApiError::Decode(e.to_string())
}
