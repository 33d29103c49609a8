use contracts::shared::error::ApiError;
use contracts::system::auth::{AuthUser, RefreshRequest, SignInRequest, TokenResponse};
use gloo_net::http::{Request, RequestBuilder};

use crate::shared::api_utils::{backend, decode_error, ensure_ok, network_error};

fn auth_request(builder: RequestBuilder) -> RequestBuilder {
    builder.header("apikey", &backend().anon_key)
}

async fn token_grant<B: serde::Serialize>(grant_type: &str, body: &B) -> Result<TokenResponse, ApiError> {
    let url = backend().auth_url(&format!("token?grant_type={}", grant_type));
    let response = auth_request(Request::post(&url))
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(network_error)?;

    ensure_ok(response)
        .await?
        .json::<TokenResponse>()
        .await
        .map_err(decode_error)
}

/// Sign in with e-mail and password
pub async fn sign_in(email: String, password: String) -> Result<TokenResponse, ApiError> {
    token_grant("password", &SignInRequest { email, password }).await
}

/// Exchange a refresh token for a new token pair
pub async fn refresh_token(refresh_token: String) -> Result<TokenResponse, ApiError> {
    token_grant("refresh_token", &RefreshRequest { refresh_token }).await
}

/// User behind an access token; fails when the token is no longer accepted
pub async fn get_current_user(access_token: &str) -> Result<AuthUser, ApiError> {
    let response = auth_request(Request::get(&backend().auth_url("user")))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(network_error)?;

    ensure_ok(response)
        .await?
        .json::<AuthUser>()
        .await
        .map_err(decode_error)
}

/// Revoke the session on the backend
pub async fn sign_out(access_token: &str) -> Result<(), ApiError> {
    let response = auth_request(Request::post(&backend().auth_url("logout")))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(network_error)?;

    ensure_ok(response).await.map(|_| ())
}
