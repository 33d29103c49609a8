//! Client of the backend's auto-generated table API (`/rest/v1/{table}`)

use contracts::shared::error::ApiError;
use contracts::shared::query::{parse_content_range_total, TableQuery};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::api_utils::{backend, decode_error, ensure_ok, network_error, with_backend_headers};

/// Rows matching the query
pub async fn select<T>(query: &TableQuery) -> Result<Vec<T>, ApiError>
where
    T: DeserializeOwned,
{
    let url = backend().table_url(query);
    let response = with_backend_headers(Request::get(&url))
        .await
        .send()
        .await
        .map_err(network_error)?;

    ensure_ok(response)
        .await?
        .json::<Vec<T>>()
        .await
        .map_err(decode_error)
}

/// Exact number of rows matching the query; only `Content-Range` is read
pub async fn count(query: &TableQuery) -> Result<u64, ApiError> {
    let url = backend().table_url(&query.clone().limit(1));
    let response = with_backend_headers(Request::get(&url))
        .await
        .header("Prefer", "count=exact")
        .send()
        .await
        .map_err(network_error)?;

    let response = ensure_ok(response).await?;
    let range = response.headers().get("content-range").unwrap_or_default();
    parse_content_range_total(&range)
        .ok_or_else(|| ApiError::Decode(format!("unexpected Content-Range: {:?}", range)))
}

pub async fn insert<B>(table: &str, body: &B) -> Result<(), ApiError>
where
    B: Serialize,
{
    let url = backend().table_url(&TableQuery::from(table));
    let response = with_backend_headers(Request::post(&url))
        .await
        .header("Prefer", "return=minimal")
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(network_error)?;

    ensure_ok(response).await.map(|_| ())
}

/// Insert, or merge into the row that collides on `on_conflict`
pub async fn upsert<B>(table: &str, on_conflict: &str, body: &B) -> Result<(), ApiError>
where
    B: Serialize,
{
    let url = backend().table_url(&TableQuery::from(table).on_conflict(on_conflict));
    let response = with_backend_headers(Request::post(&url))
        .await
        .header("Prefer", "resolution=merge-duplicates,return=minimal")
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(network_error)?;

    ensure_ok(response).await.map(|_| ())
}

/// PATCH the rows where `column = value`
pub async fn update_eq<B>(table: &str, column: &str, value: &str, body: &B) -> Result<(), ApiError>
where
    B: Serialize,
{
    let url = backend().table_url(&TableQuery::from(table).eq(column, value));
    let response = with_backend_headers(Request::patch(&url))
        .await
        .header("Prefer", "return=minimal")
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(network_error)?;

    ensure_ok(response).await.map(|_| ())
}

/// DELETE the rows where `column = value`
pub async fn delete_eq(table: &str, column: &str, value: &str) -> Result<(), ApiError> {
    let url = backend().table_url(&TableQuery::from(table).eq(column, value));
    let response = with_backend_headers(Request::delete(&url))
        .await
        .send()
        .await
        .map_err(network_error)?;

    ensure_ok(response).await.map(|_| ())
}
