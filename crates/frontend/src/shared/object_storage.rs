//! Uploads into the backend's object storage

use contracts::domain::a001_product::image::{check_image, object_path, ImageCandidate};
use contracts::shared::error::ApiError;
use gloo_net::http::Request;
use uuid::Uuid;
use web_sys::File;

use super::api_utils::{backend, client_config, ensure_ok, network_error, with_backend_headers};

/// Browser file as seen by the image checks
pub fn image_candidate(file: &File) -> ImageCandidate {
    ImageCandidate {
        name: file.name(),
        size: file.size() as u64,
        mime: file.type_(),
    }
}

/// Upload a product image and return its public URL
pub async fn upload_product_image(file: File) -> Result<String, ApiError> {
    let storage = &client_config().storage;
    let candidate = image_candidate(&file);
    check_image(&candidate, storage.max_image_bytes)
        .map_err(|rejection| ApiError::Upload(rejection.to_string()))?;

    let path = object_path(&candidate.name, Uuid::new_v4());
    let url = backend().storage_object_url(&storage.product_images_bucket, &path);

    let response = with_backend_headers(Request::post(&url))
        .await
        .header("Content-Type", &candidate.mime)
        .header("x-upsert", "false")
        .body(file)
        .map_err(|e| ApiError::Upload(e.to_string()))?
        .send()
        .await
        .map_err(network_error)?;

    ensure_ok(response).await.map_err(|e| match e {
        ApiError::Backend { message, .. } => ApiError::Upload(message),
        other => other,
    })?;

    log::info!("uploaded product image {}", path);
    Ok(backend().public_object_url(&storage.product_images_bucket, &path))
}
