use serde::Deserialize;

use super::error::ApiError;
use super::query::TableQuery;

pub const DEFAULT_BUCKET: &str = "product-images";
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Client configuration, read from `config.toml` served next to `index.html`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct BackendConfig {
    /// Project URL of the hosted backend; empty means "same origin"
    #[serde(default)]
    pub url: String,
    /// Public anonymous key sent as `apikey` on every request
    #[serde(default)]
    pub anon_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_bucket")]
    pub product_images_bucket: String,
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,
}

fn default_bucket() -> String {
    DEFAULT_BUCKET.to_string()
}

fn default_max_image_bytes() -> u64 {
    DEFAULT_MAX_IMAGE_BYTES
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            product_images_bucket: default_bucket(),
            max_image_bytes: default_max_image_bytes(),
        }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[backend]
url = ""
anon_key = ""

[storage]
product_images_bucket = "product-images"
max_image_bytes = 5242880
"#;

impl ClientConfig {
    /// Parse, normalize and validate a TOML document
    pub fn from_toml(contents: &str) -> Result<Self, ApiError> {
        let mut config: ClientConfig =
            toml::from_str(contents).map_err(|e| ApiError::Config(e.to_string()))?;
        config.backend.url = config.backend.url.trim().trim_end_matches('/').to_string();
        config.backend.anon_key = config.backend.anon_key.trim().to_string();
        config.validate().map_err(ApiError::Config)?;
        Ok(config)
    }

    pub fn embedded_default() -> Self {
        Self::from_toml(DEFAULT_CONFIG).unwrap_or_else(|_| Self {
            backend: BackendConfig::default(),
            storage: StorageConfig::default(),
        })
    }

    /// Use the page origin when no backend URL is configured
    pub fn with_origin_fallback(mut self, origin: &str) -> Self {
        if self.backend.url.is_empty() {
            self.backend.url = origin.trim_end_matches('/').to_string();
        }
        self
    }

    fn validate(&self) -> Result<(), String> {
        let url = &self.backend.url;
        if !url.is_empty() && !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(format!("backend.url must be http(s): {}", url));
        }
        if self.storage.product_images_bucket.trim().is_empty() {
            return Err("storage.product_images_bucket must not be empty".to_string());
        }
        if self.storage.max_image_bytes == 0 {
            return Err("storage.max_image_bytes must be positive".to_string());
        }
        Ok(())
    }
}

impl BackendConfig {
    pub fn table_url(&self, query: &TableQuery) -> String {
        format!("{}{}", self.url, query.path())
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path.trim_start_matches('/'))
    }

    pub fn storage_object_url(&self, bucket: &str, object_path: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.url, bucket, object_path)
    }

    pub fn public_object_url(&self, bucket: &str, object_path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.url, bucket, object_path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = ClientConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, ClientConfig::embedded_default());
        assert_eq!(config.storage.max_image_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = ClientConfig::from_toml("[backend]\nurl = \"https://erp.example.co/\"\n").unwrap();
        assert_eq!(config.backend.url, "https://erp.example.co");
        assert_eq!(config.storage.product_images_bucket, DEFAULT_BUCKET);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(ClientConfig::from_toml("[backend]\nurl = \"ftp://x\"\n").is_err());
        assert!(ClientConfig::from_toml("[storage]\nmax_image_bytes = 0\n").is_err());
        assert!(ClientConfig::from_toml("not toml at all [").is_err());
    }

    #[test]
    fn test_origin_fallback() {
        let config = ClientConfig::embedded_default().with_origin_fallback("http://localhost:8080/");
        assert_eq!(config.backend.url, "http://localhost:8080");

        let configured = ClientConfig::from_toml("[backend]\nurl = \"https://a.b\"\n")
            .unwrap()
            .with_origin_fallback("http://localhost:8080");
        assert_eq!(configured.backend.url, "https://a.b");
    }

    #[test]
    fn test_endpoint_urls() {
        let backend = BackendConfig {
            url: "https://erp.example.co".to_string(),
            anon_key: "k".to_string(),
        };
        assert_eq!(
            backend.auth_url("token?grant_type=password"),
            "https://erp.example.co/auth/v1/token?grant_type=password"
        );
        assert_eq!(
            backend.public_object_url("product-images", "a.png"),
            "https://erp.example.co/storage/v1/object/public/product-images/a.png"
        );
        assert_eq!(
            backend.table_url(&TableQuery::from("products")),
            "https://erp.example.co/rest/v1/products"
        );
    }
}
