use serde::Deserialize;
use thiserror::Error;

use super::validation::ValidationErrors;

/// Failure of a call into the hosted backend, or of the local checks before it.
///
/// The `Display` text is what the user sees in the error notification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("网络请求失败: {0}")]
    Network(String),

    #[error("{message}")]
    Backend { status: u16, message: String },

    #[error("响应解析失败: {0}")]
    Decode(String),

    #[error("用户未登录")]
    NotAuthenticated,

    #[error("图片上传失败: {0}")]
    Upload(String),

    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("配置错误: {0}")]
    Config(String),
}

impl ApiError {
    /// Build from a non-2xx response, pulling the backend's own message when present
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = backend_message(body).unwrap_or_else(|| format!("HTTP {}", status));
        ApiError::Backend { status, message }
    }

    /// Rejected credentials or an expired token
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Backend { status: 401, .. }) || *self == ApiError::NotAuthenticated
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

/// Error envelope shapes returned by the table, auth and storage APIs
#[derive(Debug, Default, Deserialize)]
struct BackendErrorBody {
    message: Option<String>,
    msg: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

/// Extract the human-readable message from a backend error body
pub fn backend_message(body: &str) -> Option<String> {
    let parsed: BackendErrorBody = serde_json::from_str(body).ok()?;
    [
        parsed.message,
        parsed.msg,
        parsed.error_description,
        parsed.error,
    ]
    .into_iter()
    .flatten()
    .find(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_api_message() {
        let body = r#"{"code":"23505","details":null,"hint":null,"message":"duplicate key value violates unique constraint"}"#;
        let err = ApiError::from_response(409, body);
        assert_eq!(
            err.to_string(),
            "duplicate key value violates unique constraint"
        );
    }

    #[test]
    fn test_auth_api_message() {
        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        assert_eq!(
            backend_message(body).as_deref(),
            Some("Invalid login credentials")
        );
    }

    #[test]
    fn test_unparsable_body_falls_back_to_status() {
        let err = ApiError::from_response(502, "<html>bad gateway</html>");
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::from_response(401, "{}").is_unauthorized());
        assert!(ApiError::NotAuthenticated.is_unauthorized());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
    }

    #[test]
    fn test_validation_message() {
        let mut errors = ValidationErrors::new();
        errors.add("unit_price", "售价不能为负");
        let err: ApiError = errors.into();
        assert_eq!(err.to_string(), "售价不能为负");
    }
}
