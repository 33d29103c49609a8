//! Product image checks and object naming

use thiserror::Error;
use uuid::Uuid;

/// File picked in the form, as reported by the browser
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCandidate {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ImageRejection {
    #[error("请选择小于 {} 的图片", size_label(*max_bytes))]
    TooLarge { max_bytes: u64 },
    #[error("请选择图片文件")]
    NotAnImage,
}

impl ImageRejection {
    /// Notification title
    pub fn title(&self) -> &'static str {
        match self {
            ImageRejection::TooLarge { .. } => "图片过大",
            ImageRejection::NotAnImage => "文件格式不支持",
        }
    }
}

/// Byte limit as shown to the user: whole MB, otherwise KB
fn size_label(bytes: u64) -> String {
    const MB: u64 = 1024 * 1024;
    if bytes >= MB && bytes % MB == 0 {
        format!("{}MB", bytes / MB)
    } else {
        format!("{}KB", bytes.div_ceil(1024))
    }
}

/// Size is checked before type, like the picker does
pub fn check_image(candidate: &ImageCandidate, max_bytes: u64) -> Result<(), ImageRejection> {
    if candidate.size > max_bytes {
        return Err(ImageRejection::TooLarge { max_bytes });
    }
    if !candidate.mime.starts_with("image/") {
        return Err(ImageRejection::NotAnImage);
    }
    Ok(())
}

/// Storage path `{uuid}.{ext}`; the extension is whatever follows the last dot
pub fn object_path(file_name: &str, id: Uuid) -> String {
    let ext = file_name.rsplit('.').next().unwrap_or(file_name);
    format!("{}.{}", id, ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(size: u64, mime: &str) -> ImageCandidate {
        ImageCandidate {
            name: "photo.png".into(),
            size,
            mime: mime.into(),
        }
    }

    #[test]
    fn test_limits() {
        let max = 5 * 1024 * 1024;
        assert_eq!(check_image(&candidate(max, "image/png"), max), Ok(()));
        assert_eq!(
            check_image(&candidate(max + 1, "image/png"), max),
            Err(ImageRejection::TooLarge { max_bytes: max })
        );
        assert_eq!(
            check_image(&candidate(10, "application/pdf"), max),
            Err(ImageRejection::NotAnImage)
        );
        assert_eq!(ImageRejection::TooLarge { max_bytes: max }.title(), "图片过大");
    }

    #[test]
    fn test_too_large_message_follows_configured_limit() {
        let rejection = ImageRejection::TooLarge { max_bytes: 5 * 1024 * 1024 };
        assert_eq!(rejection.to_string(), "请选择小于 5MB 的图片");
        let rejection = check_image(&candidate(3_000_000, "image/png"), 2 * 1024 * 1024);
        assert_eq!(
            rejection.map_err(|r| r.to_string()),
            Err("请选择小于 2MB 的图片".to_string())
        );
        let rejection = ImageRejection::TooLarge { max_bytes: 1_500 };
        assert_eq!(rejection.to_string(), "请选择小于 2KB 的图片");
    }

    #[test]
    fn test_object_path() {
        let id = Uuid::nil();
        assert_eq!(
            object_path("shelf.photo.JPG", id),
            "00000000-0000-0000-0000-000000000000.JPG"
        );
        assert_eq!(
            object_path("noext", id),
            "00000000-0000-0000-0000-000000000000.noext"
        );
    }
}
