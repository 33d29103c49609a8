//! Field validation for form submissions
//!
//! Forms are validated locally before any request leaves the client.
//! Each failed rule is recorded against its field so the UI can render
//! the message inline next to the input.

use std::collections::BTreeMap;
use std::fmt;

/// Validation rules for a single form field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub non_negative: bool,
    pub email: bool,
}

impl ValidationRules {
    /// No constraints, the field is optional
    pub const fn none() -> Self {
        Self {
            required: false,
            non_negative: false,
            email: false,
        }
    }

    /// Field must contain non-whitespace text
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    /// Numeric field that may not go below zero
    pub const fn non_negative() -> Self {
        Self {
            non_negative: true,
            ..Self::none()
        }
    }

    /// Optional e-mail: empty is accepted, anything else must look like an address
    pub const fn optional_email() -> Self {
        Self {
            email: true,
            ..Self::none()
        }
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if self.required && trimmed.is_empty() {
            return Err(format!("{}不能为空", field_label));
        }

        if self.email && !trimmed.is_empty() && !is_valid_email(trimmed) {
            return Err("请输入有效的邮箱地址".to_string());
        }

        Ok(())
    }

    /// Validate a numeric value against the rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if !value.is_finite() {
            return Err(format!("{}必须是数字", field_label));
        }
        if self.non_negative && value < 0.0 {
            return Err(format!("{}不能为负", field_label));
        }
        Ok(())
    }
}

/// Per-field validation failures, ordered by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure; the first message for a field wins
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    /// Record the outcome of a rule check
    pub fn check(&mut self, field: &str, result: Result<(), String>) {
        if let Err(message) = result {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.fields.values().map(String::as_str).collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Loose address check: one `@`, non-empty local part, dotted domain, no whitespace
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|l| !l.is_empty())
}

/// Blank optional inputs are stored as `null`
pub fn none_if_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Numeric input parsing: unparsable text counts as zero
pub fn parse_amount(input: &str) -> f64 {
    input.trim().parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rule() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("   ", "商品名称"),
            Err("商品名称不能为空".to_string())
        );
        assert!(rules.validate_string("Чай", "商品名称").is_ok());
    }

    #[test]
    fn test_non_negative_rule() {
        let rules = ValidationRules::non_negative();
        assert_eq!(
            rules.validate_number(-1.0, "售价"),
            Err("售价不能为负".to_string())
        );
        assert!(rules.validate_number(0.0, "售价").is_ok());
        assert!(rules.validate_number(f64::NAN, "售价").is_err());
    }

    #[test]
    fn test_optional_email_rule() {
        let rules = ValidationRules::optional_email();
        assert!(rules.validate_string("", "邮箱").is_ok());
        assert!(rules.validate_string("sales@example.com", "邮箱").is_ok());
        assert_eq!(
            rules.validate_string("not-an-email", "邮箱"),
            Err("请输入有效的邮箱地址".to_string())
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a@b..co"));
    }

    #[test]
    fn test_errors_keep_first_message() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "first");
        errors.add("name", "second");
        errors.check("sku", Ok(()));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("first"));
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_blank_and_amount_helpers() {
        assert_eq!(none_if_blank("  "), None);
        assert_eq!(none_if_blank(" x "), Some("x".to_string()));
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount("abc"), 0.0);
    }
}
