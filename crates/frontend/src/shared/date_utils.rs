/// Utilities for date and time formatting
///
/// Backend timestamps arrive as RFC 3339 strings ("2024-03-15T14:02:26.123+00:00").
use chrono::{DateTime, Local, NaiveDate};

/// Format a timestamp as a Chinese long date
/// Example: "2024-03-15T14:02:26.123Z" -> "2024年03月15日"
pub fn format_cn_date(datetime_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.with_timezone(&Local).format("%Y年%m月%d日").to_string();
    }
    let date_part = datetime_str.split('T').next().unwrap_or(datetime_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%Y年%m月%d日").to_string(),
        Err(_) => "未知".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cn_date_plain_date() {
        assert_eq!(format_cn_date("2024-03-05"), "2024年03月05日");
    }

    #[test]
    fn test_format_cn_date_timestamp() {
        // midday UTC stays on the same calendar day in any timezone within ±11h
        assert_eq!(format_cn_date("2024-03-15T12:00:00+00:00"), "2024年03月15日");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_cn_date("invalid"), "未知");
    }
}
