/// Timestamp formatting for admin tables
use chrono::{DateTime, NaiveDate};

/// Format an RFC 3339 timestamp as `YYYY-MM-DD HH:MM` (UTC)
/// Example: "2025-08-15T14:02:26.123456+00:00" -> "2025-08-15 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str.trim()) {
        Ok(dt) => dt.naive_utc().format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => format_date(datetime_str),
    }
}

/// Date part of an ISO string, the input unchanged when it has none
/// Example: "2025-08-15T14:02:26Z" -> "2025-08-15"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.trim().split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// `-` for a missing timestamp
pub fn format_optional(datetime_str: Option<&str>) -> String {
    datetime_str
        .filter(|s| !s.trim().is_empty())
        .map(format_datetime)
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2025-08-15T14:02:26.123456+00:00"),
            "2025-08-15 14:02"
        );
        assert_eq!(format_datetime("2025-08-15T16:30:00+02:00"), "2025-08-15 14:30");
    }

    #[test]
    fn test_format_date_fallbacks() {
        assert_eq!(format_datetime("2025-08-15"), "2025-08-15");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_optional(None), "-");
        assert_eq!(format_optional(Some("")), "-");
    }
}
