//! Date formatting for tables and detail panels (French conventions).

use chrono::{DateTime, NaiveDate, NaiveDateTime};

fn parse(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// "2024-03-15T14:02:26.123Z" -> "15/03/2024 14:02"
pub fn format_datetime(value: &str) -> String {
    match parse(value) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => value.to_string(),
    }
}

/// "2024-03-15" or a full timestamp -> "15/03/2024"
pub fn format_date(value: &str) -> String {
    match parse(value) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => value.to_string(),
    }
}

/// Optional timestamps render as a dash when absent.
pub fn format_optional(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .map(format_datetime)
        .unwrap_or_else(|| "—".to_string())
}

/// Short day label for chart axes: "2024-05-03" -> "03/05"
pub fn day_label(value: &str) -> String {
    match parse(value) {
        Some(dt) => dt.format("%d/%m").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31/12/2024 23:59");
        assert_eq!(format_datetime("2024-12-31T23:59:59+01:00"), "31/12/2024 22:59");
        assert_eq!(format_datetime("2024-06-01T08:30:00"), "01/06/2024 08:30");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(day_label("2024-05-03"), "03/05");
    }

    #[test]
    fn test_invalid_and_missing() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_optional(None), "—");
        assert_eq!(format_optional(Some(" ")), "—");
    }
}
