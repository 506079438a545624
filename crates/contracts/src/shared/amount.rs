//! Decimal amounts arrive either as JSON numbers or as DRF decimal strings
//! (`"1500.00"`). Both decode into `f64`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

fn parse(raw: RawAmount) -> Result<f64, String> {
    match raw {
        RawAmount::Number(n) => Ok(n),
        RawAmount::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(0.0);
            }
            trimmed
                .parse::<f64>()
                .map_err(|e| format!("invalid amount '{}': {}", s, e))
        }
    }
}

pub fn de_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawAmount::deserialize(deserializer)?;
    parse(raw).map_err(serde::de::Error::custom)
}

pub fn de_amount_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawAmount> = Option::deserialize(deserializer)?;
    raw.map(parse).transpose().map_err(serde::de::Error::custom)
}

/// Parses an amount typed by an operator; accepts a decimal comma and
/// grouping spaces ("1 500,50").
pub fn parse_decimal(input: &str) -> Option<f64> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Currency of every amount handled by the platform.
pub const CURRENCY: &str = "FCFA";

/// [`format_amount`] in the platform currency.
pub fn format_money(value: f64) -> String {
    format_amount(value, CURRENCY)
}

/// Formats an amount the way the dashboard shows money: space-grouped
/// thousands and the currency suffix, e.g. `1 500 FCFA`.
pub fn format_amount(value: f64, currency: &str) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    let sign = if rounded < 0 { "-" } else { "" };
    if currency.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{} {}", sign, grouped, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Row {
        #[serde(deserialize_with = "de_amount")]
        amount: f64,
        #[serde(default, deserialize_with = "de_amount_opt")]
        fee: Option<f64>,
    }

    #[test]
    fn test_decode_string_and_number() {
        let row: Row = serde_json::from_str(r#"{"amount": "1500.50", "fee": 25}"#).unwrap();
        assert_eq!(row.amount, 1500.5);
        assert_eq!(row.fee, Some(25.0));

        let row: Row = serde_json::from_str(r#"{"amount": 10}"#).unwrap();
        assert_eq!(row.amount, 10.0);
        assert_eq!(row.fee, None);

        let row: Row = serde_json::from_str(r#"{"amount": "3", "fee": null}"#).unwrap();
        assert_eq!(row.fee, None);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(serde_json::from_str::<Row>(r#"{"amount": "abc"}"#).is_err());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0, "FCFA"), "0 FCFA");
        assert_eq!(format_amount(999.0, "FCFA"), "999 FCFA");
        assert_eq!(format_amount(1500.0, "FCFA"), "1 500 FCFA");
        assert_eq!(format_amount(1234567.4, ""), "1 234 567");
        assert_eq!(format_amount(-2500.0, "XOF"), "-2 500 XOF");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("1500"), Some(1500.0));
        assert_eq!(parse_decimal(" 1 500,50 "), Some(1500.5));
        assert_eq!(parse_decimal("2.5"), Some(2.5));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("inf"), None);
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(25000.0), "25 000 FCFA");
    }
}
