use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

use crate::server::error::{internal::InternalError, AppError};

/// Parses a stored enumeration column into its domain enum.
///
/// # Arguments
/// - `field` - Column name, used in the error
/// - `value` - The stored string
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(AppError::Internal(InvalidStoredValue))` - No variant matches the stored string
pub fn parse_stored<T>(field: &'static str, value: &str) -> Result<T, AppError>
where
    T: FromStr,
{
    value.parse::<T>().map_err(|_| {
        InternalError::InvalidStoredValue {
            field,
            value: value.to_string(),
        }
        .into()
    })
}

/// Parses a date sent by a client or the discovery service.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_date_time(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parses a date-only value, also accepting an RFC 3339 timestamp and keeping its date part.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Reads a JSON array column as a list of strings, skipping non-string items.
pub fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Extracts a numeric amount from a number or from text like `"1,181 (Monthly Allowance)"`.
///
/// For text, the first run of digits and commas is taken and the commas dropped. Returns
/// `None` when nothing numeric can be recovered.
pub fn parse_amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let start = text.find(|c: char| c.is_ascii_digit() || c == ',')?;
            let run: String = text[start..]
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == ',')
                .filter(|c| *c != ',')
                .collect();
            run.parse::<f64>().ok()
        }
        _ => None,
    }
}

/// Checks that a value is an absolute `http`/`https` URL.
pub fn is_http_url(value: &str) -> bool {
    url::Url::parse(value)
        .map(|parsed| matches!(parsed.scheme(), "http" | "https") && parsed.has_host())
        .unwrap_or(false)
}
