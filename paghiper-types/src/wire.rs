//! Lenient decoders for the provider's response fields.
//!
//! Timestamps come as `YYYY-MM-DD HH:MM:SS`, dates as `YYYY-MM-DD`, and
//! amounts either as numbers or numeric strings. RFC 3339 is accepted too.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_datetime(raw).map(|dt| dt.date()))
}

fn non_blank<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

pub(crate) fn datetime<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error> {
    match non_blank(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_datetime(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}"))),
    }
}

pub(crate) fn date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error> {
    match non_blank(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_date(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid date: {raw}"))),
    }
}

/// Treats an explicit `null` like a missing field.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Cents {
    Number(i64),
    Text(String),
}

pub(crate) fn cents<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    match Option::<Cents>::deserialize(deserializer)? {
        None => Ok(0),
        Some(Cents::Number(n)) => Ok(n),
        Some(Cents::Text(s)) if s.trim().is_empty() => Ok(0),
        Some(Cents::Text(s)) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("invalid cents amount: {s}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "datetime")]
        at: Option<NaiveDateTime>,
        #[serde(default, deserialize_with = "date")]
        on: Option<NaiveDate>,
        #[serde(default, deserialize_with = "cents")]
        value: i64,
    }

    #[test]
    fn test_provider_formats() {
        let probe: Probe = serde_json::from_str(
            r#"{"at": "2024-05-10 14:03:22", "on": "2024-05-15", "value": "1000"}"#,
        )
        .unwrap();
        assert_eq!(
            probe.at.unwrap().to_string(),
            "2024-05-10 14:03:22"
        );
        assert_eq!(probe.on.unwrap().to_string(), "2024-05-15");
        assert_eq!(probe.value, 1000);
    }

    #[test]
    fn test_rfc3339_and_numbers() {
        let probe: Probe = serde_json::from_str(
            r#"{"at": "2024-05-10T14:03:22-03:00", "on": "2024-05-15 00:00:00", "value": 250}"#,
        )
        .unwrap();
        assert_eq!(probe.at.unwrap().to_string(), "2024-05-10 14:03:22");
        assert_eq!(probe.on.unwrap().to_string(), "2024-05-15");
        assert_eq!(probe.value, 250);
    }

    #[test]
    fn test_missing_and_blank() {
        let probe: Probe = serde_json::from_str(r#"{"at": "", "on": null}"#).unwrap();
        assert!(probe.at.is_none());
        assert!(probe.on.is_none());
        assert_eq!(probe.value, 0);
    }

    #[test]
    fn test_null_reads_as_default() {
        #[derive(Deserialize)]
        struct Text {
            #[serde(default, deserialize_with = "null_default")]
            name: String,
        }

        let text: Text = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(text.name, "");
        let text: Text = serde_json::from_str(r#"{"name": "Maria"}"#).unwrap();
        assert_eq!(text.name, "Maria");
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(serde_json::from_str::<Probe>(r#"{"at": "yesterday"}"#).is_err());
        assert!(serde_json::from_str::<Probe>(r#"{"value": "ten"}"#).is_err());
    }
}
