//! Serde helpers for the JSON and query-string shapes the booking API uses.
//!
//! Opening hours travel as `"HH:MM"` strings, and form-like inputs send empty
//! strings for fields that were left blank.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serializer};

fn parse_time(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M").or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
}

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional NaiveDate, treating empty strings as None.
/// Expects format: YYYY-MM-DD
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// `NaiveTime` as `"HH:MM"`; `"HH:MM:SS"` is accepted on input.
pub mod hhmm {
    use super::*;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_time(s.trim()).map_err(serde::de::Error::custom)
    }
}

/// `Option<NaiveTime>` as `"HH:MM"`, with empty strings read as None.
pub mod optional_hhmm {
    use super::*;

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(time) => serializer.serialize_some(&time.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let s: Option<String> = Option::deserialize(deserializer)?;
        match s {
            Some(s) if !s.trim().is_empty() => parse_time(s.trim())
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_string")]
        string_field: Option<String>,
        #[serde(default, deserialize_with = "deserialize_optional_date")]
        date_field: Option<NaiveDate>,
        #[serde(default, with = "optional_hhmm")]
        time_field: Option<NaiveTime>,
    }

    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    struct Hours {
        #[serde(with = "hhmm")]
        opens_at: NaiveTime,
    }

    #[test]
    fn test_deserialize_optional_string_blank() {
        let result: TestStruct = serde_json::from_str(r#"{"string_field": "   "}"#).unwrap();
        assert_eq!(result.string_field, None);

        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.string_field, None);
    }

    #[test]
    fn test_deserialize_optional_string_value() {
        let result: TestStruct =
            serde_json::from_str(r#"{"string_field": "four players"}"#).unwrap();
        assert_eq!(result.string_field, Some("four players".to_string()));
    }

    #[test]
    fn test_deserialize_optional_date() {
        let result: TestStruct = serde_json::from_str(r#"{"date_field": "2025-01-15"}"#).unwrap();
        assert_eq!(
            result.date_field,
            Some(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
        );

        let result: TestStruct = serde_json::from_str(r#"{"date_field": ""}"#).unwrap();
        assert_eq!(result.date_field, None);

        let result: Result<TestStruct, _> = serde_json::from_str(r#"{"date_field": "15.1.2025"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_hhmm() {
        let result: TestStruct = serde_json::from_str(r#"{"time_field": "08:30"}"#).unwrap();
        assert_eq!(
            result.time_field,
            Some(NaiveTime::from_hms_opt(8, 30, 0).unwrap())
        );

        let result: TestStruct = serde_json::from_str(r#"{"time_field": ""}"#).unwrap();
        assert_eq!(result.time_field, None);

        let json = serde_json::to_value(&result).unwrap();
        assert!(json["time_field"].is_null());
    }

    #[test]
    fn test_hhmm_round_trip_format() {
        let hours: Hours = serde_json::from_str(r#"{"opens_at": "21:45:00"}"#).unwrap();
        assert_eq!(hours.opens_at, NaiveTime::from_hms_opt(21, 45, 0).unwrap());
        assert_eq!(
            serde_json::to_string(&hours).unwrap(),
            r#"{"opens_at":"21:45"}"#
        );
    }

    #[test]
    fn test_hhmm_rejects_garbage() {
        let result: Result<Hours, _> = serde_json::from_str(r#"{"opens_at": "25:00"}"#);
        assert!(result.is_err());
    }
}
