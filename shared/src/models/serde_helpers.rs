//! Serde helpers for timestamps
//!
//! Timestamps are stored as UTC milliseconds (`INTEGER` columns) and sent to
//! the front end as RFC 3339 strings.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer, de};

fn to_rfc3339(millis: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn from_rfc3339<E: de::Error>(value: &str) -> Result<i64, E> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.timestamp_millis())
        .map_err(|e| E::custom(format!("invalid RFC 3339 timestamp '{}': {}", value, e)))
}

/// `i64` millis <-> RFC 3339 string
pub mod millis_rfc3339 {
    use super::*;

    pub fn serialize<S>(millis: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match to_rfc3339(*millis) {
            Some(s) => serializer.serialize_str(&s),
            None => serializer.serialize_i64(*millis),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        from_rfc3339(&s)
    }
}

/// `Option<i64>` millis <-> RFC 3339 string or null
pub mod millis_rfc3339_option {
    use super::*;

    pub fn serialize<S>(millis: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match millis {
            Some(m) => super::millis_rfc3339::serialize(m, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| from_rfc3339(&s))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Stamp {
        #[serde(with = "super::millis_rfc3339")]
        at: i64,
        #[serde(with = "super::millis_rfc3339_option")]
        maybe: Option<i64>,
    }

    #[test]
    fn test_serializes_as_utc_string() {
        let stamp = Stamp {
            at: 1_700_000_000_123,
            maybe: None,
        };
        let json = serde_json::to_value(&stamp).unwrap();
        assert_eq!(json["at"], "2023-11-14T22:13:20.123Z");
        assert!(json["maybe"].is_null());
    }

    #[test]
    fn test_parses_offset_timestamps() {
        let stamp: Stamp = serde_json::from_str(
            r#"{"at":"2023-11-14T18:13:20.123-04:00","maybe":"2023-11-14T22:13:20Z"}"#,
        )
        .unwrap();
        assert_eq!(stamp.at, 1_700_000_000_123);
        assert_eq!(stamp.maybe, Some(1_700_000_000_000));
    }
}
