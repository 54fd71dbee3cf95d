//! Serde format for tournament start times: `YYYY-MM-DDTHH:MM`, seconds optional.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer};

const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";
const SECOND_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let format = if value.second() == 0 {
        MINUTE_FORMAT
    } else {
        SECOND_FORMAT
    };
    serializer.serialize_str(&value.format(format).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}

/// Parse a start time with or without seconds.
pub fn parse(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, MINUTE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, SECOND_FORMAT))
}
