//! Lenient deserializers for Atlas fields whose format drifts.
//!
//! Atlas documents are loosely typed across API versions: counters arrive as
//! numbers or strings, timestamps with or without fractional seconds, and
//! some optional fields hold values that are not what their name suggests.
//! The helpers here decode what they can and turn the rest into `None`
//! instead of failing the whole document.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use std::net::IpAddr;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    U64(u64),
    I64(i64),
    F64(f64),
}

/// Parse an Atlas timestamp: RFC 3339, or `YYYY-MM-DDTHH:MM:SSZ` without offset.
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw.trim_end_matches('Z'), "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// `Option<DateTime<Utc>>` that yields `None` for unparsable values.
pub fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| v.as_str()).and_then(parse_datetime))
}

/// `Option<u64>` from a number or numeric string; anything else is `None`.
pub fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer).unwrap_or(None);
    Ok(match value {
        None => None,
        Some(StringOrNumber::U64(v)) => Some(v),
        Some(StringOrNumber::I64(v)) => u64::try_from(v).ok(),
        Some(StringOrNumber::F64(v)) if v >= 0.0 && v.fract() == 0.0 => Some(v as u64),
        Some(StringOrNumber::F64(_)) => None,
        Some(StringOrNumber::String(s)) => s.trim().parse().ok(),
    })
}

/// `Option<IpAddr>` that yields `None` for values that are not an address.
pub fn lenient_ip<'de, D>(deserializer: D) -> Result<Option<IpAddr>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(|s| s.trim().parse().ok()))
}

/// Serialize an optional timestamp the way Atlas writes them.
pub fn serialize_opt_datetime<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match value {
        Some(dt) => serializer.serialize_str(&format_datetime(dt)),
        None => serializer.serialize_none(),
    }
}

/// `2021-03-02T18:11:46Z`
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
