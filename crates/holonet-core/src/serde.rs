//! Serde helpers shared by record types.
//!
//! Referenced from field attributes, e.g.
//! `#[serde(serialize_with = "holonet_core::serde::to_rfc3339_ms")]`.

use ::serde::Serializer;
use chrono::{DateTime, SecondsFormat, Utc};

/// `2024-05-04T12:00:00.000Z`: UTC, `Z` suffix, always three fractional digits.
pub fn to_rfc3339_ms<S>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let formatted = at.to_rfc3339_opts(SecondsFormat::Millis, true);
    serializer.serialize_str(&formatted)
}
