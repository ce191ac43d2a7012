//! Shared serde helpers for metadata documents.

/// Timestamp format used by the metadata files and the SQL output.
pub const TIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// (De)serialize a `NaiveDateTime` as `YYYY-MM-DD HH:MM:SS`.
pub mod syntool_datetime {
    use super::TIME_FMT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIME_FMT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIME_FMT).map_err(|e| {
            serde::de::Error::custom(format!("invalid datetime '{s}' (expected {TIME_FMT}): {e}"))
        })
    }
}
