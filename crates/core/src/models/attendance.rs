use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format used for attendance timestamps in storage, exports and JSON
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single recorded check-in.
///
/// `timestamp` is the wall-clock moment the submission was accepted, at
/// second precision. Records are never mutated once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub name: String,
    pub email: String,
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
}

impl AttendanceRecord {
    /// Whether this record belongs to `normalized_email` (already lower-cased)
    pub fn matches_email(&self, normalized_email: &str) -> bool {
        normalize_email(&self.email) == normalized_email
    }
}

/// Lower-cased, trimmed form of an email used only for comparisons
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// A missing field reads as empty so it fails the same blank-field check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAttendanceRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Recorded,
    Duplicate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAttendanceResponse {
    pub status: SubmissionStatus,
    pub message: String,
    /// The new record, or the earlier record that made this one a duplicate
    pub record: AttendanceRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessResponse {
    pub authorized: bool,
    pub key: String,
}

pub mod timestamp_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
