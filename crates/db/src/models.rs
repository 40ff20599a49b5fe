use chrono::NaiveDateTime;
use qr_attendance_core::models::attendance::AttendanceRecord;
use serde::{Deserialize, Serialize};

/// Column names of the attendance sheet, in order
pub const COLUMNS: [&str; 3] = ["Name", "Email", "Timestamp"];

/// One row of the attendance sheet as it appears on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbAttendanceRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(
        rename = "Timestamp",
        with = "qr_attendance_core::models::attendance::timestamp_format"
    )]
    pub timestamp: NaiveDateTime,
}

impl From<DbAttendanceRow> for AttendanceRecord {
    fn from(row: DbAttendanceRow) -> Self {
        Self {
            name: row.name,
            email: row.email,
            timestamp: row.timestamp,
        }
    }
}

impl From<&AttendanceRecord> for DbAttendanceRow {
    fn from(record: &AttendanceRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            timestamp: record.timestamp,
        }
    }
}
