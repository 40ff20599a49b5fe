use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::{Result, WrapErr};
use qr_attendance_core::{models::attendance::AttendanceRecord, store::AttendanceStore};
use tracing::debug;

use crate::models::{COLUMNS, DbAttendanceRow};

/// Attendance sheet kept in a single CSV file.
///
/// Every append reads the whole file, adds the row and writes the whole file
/// back. Two writers racing on the same file can lose each other's rows.
#[derive(Debug, Clone)]
pub struct CsvAttendanceStore {
    path: PathBuf,
}

impl CsvAttendanceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_records(&self) -> Result<Vec<AttendanceRecord>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e)
                    .wrap_err_with(|| format!("Failed to read {}", self.path.display()));
            }
        };

        let records = decode_csv(&bytes)
            .wrap_err_with(|| format!("Malformed attendance file {}", self.path.display()))?;
        debug!(path = %self.path.display(), count = records.len(), "Read attendance file");

        Ok(records)
    }

    async fn write_records(&self, records: &[AttendanceRecord]) -> Result<()> {
        tokio::fs::write(&self.path, encode_csv(records)?)
            .await
            .wrap_err_with(|| format!("Failed to write {}", self.path.display()))?;
        debug!(path = %self.path.display(), count = records.len(), "Rewrote attendance file");

        Ok(())
    }
}

#[async_trait]
impl AttendanceStore for CsvAttendanceStore {
    async fn append(&self, record: AttendanceRecord) -> Result<()> {
        let mut records = self.read_records().await?;
        records.push(record);
        self.write_records(&records).await
    }

    async fn find_duplicate(
        &self,
        email: &str,
        day: NaiveDate,
    ) -> Result<Option<AttendanceRecord>> {
        let records = self.read_records().await?;

        Ok(records
            .into_iter()
            .find(|record| record.matches_email(email) && record.timestamp.date() == day))
    }

    async fn list_all(&self) -> Result<Vec<AttendanceRecord>> {
        self.read_records().await
    }
}

/// Serializes records as a CSV sheet. The header row is always present.
pub fn encode_csv(records: &[AttendanceRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(DbAttendanceRow::from(record))?;
    }

    writer
        .into_inner()
        .map_err(|e| eyre::eyre!("Error flushing CSV output: {}", e))
}

/// Parses a CSV sheet with a `Name,Email,Timestamp` header.
/// An empty input has no records.
pub fn decode_csv(bytes: &[u8]) -> Result<Vec<AttendanceRecord>> {
    let mut reader = csv::Reader::from_reader(bytes);

    reader
        .deserialize::<DbAttendanceRow>()
        .map(|row| row.map(AttendanceRecord::from).map_err(eyre::Report::from))
        .collect()
}
