use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;

use crate::models::attendance::AttendanceRecord;

/// Durable home of attendance records.
///
/// Implementations make no promises about concurrent writers.
#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// Persists a new record after all existing ones
    async fn append(&self, record: AttendanceRecord) -> Result<()>;

    /// Finds a record for `email` (already normalized) stamped on `day`
    async fn find_duplicate(
        &self,
        email: &str,
        day: NaiveDate,
    ) -> Result<Option<AttendanceRecord>>;

    /// Every record, in the order it was written
    async fn list_all(&self) -> Result<Vec<AttendanceRecord>>;
}
