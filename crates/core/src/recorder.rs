use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    clock::{Clock, truncate_to_second},
    errors::{AttendError, AttendResult},
    models::attendance::{AttendanceRecord, normalize_email},
    store::AttendanceStore,
};

/// Result of a well-formed submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// A new record was written
    Recorded(AttendanceRecord),
    /// Nothing was written; this is the record already on file for today
    Duplicate(AttendanceRecord),
}

/// Accepts attendance submissions and writes them to a store, at most one
/// per email per calendar day.
#[derive(Clone)]
pub struct AttendanceRecorder {
    store: Arc<dyn AttendanceStore>,
    clock: Arc<dyn Clock>,
}

impl AttendanceRecorder {
    pub fn new(store: Arc<dyn AttendanceStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Records attendance for `name`/`email` unless the same email (ignoring
    /// case) already checked in today.
    ///
    /// # Errors
    ///
    /// * `AttendError::Validation` if either field is blank after trimming
    /// * `AttendError::Storage` if the store cannot be read or written
    pub async fn record_attendance(&self, name: &str, email: &str) -> AttendResult<RecordOutcome> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(AttendError::Validation(
                "Please fill in both Name and Email".to_string(),
            ));
        }

        let now = truncate_to_second(self.clock.now());
        let normalized = normalize_email(email);

        if let Some(existing) = self.store.find_duplicate(&normalized, now.date()).await? {
            warn!(email = %normalized, "Attendance already recorded today");
            return Ok(RecordOutcome::Duplicate(existing));
        }

        let record = AttendanceRecord {
            name: name.to_string(),
            email: email.to_string(),
            timestamp: now,
        };
        self.store.append(record.clone()).await?;
        info!(email = %normalized, timestamp = %record.timestamp, "Attendance recorded");

        Ok(RecordOutcome::Recorded(record))
    }

    pub async fn list_records(&self) -> AttendResult<Vec<AttendanceRecord>> {
        Ok(self.store.list_all().await?)
    }
}
