use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use qr_attendance_core::{models::attendance::AttendanceRecord, store::AttendanceStore};

// Mock store for testing code that sits on top of the recorder
mock! {
    pub AttendanceRepo {}

    #[async_trait]
    impl AttendanceStore for AttendanceRepo {
        async fn append(&self, record: AttendanceRecord) -> eyre::Result<()>;

        async fn find_duplicate(
            &self,
            email: &str,
            day: NaiveDate,
        ) -> eyre::Result<Option<AttendanceRecord>>;

        async fn list_all(&self) -> eyre::Result<Vec<AttendanceRecord>>;
    }
}
