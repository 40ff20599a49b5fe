pub mod models;
pub mod repositories;
pub mod schema;

pub mod mock;

use std::path::Path;

use eyre::Result;

pub use repositories::attendance::CsvAttendanceStore;

/// Opens the attendance file at `path`, creating it with a header row first
/// if it does not exist yet.
pub async fn open_store(path: impl AsRef<Path>) -> Result<CsvAttendanceStore> {
    let path = path.as_ref();
    schema::initialize_store(path).await?;

    Ok(CsvAttendanceStore::new(path))
}
