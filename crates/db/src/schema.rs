use std::path::Path;

use eyre::{Result, WrapErr};
use tracing::info;

use crate::repositories::attendance::encode_csv;

/// Makes sure the attendance file exists, writing a header-only sheet if not.
/// An existing file is left untouched.
pub async fn initialize_store(path: &Path) -> Result<()> {
    if tokio::fs::try_exists(path)
        .await
        .wrap_err_with(|| format!("Failed to inspect {}", path.display()))?
    {
        info!(path = %path.display(), "Using existing attendance file");
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
    }

    tokio::fs::write(path, encode_csv(&[])?)
        .await
        .wrap_err_with(|| format!("Failed to create {}", path.display()))?;

    info!(path = %path.display(), "Attendance file initialized");
    Ok(())
}
