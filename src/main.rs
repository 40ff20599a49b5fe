use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use qr_attendance_api::config::ApiConfig;
use qr_attendance_core::clock::SystemClock;
use qr_attendance_db::open_store;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Open the attendance sheet, creating it on first run
    let store = open_store(&config.attendance_file).await?;

    let clock = SystemClock::new(config.timezone);

    // Start API server
    qr_attendance_api::start_server(config, Arc::new(store), Arc::new(clock)).await?;

    Ok(())
}
