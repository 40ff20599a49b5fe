//! # API Configuration Module
//!
//! This module loads configuration for the attendance server from environment
//! variables and provides defaults where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `ATTENDANCE_BASE_URL`: Public URL encoded into QR codes (default: "http://localhost:3000")
//! - `ATTENDANCE_FILE`: Path of the attendance CSV file (default: "attendance.csv")
//! - `ATTENDANCE_TIMEZONE`: IANA zone that defines wall-clock time (default: "UTC")
//! - `QR_CHANGE_INTERVAL_MINUTES`: Minutes each QR key stays valid (default: 5)

use chrono_tz::Tz;
use eyre::{Result, WrapErr, eyre};
use qr_attendance_core::slot::{DEFAULT_SLOT_MINUTES, SlotInterval};
use std::{env, path::PathBuf};
use tracing::Level;

/// Configuration for the attendance API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use qr_attendance_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Base of the URL encoded in the QR code; the key is appended as `?key=`
    pub base_url: String,

    /// Location of the attendance sheet
    pub attendance_file: PathBuf,

    /// Time zone whose wall clock defines slots and calendar days
    pub timezone: Tz,

    /// How long each QR key stays valid
    pub slot_interval: SlotInterval,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - ATTENDANCE_TIMEZONE is not a known IANA time zone
    /// - QR_CHANGE_INTERVAL_MINUTES is not a number that divides 60
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any name-to-value lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        // Network settings
        let host = var("API_HOST", "0.0.0.0");
        let port = var("API_PORT", "3000")
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Logging settings
        let log_level = match var("LOG_LEVEL", "info").as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        // Performance settings
        let request_timeout = var("API_REQUEST_TIMEOUT_SECONDS", "30")
            .parse()
            .unwrap_or(30);

        // Attendance settings
        let base_url = var("ATTENDANCE_BASE_URL", "http://localhost:3000");
        let attendance_file = PathBuf::from(var("ATTENDANCE_FILE", "attendance.csv"));

        let tz_name = var("ATTENDANCE_TIMEZONE", "UTC");
        let timezone = tz_name
            .parse::<Tz>()
            .map_err(|e| eyre!("Invalid ATTENDANCE_TIMEZONE {}: {}", tz_name, e))?;

        let minutes = var(
            "QR_CHANGE_INTERVAL_MINUTES",
            &DEFAULT_SLOT_MINUTES.to_string(),
        )
        .parse()
        .wrap_err("Invalid QR_CHANGE_INTERVAL_MINUTES value")?;
        let slot_interval =
            SlotInterval::new(minutes).wrap_err("Invalid QR_CHANGE_INTERVAL_MINUTES value")?;

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            base_url,
            attendance_file,
            timezone,
            slot_interval,
        })
    }

    /// Returns the server address as a string
    ///
    /// # Returns
    ///
    /// * `String` - Formatted server address (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
