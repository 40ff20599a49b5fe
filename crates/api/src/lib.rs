//! # QR Attendance API
//!
//! The web server for QR-code attendance check-in. It shows the rotating QR
//! code, accepts check-ins from people who scanned it and offers the
//! attendance sheet for download.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: The slot key guard and error mapping
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework; records live behind the
//! `AttendanceStore` trait from the core crate.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for key checks and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{Router, http::HeaderValue};
use eyre::Result;
use qr_attendance_core::{
    clock::Clock, issuer::KeyIssuer, recorder::AttendanceRecorder, store::AttendanceStore,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Writes and reads attendance records
    pub recorder: AttendanceRecorder,
    /// Issues the current QR ticket and checks submitted keys
    pub issuer: KeyIssuer,
}

impl ApiState {
    /// Wires the recorder and issuer to one store and one clock
    pub fn new(
        config: &config::ApiConfig,
        store: Arc<dyn AttendanceStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            recorder: AttendanceRecorder::new(store, clock.clone()),
            issuer: KeyIssuer::new(config.base_url.clone(), config.slot_interval, clock),
        }
    }
}

/// Builds the application router with all routes attached to `state`
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Current QR code endpoints
        .merge(routes::qr::routes())
        // Check-in, listing and export endpoints
        .merge(routes::attendance::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration, store and clock
///
/// This function initializes logging, configures routes and middleware,
/// and serves HTTP until the process is stopped.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and QR settings
/// * `store` - Where attendance records are kept
/// * `clock` - Source of wall-clock time for keys and timestamps
pub async fn start_server(
    config: config::ApiConfig,
    store: Arc<dyn AttendanceStore>,
    clock: Arc<dyn Clock>,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState::new(&config, store, clock));
    let app = build_router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let allowed = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect::<Vec<_>>();

        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT])
            .allow_origin(allowed);

        app.layer(cors)
    } else {
        app
    };

    // Request tracing and timeout
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(
        base_url = %config.base_url,
        timezone = %config.timezone,
        interval_minutes = config.slot_interval.minutes(),
        "Server listening on http://{}",
        addr
    );
    axum::serve(listener, app).await?;

    Ok(())
}
