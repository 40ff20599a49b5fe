use axum::{Json, extract::State, http::header, response::IntoResponse};
use eyre::{Result, WrapErr};
use qr_attendance_core::models::qr::QrTicket;
use qrcode::{QrCode, render::svg};
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

const QR_MIN_SIZE: u32 = 320;

/// Key, link and validity window of the QR code on display right now
#[axum::debug_handler]
pub async fn current_ticket(State(state): State<Arc<ApiState>>) -> Json<QrTicket> {
    Json(state.issuer.current_ticket())
}

/// The current QR code as an SVG image
#[axum::debug_handler]
pub async fn current_qr_svg(
    State(state): State<Arc<ApiState>>,
) -> Result<impl IntoResponse, AppError> {
    let ticket = state.issuer.current_ticket();
    let svg = render_svg(&ticket.url)?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "no-store"),
        ],
        svg,
    ))
}

/// Encodes `payload` as a black-on-white QR code in SVG form
pub fn render_svg(payload: &str) -> Result<String> {
    let code = QrCode::new(payload.as_bytes()).wrap_err("Error encoding QR payload")?;

    Ok(code
        .render::<svg::Color>()
        .min_dimensions(QR_MIN_SIZE, QR_MIN_SIZE)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}
