//! # Slot Key Guard
//!
//! Attendance endpoints are only reachable through the QR code currently on
//! display. The `CurrentSlot` extractor reads the `key` query parameter and
//! rejects the request with 403 unless it matches the current slot.
//!
//! A mismatch always blocks; there is no mode that warns and lets the
//! submission through.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use qr_attendance_core::slot::SlotKey;
use serde::Deserialize;

use crate::{ApiState, middleware::error_handling::AppError};

#[derive(Debug, Deserialize)]
struct KeyQuery {
    key: Option<String>,
}

/// Proof that the request carried the key of the current slot
#[derive(Debug, Clone)]
pub struct CurrentSlot(pub SlotKey);

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for CurrentSlot {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        // A query string that does not parse (e.g. a repeated `key`) carries no usable key
        let supplied = Query::<KeyQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(query)| query.key);

        let key = state.issuer.authorize(supplied.as_deref())?;
        Ok(CurrentSlot(key))
    }
}
