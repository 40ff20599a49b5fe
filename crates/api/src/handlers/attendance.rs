//! # Attendance Handlers
//!
//! Submission, listing and export of attendance records. Submission and the
//! access check sit behind the `CurrentSlot` guard; listing and export do not.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use qr_attendance_core::{
    models::attendance::{
        AccessResponse, AttendanceRecord, SubmissionStatus, SubmitAttendanceRequest,
        SubmitAttendanceResponse,
    },
    recorder::RecordOutcome,
};
use qr_attendance_db::repositories::attendance::encode_csv;
use std::sync::Arc;

use crate::{
    ApiState,
    middleware::{error_handling::AppError, slot_guard::CurrentSlot},
};

/// File name offered to browsers for the export
pub const EXPORT_FILE_NAME: &str = "attendance.csv";

/// Tells a scanner whether its key still opens the form
///
/// # Endpoint
///
/// ```text
/// GET /api/attendance/access?key=202503141435
/// ```
pub async fn check_access(CurrentSlot(key): CurrentSlot) -> Json<AccessResponse> {
    Json(AccessResponse {
        authorized: true,
        key: key.to_string(),
    })
}

/// Records attendance for the submitted name and email
///
/// Returns 201 when a record was written and 200 with status `duplicate`
/// when the email already checked in today.
#[axum::debug_handler]
pub async fn submit_attendance(
    State(state): State<Arc<ApiState>>,
    CurrentSlot(_key): CurrentSlot,
    Json(payload): Json<SubmitAttendanceRequest>,
) -> Result<(StatusCode, Json<SubmitAttendanceResponse>), AppError> {
    let outcome = state
        .recorder
        .record_attendance(&payload.name, &payload.email)
        .await?;

    let (status, response) = match outcome {
        RecordOutcome::Recorded(record) => (
            StatusCode::CREATED,
            SubmitAttendanceResponse {
                status: SubmissionStatus::Recorded,
                message: format!(
                    "Attendance marked successfully for {} at {}",
                    record.name,
                    record.timestamp.format("%I:%M %p")
                ),
                record,
            },
        ),
        RecordOutcome::Duplicate(record) => (
            StatusCode::OK,
            SubmitAttendanceResponse {
                status: SubmissionStatus::Duplicate,
                message: format!(
                    "Attendance for {} was already marked today at {}",
                    record.email,
                    record.timestamp.format("%I:%M %p")
                ),
                record,
            },
        ),
    };

    Ok((status, Json(response)))
}

#[axum::debug_handler]
pub async fn list_records(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<AttendanceRecord>>, AppError> {
    let records = state.recorder.list_records().await?;
    Ok(Json(records))
}

/// Offers the whole attendance sheet as a CSV download
#[axum::debug_handler]
pub async fn export_records(
    State(state): State<Arc<ApiState>>,
) -> Result<impl IntoResponse, AppError> {
    let records = state.recorder.list_records().await?;
    let body = encode_csv(&records)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ),
        ],
        body,
    ))
}
