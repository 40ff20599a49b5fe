use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use qr_attendance_api::middleware::error_handling::AppError;
use qr_attendance_core::errors::AttendError;
use serde_json::Value;

async fn error_body(error: AttendError) -> (StatusCode, Value) {
    let response = AppError(error).into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_error_handling_validation() {
    let (status, body) = error_body(AttendError::Validation("Invalid input".to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation error: Invalid input");
}

#[tokio::test]
async fn test_error_handling_authorization() {
    let (status, body) = error_body(AttendError::Authorization("Key expired".to_string())).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Access denied: Key expired");
}

#[tokio::test]
async fn test_error_handling_configuration() {
    let (status, _) = error_body(AttendError::Configuration("Bad interval".to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_handling_storage() {
    let (status, body) = error_body(AttendError::Storage(eyre::eyre!("Disk full"))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("Disk full"));
}

#[test]
fn test_eyre_report_becomes_storage_error() {
    let AppError(inner) = AppError::from(eyre::eyre!("attendance file unreadable"));

    assert!(matches!(inner, AttendError::Storage(_)));
}
