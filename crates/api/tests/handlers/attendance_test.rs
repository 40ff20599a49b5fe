use std::sync::Arc;

use axum::http::{StatusCode, header};
use pretty_assertions::assert_eq;
use qr_attendance_core::{
    models::attendance::{AttendanceRecord, SubmissionStatus, SubmitAttendanceResponse},
    slot::slot_key,
    store::AttendanceStore,
};
use qr_attendance_db::mock::repositories::MockAttendanceRepo;
use serde_json::{Value, json};

use crate::test_utils::{TestContext, server_with_store, test_now};

#[tokio::test]
async fn test_access_with_current_key() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .get("/api/attendance/access")
        .add_query_param("key", ctx.current_key())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "authorized": true, "key": "202503141435" })
    );
}

#[tokio::test]
async fn test_access_without_key_is_forbidden() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get("/api/attendance/access").await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    assert!(response.json::<Value>()["error"].is_string());
}

#[tokio::test]
async fn test_access_with_previous_slot_key_is_forbidden() {
    let ctx = TestContext::new().await;
    let stale = slot_key(test_now() - chrono::Duration::minutes(5));

    let response = ctx
        .server
        .get("/api/attendance/access")
        .add_query_param("key", stale)
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_submit_records_attendance() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/attendance")
        .add_query_param("key", ctx.current_key())
        .json(&json!({ "name": " Ada Lovelace ", "email": "Ada@Example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body = response.json::<SubmitAttendanceResponse>();
    assert_eq!(body.status, SubmissionStatus::Recorded);
    assert_eq!(body.message, "Attendance marked successfully for Ada Lovelace at 02:37 PM");

    let stored = ctx.store.list_all().await.unwrap();
    assert_eq!(
        stored,
        vec![AttendanceRecord {
            name: "Ada Lovelace".to_string(),
            email: "Ada@Example.com".to_string(),
            timestamp: test_now(),
        }]
    );
    assert_eq!(body.record, stored[0]);
}

#[tokio::test]
async fn test_submit_same_email_twice_is_duplicate() {
    let ctx = TestContext::new().await;

    let first = ctx
        .server
        .post("/api/attendance")
        .add_query_param("key", ctx.current_key())
        .json(&json!({ "name": "Ada Lovelace", "email": "ada@example.com" }))
        .await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = ctx
        .server
        .post("/api/attendance")
        .add_query_param("key", ctx.current_key())
        .json(&json!({ "name": "A. Lovelace", "email": "ADA@EXAMPLE.COM" }))
        .await;

    assert_eq!(second.status_code(), StatusCode::OK);
    let body = second.json::<SubmitAttendanceResponse>();
    assert_eq!(body.status, SubmissionStatus::Duplicate);
    assert_eq!(body.record.name, "Ada Lovelace");
    assert_eq!(ctx.store.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_submit_blank_name_is_rejected() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/attendance")
        .add_query_param("key", ctx.current_key())
        .json(&json!({ "name": "   ", "email": "ada@example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(ctx.store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_with_stale_key_writes_nothing() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/attendance")
        .add_query_param("key", "202503141430")
        .json(&json!({ "name": "Ada Lovelace", "email": "ada@example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    assert!(ctx.store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_records() {
    let ctx = TestContext::new().await;
    let record = AttendanceRecord {
        name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        timestamp: test_now(),
    };
    ctx.store.append(record.clone()).await.unwrap();

    let response = ctx.server.get("/api/attendance").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Vec<AttendanceRecord>>(), vec![record]);
}

#[tokio::test]
async fn test_export_offers_csv_download() {
    let ctx = TestContext::new().await;
    ctx.store
        .append(AttendanceRecord {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
            timestamp: test_now(),
        })
        .await
        .unwrap();

    let response = ctx.server.get("/api/attendance/export").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.header(header::CONTENT_DISPOSITION),
        "attachment; filename=\"attendance.csv\""
    );
    assert!(
        response
            .header(header::CONTENT_TYPE)
            .to_str()
            .unwrap()
            .starts_with("text/csv")
    );
    assert_eq!(
        response.text(),
        "Name,Email,Timestamp\nGrace Hopper,grace@example.com,2025-03-14 14:37:12\n"
    );
}

#[tokio::test]
async fn test_storage_failure_is_server_error() {
    let mut repo = MockAttendanceRepo::new();
    repo.expect_find_duplicate()
        .returning(|_, _| Err(eyre::eyre!("attendance file unreadable")));
    repo.expect_append().never();
    let server = server_with_store(Arc::new(repo));

    let response = server
        .post("/api/attendance")
        .add_query_param("key", slot_key(test_now()))
        .json(&json!({ "name": "Ada Lovelace", "email": "ada@example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_submit_missing_email_is_validation_error() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/attendance")
        .add_query_param("key", ctx.current_key())
        .json(&json!({ "name": "Ada Lovelace" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["error"].is_string());
    assert!(ctx.store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_repeated_key_parameter_is_forbidden() {
    let ctx = TestContext::new().await;
    let key = ctx.current_key();

    let response = ctx
        .server
        .get("/api/attendance/access")
        .add_query_param("key", &key)
        .add_query_param("key", &key)
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}
