use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/attendance",
            get(handlers::attendance::list_records).post(handlers::attendance::submit_attendance),
        )
        .route(
            "/api/attendance/access",
            get(handlers::attendance::check_access),
        )
        .route(
            "/api/attendance/export",
            get(handlers::attendance::export_records),
        )
}
