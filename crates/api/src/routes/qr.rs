use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/qr", get(handlers::qr::current_ticket))
        .route("/api/qr.svg", get(handlers::qr::current_qr_svg))
}
