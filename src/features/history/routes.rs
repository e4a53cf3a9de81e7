use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::history::handlers;
use crate::features::history::services::HistoryService;

pub fn routes(service: Arc<HistoryService>) -> Router {
    Router::new()
        .route("/api/history", get(handlers::get_history))
        .with_state(service)
}
