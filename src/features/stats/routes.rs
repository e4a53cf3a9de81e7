use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::stats::handlers;
use crate::features::stats::services::StatsService;

/// Admin statistics routes
pub fn routes(service: Arc<StatsService>) -> Router {
    Router::new()
        .route("/api/stats/dashboard", get(handlers::get_dashboard))
        .route("/api/stats/waste-items", get(handlers::get_waste_item_stats))
        .route("/api/stats/reports", get(handlers::get_report_stats))
        .with_state(service)
}
