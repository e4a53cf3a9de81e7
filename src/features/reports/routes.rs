use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Create routes for the reports feature
///
/// All routes require the auth middleware to be applied by the caller
pub fn routes(service: Arc<ReportService>) -> Router {
    Router::new()
        .route(
            "/api/reports",
            get(handlers::list_reports).post(handlers::create_report),
        )
        .route(
            "/api/reports/{id}",
            get(handlers::get_report)
                .put(handlers::update_report)
                .delete(handlers::delete_report),
        )
        .with_state(service)
}
