use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::collections::handlers;
use crate::features::collections::services::CollectionService;

pub fn routes(service: Arc<CollectionService>) -> Router {
    Router::new()
        .route("/api/collections", get(handlers::list_collections))
        .route("/api/collections/pending", get(handlers::list_pending))
        .route(
            "/api/collections/{id}/validate",
            put(handlers::validate_collection),
        )
        .with_state(service)
}
