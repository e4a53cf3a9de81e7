use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::geo::handlers;
use crate::features::geo::services::ProximityService;

pub fn routes(service: Arc<ProximityService>) -> Router {
    Router::new()
        .route("/api/geo/proximite", get(handlers::find_nearby))
        .with_state(service)
}
