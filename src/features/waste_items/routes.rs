use crate::features::waste_items::handlers;
use crate::features::waste_items::services::WasteItemService;
use axum::{routing::get, Router};
use std::sync::Arc;

pub fn routes(service: Arc<WasteItemService>) -> Router {
    Router::new()
        .route(
            "/api/waste-items",
            get(handlers::list_waste_items).post(handlers::create_waste_item),
        )
        .route(
            "/api/waste-items/{id}",
            get(handlers::get_waste_item)
                .put(handlers::update_waste_item)
                .delete(handlers::delete_waste_item),
        )
        .with_state(service)
}
