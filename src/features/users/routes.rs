use crate::features::users::handlers;
use crate::features::users::services::UserService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Account creation is open to anonymous callers
pub fn public_routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/users", post(handlers::create_user))
        .with_state(service)
}

pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/users", get(handlers::list_users))
        .route("/api/users/me", get(handlers::get_me))
        .route("/api/users/change-password", post(handlers::change_password))
        .route(
            "/api/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .with_state(service)
}
