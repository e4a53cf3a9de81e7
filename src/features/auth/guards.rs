//! Role-based authorization guards.
//!
//! Roles are flat except that an admin passes every guard:
//! - ADMIN: user management, statistics, collection validation
//! - COLLECTOR: lists pending pickups and validates them
//! - USER: reports waste and dumping sites

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

fn authenticated(parts: &Parts) -> Result<&AuthenticatedUser, AppError> {
    parts
        .extensions
        .get::<AuthenticatedUser>()
        .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))
}

/// Guard for admin-only endpoints.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdmin(user): RequireAdmin) { ... }
/// ```
pub struct RequireAdmin(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticated(parts)?;

        if !user.is_admin() {
            return Err(AppError::Forbidden("Admin access required".to_string()));
        }

        Ok(RequireAdmin(user.clone()))
    }
}

/// Guard for collection endpoints. Allows COLLECTOR and ADMIN.
pub struct RequireCollector(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireCollector
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = authenticated(parts)?;

        if !user.can_collect() {
            return Err(AppError::Forbidden("Collector access required".to_string()));
        }

        Ok(RequireCollector(user.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::users::models::UserRole;
    use crate::shared::test_helpers::{with_admin_auth, with_user};
    use axum::{http::StatusCode, routing::get, Router};
    use axum_test::TestServer;

    async fn admin_only(RequireAdmin(user): RequireAdmin) -> String {
        user.user_id.to_string()
    }

    async fn collector_only(RequireCollector(user): RequireCollector) -> String {
        user.user_id.to_string()
    }

    fn server_as(role: UserRole) -> TestServer {
        let app = Router::new()
            .route("/admin", get(admin_only))
            .route("/collect", get(collector_only));
        TestServer::new(with_user(app, AuthenticatedUser::new(9, role))).unwrap()
    }

    #[tokio::test]
    async fn test_user_is_forbidden_everywhere() {
        let server = server_as(UserRole::User);
        server.get("/admin").await.assert_status(StatusCode::FORBIDDEN);
        server
            .get("/collect")
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_collector_only_passes_collector_guard() {
        let server = server_as(UserRole::Collector);
        server.get("/admin").await.assert_status(StatusCode::FORBIDDEN);
        server.get("/collect").await.assert_text("9");
    }

    #[tokio::test]
    async fn test_admin_passes_both_guards() {
        let app = Router::new()
            .route("/admin", get(admin_only))
            .route("/collect", get(collector_only));
        let server = TestServer::new(with_admin_auth(app)).unwrap();
        server.get("/admin").await.assert_text("1");
        server.get("/collect").await.assert_text("1");
    }

    #[tokio::test]
    async fn test_missing_principal_is_unauthorized() {
        let app = Router::new().route("/admin", get(admin_only));
        let server = TestServer::new(app).unwrap();
        server
            .get("/admin")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }
}
