#[cfg(test)]
use crate::features::auth::model::AuthenticatedUser;

#[cfg(test)]
use crate::features::users::models::UserRole;

#[cfg(test)]
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    Router,
};

#[cfg(test)]
pub fn create_admin_user() -> AuthenticatedUser {
    AuthenticatedUser::new(1, UserRole::Admin)
}

#[cfg(test)]
async fn inject_user_middleware(
    State(user): State<AuthenticatedUser>,
    mut request: Request,
    next: Next,
) -> Response {
    request.extensions_mut().insert(user);
    next.run(request).await
}

/// Wraps a router so every request arrives already authenticated as `user`
#[cfg(test)]
pub fn with_user(router: Router, user: AuthenticatedUser) -> Router {
    router.layer(axum::middleware::from_fn_with_state(
        user,
        inject_user_middleware,
    ))
}

#[cfg(test)]
pub fn with_admin_auth(router: Router) -> Router {
    with_user(router, create_admin_user())
}
