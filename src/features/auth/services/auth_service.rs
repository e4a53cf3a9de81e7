use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{AuthResponseDto, LoginRequestDto, RefreshTokenRequestDto};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::services::session_service::{SessionService, TokenPair};
use crate::features::users::dtos::CreateUserDto;
use crate::features::users::models::User;
use crate::features::users::UserService;
use std::sync::Arc;

/// Service for authentication operations (register, login, refresh)
pub struct AuthService {
    users: Arc<UserService>,
    sessions: Arc<SessionService>,
}

impl AuthService {
    pub fn new(users: Arc<UserService>, sessions: Arc<SessionService>) -> Self {
        Self { users, sessions }
    }

    /// Create the account and sign the caller in straight away
    pub async fn register(&self, dto: CreateUserDto) -> Result<AuthResponseDto> {
        let user = self.users.create_account(dto).await?;
        self.respond_with_tokens(user)
    }

    pub async fn login(&self, dto: LoginRequestDto) -> Result<AuthResponseDto> {
        let user = self.users.authenticate(&dto.email, &dto.password).await?;
        tracing::info!("User logged in: {}", user.id);
        self.respond_with_tokens(user)
    }

    /// Exchange a refresh token for a new pair. Does not consult the database.
    pub fn refresh_token(&self, dto: RefreshTokenRequestDto) -> Result<TokenPair> {
        let token = dto.refresh_token.trim();
        if token.is_empty() {
            return Err(AppError::BadRequest("Refresh token is required".to_string()));
        }

        self.sessions
            .refresh(token)
            .map_err(|e| AppError::Unauthorized(e.to_string()))
    }

    /// Tokens are stateless; there is nothing to revoke server-side
    pub fn logout(&self, user: &AuthenticatedUser) {
        tracing::info!("User logged out: {}", user.user_id);
    }

    fn respond_with_tokens(&self, user: User) -> Result<AuthResponseDto> {
        let principal = AuthenticatedUser::new(user.id, user.role);
        let tokens = self.sessions.issue(&principal)?;

        Ok(AuthResponseDto {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            user: user.into(),
        })
    }
}
