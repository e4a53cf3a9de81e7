use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::users::dtos::UserResponseDto;

/// Request DTO for user login
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Request DTO for token refresh. A missing field is treated like an empty one.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequestDto {
    #[serde(default)]
    pub refresh_token: String,
}

/// Response DTO for register/login
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponseDto {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserResponseDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_request_tolerates_missing_field() {
        let dto: RefreshTokenRequestDto = serde_json::from_str("{}").unwrap();
        assert!(dto.refresh_token.is_empty());

        let dto: RefreshTokenRequestDto =
            serde_json::from_str(r#"{"refreshToken":"abc"}"#).unwrap();
        assert_eq!(dto.refresh_token, "abc");
    }

    #[test]
    fn test_login_requires_password() {
        let dto = LoginRequestDto {
            email: "collector@example.com".to_string(),
            password: String::new(),
        };
        assert!(dto.validate().is_err());
    }
}
