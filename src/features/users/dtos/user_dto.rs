use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::users::models::{User, UserRole};

/// Request DTO for account creation (also used by registration)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(length(min = 2, max = 128, message = "Name must be 2-128 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(regex(
        path = "*crate::shared::validation::PHONE_REGEX",
        message = "Invalid phone number"
    ))]
    pub phone: String,

    #[validate(length(min = 5, message = "Address must be at least 5 characters"))]
    pub address: String,

    #[validate(url(message = "Photo must be a valid URL"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Request DTO for updating a user. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(length(min = 2, max = 128, message = "Name must be 2-128 characters"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[validate(regex(
        path = "*crate::shared::validation::PHONE_REGEX",
        message = "Invalid phone number"
    ))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[validate(length(min = 5, message = "Address must be at least 5 characters"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[validate(url(message = "Photo must be a valid URL"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    /// Only honoured when the caller is an admin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,

    #[validate(length(min = 8, message = "New password must be at least 8 characters"))]
    pub new_password: String,
}

/// Public view of a user; never carries the password hash
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponseDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub photo_url: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponseDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
            phone: u.phone,
            address: u.address,
            photo_url: u.photo_url,
            role: u.role,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// Contact details of a record's owner, shown to collectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OwnerSummaryDto {
    pub name: String,
    pub phone: String,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::address::en::StreetName;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn valid_dto() -> CreateUserDto {
        CreateUserDto {
            name: Name().fake(),
            email: SafeEmail().fake(),
            password: "correct-horse".to_string(),
            phone: "+237 690 00 00 00".to_string(),
            address: format!("12 {}", StreetName().fake::<String>()),
            photo_url: None,
        }
    }

    #[test]
    fn test_valid_create_user_passes() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn test_short_password_rejected() {
        let dto = CreateUserDto {
            password: "short".to_string(),
            ..valid_dto()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_bad_email_and_phone_rejected() {
        let dto = CreateUserDto {
            email: "not-an-email".to_string(),
            phone: "call me".to_string(),
            ..valid_dto()
        };
        let errors = dto.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("phone"));
    }

    #[test]
    fn test_empty_update_is_valid() {
        assert!(UpdateUserDto::default().validate().is_ok());
    }

    #[test]
    fn test_update_accepts_camel_case_payload() {
        let dto: UpdateUserDto =
            serde_json::from_str(r#"{"photoUrl":"https://example.com/a.png","role":"COLLECTOR"}"#)
                .unwrap();
        assert_eq!(dto.photo_url.as_deref(), Some("https://example.com/a.png"));
        assert_eq!(dto.role, Some(UserRole::Collector));
    }

    #[test]
    fn test_response_hides_hash_and_carries_timestamps() {
        let created = chrono::Utc::now();
        let user = User {
            id: 4,
            name: "Awa".to_string(),
            email: "awa@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            phone: "+237 690 00 00 00".to_string(),
            address: "Akwa, Douala".to_string(),
            photo_url: "https://example.com/a.png".to_string(),
            role: UserRole::User,
            created_at: created,
            updated_at: created + chrono::Duration::hours(1),
        };

        let json = serde_json::to_value(UserResponseDto::from(user)).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("createdAt").is_some());
        assert_ne!(json["createdAt"], json["updatedAt"]);
    }
}
