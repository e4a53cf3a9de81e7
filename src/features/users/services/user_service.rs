use sqlx::PgPool;

use crate::core::database::is_unique_violation;
use crate::core::error::{AppError, Result};
use crate::features::auth::password::{hash_password, verify_password};
use crate::features::users::dtos::{CreateUserDto, UpdateUserDto};
use crate::features::users::models::{CreateUser, UpdateUser, User};
use crate::shared::constants::DEFAULT_PHOTO_URL;

const USER_COLUMNS: &str = r#"
    id, name, email, password_hash, phone, address, photo_url,
    role, created_at, updated_at
"#;

/// Service for user accounts
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Hash the password and store a new account with the default role
    pub async fn create_account(&self, dto: CreateUserDto) -> Result<User> {
        let password_hash = hash_password(dto.password).await?;
        let data = CreateUser {
            name: dto.name,
            email: dto.email.trim().to_lowercase(),
            password_hash,
            phone: dto.phone,
            address: dto.address,
            photo_url: dto
                .photo_url
                .unwrap_or_else(|| DEFAULT_PHOTO_URL.to_string()),
        };
        self.create(&data).await
    }

    pub async fn create(&self, data: &CreateUser) -> Result<User> {
        let sql = format!(
            r#"
            INSERT INTO users (name, email, password_hash, phone, address, photo_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {USER_COLUMNS}
            "#
        );

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(&data.name)
            .bind(&data.email)
            .bind(&data.password_hash)
            .bind(&data.phone)
            .bind(&data.address)
            .bind(&data.photo_url)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    return AppError::Conflict("Email already in use".to_string());
                }
                tracing::error!("Failed to create user: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Created user: {} ({})", user.id, user.role);
        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");

        sqlx::query_as::<_, User>(&sql)
            .bind(email.trim().to_lowercase())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to find user by email: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Check email + password. Unknown email and wrong password are
    /// indistinguishable to the caller.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User> {
        let invalid = || AppError::Unauthorized("Invalid email or password".to_string());

        let user = self.find_by_email(email).await?.ok_or_else(invalid)?;

        if !verify_password(user.password_hash.clone(), password.to_string()).await? {
            tracing::debug!("Password mismatch for user {}", user.id);
            return Err(invalid());
        }

        Ok(user)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

        sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get user: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY id");

        sqlx::query_as::<_, User>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list users: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Apply a profile update. `allow_role_change` is false for non-admin
    /// callers, in which case a requested role is ignored.
    pub async fn update_profile(
        &self,
        id: i32,
        dto: UpdateUserDto,
        allow_role_change: bool,
    ) -> Result<User> {
        let password_hash = match dto.password {
            Some(password) => Some(hash_password(password).await?),
            None => None,
        };

        let data = UpdateUser {
            name: dto.name,
            email: dto.email.map(|e| e.trim().to_lowercase()),
            password_hash,
            phone: dto.phone,
            address: dto.address,
            photo_url: dto.photo_url,
            role: dto.role.filter(|_| allow_role_change),
        };
        self.update(id, &data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateUser) -> Result<User> {
        let sql = format!(
            r#"
            UPDATE users
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                password_hash = COALESCE($4, password_hash),
                phone = COALESCE($5, phone),
                address = COALESCE($6, address),
                photo_url = COALESCE($7, photo_url),
                role = COALESCE($8, role),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "#
        );

        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(&data.name)
            .bind(&data.email)
            .bind(&data.password_hash)
            .bind(&data.phone)
            .bind(&data.address)
            .bind(&data.photo_url)
            .bind(data.role)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    return AppError::Conflict("Email already in use".to_string());
                }
                tracing::error!("Failed to update user: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

        tracing::info!("Updated user: {}", id);
        Ok(user)
    }

    pub async fn change_password(
        &self,
        id: i32,
        current_password: &str,
        new_password: String,
    ) -> Result<()> {
        let user = self.get_by_id(id).await?;

        if !verify_password(user.password_hash, current_password.to_string()).await? {
            return Err(AppError::BadRequest(
                "Current password is incorrect".to_string(),
            ));
        }

        let data = UpdateUser {
            password_hash: Some(hash_password(new_password).await?),
            ..Default::default()
        };
        self.update(id, &data).await?;

        tracing::info!("Password changed for user: {}", id);
        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete user: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        tracing::info!("Deleted user: {}", id);
        Ok(())
    }
}
