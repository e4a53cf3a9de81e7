use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::waste_items::models::{CreateWasteItem, UpdateWasteItem, WasteItem};

const WASTE_ITEM_COLUMNS: &str = r#"
    id, waste_type, quantity, address, city, latitude, longitude, photo,
    status, user_id, collected_by, collected_at, created_at, updated_at
"#;

/// Service for waste item CRUD
pub struct WasteItemService {
    pool: PgPool,
}

impl WasteItemService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: &CreateWasteItem) -> Result<WasteItem> {
        let sql = format!(
            r#"
            INSERT INTO waste_items
                (waste_type, quantity, address, city, latitude, longitude, photo, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {WASTE_ITEM_COLUMNS}
            "#
        );

        let item = sqlx::query_as::<_, WasteItem>(&sql)
            .bind(&data.waste_type)
            .bind(data.quantity)
            .bind(&data.address)
            .bind(&data.city)
            .bind(data.latitude)
            .bind(data.longitude)
            .bind(&data.photo)
            .bind(data.user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create waste item: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Created waste item {} for user {}", item.id, item.user_id);
        Ok(item)
    }

    pub async fn list(&self) -> Result<Vec<WasteItem>> {
        let sql = format!("SELECT {WASTE_ITEM_COLUMNS} FROM waste_items ORDER BY created_at DESC");

        sqlx::query_as::<_, WasteItem>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list waste items: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<WasteItem>> {
        let sql = format!(
            "SELECT {WASTE_ITEM_COLUMNS} FROM waste_items WHERE user_id = $1 ORDER BY created_at DESC"
        );

        sqlx::query_as::<_, WasteItem>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list waste items for user: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<WasteItem> {
        let sql = format!("SELECT {WASTE_ITEM_COLUMNS} FROM waste_items WHERE id = $1");

        sqlx::query_as::<_, WasteItem>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get waste item: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Waste item {} not found", id)))
    }

    /// Owner or admin only
    pub async fn update(
        &self,
        id: i32,
        user: &AuthenticatedUser,
        data: &UpdateWasteItem,
    ) -> Result<WasteItem> {
        self.ensure_can_modify(id, user).await?;

        let sql = format!(
            r#"
            UPDATE waste_items
            SET waste_type = COALESCE($2, waste_type),
                quantity = COALESCE($3, quantity),
                address = COALESCE($4, address),
                city = COALESCE($5, city),
                latitude = COALESCE($6, latitude),
                longitude = COALESCE($7, longitude),
                photo = COALESCE($8, photo),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {WASTE_ITEM_COLUMNS}
            "#
        );

        let item = sqlx::query_as::<_, WasteItem>(&sql)
            .bind(id)
            .bind(&data.waste_type)
            .bind(data.quantity)
            .bind(&data.address)
            .bind(&data.city)
            .bind(data.latitude)
            .bind(data.longitude)
            .bind(&data.photo)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update waste item: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Waste item {} not found", id)))?;

        tracing::info!("Updated waste item: {}", id);
        Ok(item)
    }

    /// Owner or admin only
    pub async fn delete(&self, id: i32, user: &AuthenticatedUser) -> Result<()> {
        self.ensure_can_modify(id, user).await?;

        let result = sqlx::query("DELETE FROM waste_items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete waste item: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Waste item {} not found", id)));
        }

        tracing::info!("Deleted waste item: {}", id);
        Ok(())
    }

    async fn ensure_can_modify(&self, id: i32, user: &AuthenticatedUser) -> Result<()> {
        let item = self.get_by_id(id).await?;
        if !user.can_modify(item.user_id) {
            return Err(AppError::Forbidden(
                "You can only modify your own waste items".to_string(),
            ));
        }
        Ok(())
    }
}
