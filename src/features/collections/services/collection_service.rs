use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::collections::models::CollectionItem;
use crate::features::waste_items::models::{WasteItem, WasteStatus};

const JOINED_COLUMNS: &str = r#"
    w.id, w.waste_type, w.quantity, w.address, w.city, w.latitude, w.longitude,
    w.photo, w.status, w.user_id, w.collected_by, w.collected_at,
    w.created_at, w.updated_at,
    u.name AS owner_name, u.phone AS owner_phone, u.address AS owner_address
"#;

/// Pickup workflow over waste items
pub struct CollectionService {
    pool: PgPool,
}

impl CollectionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Pending pickups, oldest first
    pub async fn list_pending(&self) -> Result<Vec<CollectionItem>> {
        let sql = format!(
            r#"
            SELECT {JOINED_COLUMNS}
            FROM waste_items w
            JOIN users u ON u.id = w.user_id
            WHERE w.status = $1
            ORDER BY w.created_at ASC
            "#
        );

        sqlx::query_as::<_, CollectionItem>(&sql)
            .bind(WasteStatus::Pending)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list pending collections: {:?}", e);
                AppError::Database(e)
            })
    }

    /// All waste items, newest first, optionally narrowed to one status
    pub async fn list(&self, status: Option<WasteStatus>) -> Result<Vec<CollectionItem>> {
        let sql = format!(
            r#"
            SELECT {JOINED_COLUMNS}
            FROM waste_items w
            JOIN users u ON u.id = w.user_id
            WHERE ($1::waste_item_status IS NULL OR w.status = $1)
            ORDER BY w.created_at DESC
            "#
        );

        sqlx::query_as::<_, CollectionItem>(&sql)
            .bind(status)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list collections: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Mark a pending item as collected by `collector_id`.
    ///
    /// The status guard lives in the UPDATE so two collectors racing on the
    /// same item cannot both succeed.
    pub async fn validate(&self, id: i32, collector_id: i32) -> Result<WasteItem> {
        let updated = sqlx::query_as::<_, WasteItem>(
            r#"
            UPDATE waste_items
            SET status = $3, collected_by = $2, collected_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND status = $4
            RETURNING id, waste_type, quantity, address, city, latitude, longitude, photo,
                      status, user_id, collected_by, collected_at, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(collector_id)
        .bind(WasteStatus::Collected)
        .bind(WasteStatus::Pending)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to validate collection: {:?}", e);
            AppError::Database(e)
        })?;

        let exists = match updated {
            Some(_) => {
                tracing::info!("Waste item {} collected by {}", id, collector_id);
                true
            }
            // nothing updated: either the id is unknown or the item left `pending`
            None => sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM waste_items WHERE id = $1)",
            )
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to check waste item: {:?}", e);
                AppError::Database(e)
            })?,
        };

        validation_outcome(id, updated, exists)
    }
}

/// Result of a guarded pickup given the updated row (if any) and whether
/// the item exists at all.
fn validation_outcome(id: i32, updated: Option<WasteItem>, exists: bool) -> Result<WasteItem> {
    match (updated, exists) {
        (Some(item), _) => Ok(item),
        (None, true) => Err(AppError::Conflict(format!(
            "Waste item {} has already been collected",
            id
        ))),
        (None, false) => Err(AppError::NotFound(format!("Waste item {} not found", id))),
    }
}
