use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::geo::models::{ReportCandidate, WasteItemCandidate};
use crate::features::reports::models::ReportStatus;
use crate::features::waste_items::models::WasteStatus;

/// Where the proximity search gets its records from.
///
/// The two collections are read independently; there is no shared snapshot
/// between them.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    async fn pending_reports(&self) -> Result<Vec<ReportCandidate>>;
    async fn pending_waste_items(&self) -> Result<Vec<WasteItemCandidate>>;
}

pub struct PgCandidateSource {
    pool: PgPool,
}

impl PgCandidateSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateSource for PgCandidateSource {
    async fn pending_reports(&self) -> Result<Vec<ReportCandidate>> {
        sqlx::query_as::<_, ReportCandidate>(
            r#"
            SELECT
                r.id, r.report_type, r.latitude, r.longitude, r.description, r.photo,
                r.status, r.created_at,
                u.name AS owner_name, u.phone AS owner_phone, u.address AS owner_address
            FROM reports r
            JOIN users u ON u.id = r.user_id
            WHERE r.status = $1
            "#,
        )
        .bind(ReportStatus::Pending)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load pending reports: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn pending_waste_items(&self) -> Result<Vec<WasteItemCandidate>> {
        sqlx::query_as::<_, WasteItemCandidate>(
            r#"
            SELECT
                w.id, w.waste_type, w.quantity, w.address, w.city,
                w.latitude, w.longitude, w.photo, w.status, w.created_at,
                u.name AS owner_name, u.phone AS owner_phone, u.address AS owner_address
            FROM waste_items w
            JOIN users u ON u.id = w.user_id
            WHERE w.status = $1
            "#,
        )
        .bind(WasteStatus::Pending)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load pending waste items: {:?}", e);
            AppError::Database(e)
        })
    }
}
