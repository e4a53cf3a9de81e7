use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::reports::models::{CreateReport, Report, UpdateReport};

const REPORT_COLUMNS: &str = r#"
    id, report_type, latitude, longitude, description, photo,
    status, user_id, created_at, updated_at
"#;

/// Service for report operations
pub struct ReportService {
    pool: PgPool,
}

impl ReportService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: &CreateReport) -> Result<Report> {
        let sql = format!(
            r#"
            INSERT INTO reports (report_type, latitude, longitude, description, photo, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {REPORT_COLUMNS}
            "#
        );

        let report = sqlx::query_as::<_, Report>(&sql)
            .bind(&data.report_type)
            .bind(data.latitude)
            .bind(data.longitude)
            .bind(&data.description)
            .bind(&data.photo)
            .bind(data.user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create report: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Created report {} for user {}", report.id, report.user_id);
        Ok(report)
    }

    pub async fn list(&self) -> Result<Vec<Report>> {
        let sql = format!("SELECT {REPORT_COLUMNS} FROM reports ORDER BY created_at DESC");

        sqlx::query_as::<_, Report>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list reports: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<Report>> {
        let sql = format!(
            "SELECT {REPORT_COLUMNS} FROM reports WHERE user_id = $1 ORDER BY created_at DESC"
        );

        sqlx::query_as::<_, Report>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list reports for user: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Report> {
        let sql = format!("SELECT {REPORT_COLUMNS} FROM reports WHERE id = $1");

        sqlx::query_as::<_, Report>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get report: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    /// Owner or admin only. Status changes go through here as well.
    pub async fn update(
        &self,
        id: i32,
        user: &AuthenticatedUser,
        data: &UpdateReport,
    ) -> Result<Report> {
        self.ensure_can_modify(id, user).await?;

        let sql = format!(
            r#"
            UPDATE reports
            SET report_type = COALESCE($2, report_type),
                latitude = COALESCE($3, latitude),
                longitude = COALESCE($4, longitude),
                description = COALESCE($5, description),
                photo = COALESCE($6, photo),
                status = COALESCE($7, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {REPORT_COLUMNS}
            "#
        );

        let report = sqlx::query_as::<_, Report>(&sql)
            .bind(id)
            .bind(&data.report_type)
            .bind(data.latitude)
            .bind(data.longitude)
            .bind(&data.description)
            .bind(&data.photo)
            .bind(data.status)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update report: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))?;

        tracing::info!("Updated report {} (status: {})", id, report.status);
        Ok(report)
    }

    pub async fn delete(&self, id: i32, user: &AuthenticatedUser) -> Result<()> {
        self.ensure_can_modify(id, user).await?;

        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete report: {:?}", e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Report {} not found", id)));
        }

        tracing::info!("Deleted report: {}", id);
        Ok(())
    }

    async fn ensure_can_modify(&self, id: i32, user: &AuthenticatedUser) -> Result<()> {
        let report = self.get_by_id(id).await?;
        if !user.can_modify(report.user_id) {
            return Err(AppError::Forbidden(
                "You can only modify your own reports".to_string(),
            ));
        }
        Ok(())
    }
}
