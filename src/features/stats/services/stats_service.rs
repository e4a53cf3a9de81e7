use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::stats::dtos::{BreakdownDto, CountByKeyDto, DashboardStatsDto};

/// Tables and columns the breakdown queries may group on.
/// Identifiers are fixed here and never come from request input.
struct Breakdown {
    table: &'static str,
    type_column: &'static str,
}

const WASTE_ITEMS: Breakdown = Breakdown {
    table: "waste_items",
    type_column: "waste_type",
};

const REPORTS: Breakdown = Breakdown {
    table: "reports",
    type_column: "report_type",
};

/// Service for admin statistics
pub struct StatsService {
    pool: PgPool,
}

impl StatsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ========================================================================
    // Dashboard totals
    // ========================================================================

    pub async fn dashboard(&self) -> Result<DashboardStatsDto> {
        sqlx::query_as::<_, DashboardStatsDto>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM users) AS total_users,
                (SELECT COUNT(*) FROM waste_items) AS total_waste_items,
                (SELECT COUNT(*) FROM reports) AS total_reports
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get dashboard counts: {:?}", e);
            AppError::Database(e)
        })
    }

    // ========================================================================
    // Breakdowns by type and status
    // ========================================================================

    pub async fn waste_items(&self) -> Result<BreakdownDto> {
        self.breakdown(&WASTE_ITEMS).await
    }

    pub async fn reports(&self) -> Result<BreakdownDto> {
        self.breakdown(&REPORTS).await
    }

    async fn breakdown(&self, target: &Breakdown) -> Result<BreakdownDto> {
        let (by_type, by_status) = futures::try_join!(
            self.count_by(target.table, target.type_column),
            self.count_by(target.table, "status::text")
        )?;

        Ok(BreakdownDto { by_type, by_status })
    }

    async fn count_by(&self, table: &str, column: &str) -> Result<Vec<CountByKeyDto>> {
        let sql = format!(
            r#"
            SELECT {column} AS key, COUNT(*) AS count
            FROM {table}
            GROUP BY 1
            ORDER BY count DESC, key
            "#
        );

        sqlx::query_as::<_, CountByKeyDto>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count {} by {}: {:?}", table, column, e);
                AppError::Database(e)
            })
    }
}
