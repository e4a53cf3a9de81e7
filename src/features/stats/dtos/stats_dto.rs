use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total_users: i64,
    pub total_waste_items: i64,
    pub total_reports: i64,
}

/// One bucket of a GROUP BY count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CountByKeyDto {
    pub key: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownDto {
    pub by_type: Vec<CountByKeyDto>,
    pub by_status: Vec<CountByKeyDto>,
}
