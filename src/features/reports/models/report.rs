use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Report status enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "report_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    InProgress,
    Resolved,
    Rejected,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "pending"),
            ReportStatus::InProgress => write!(f, "in_progress"),
            ReportStatus::Resolved => write!(f, "resolved"),
            ReportStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Database model for an illegal dumping site report
#[derive(Debug, Clone, FromRow)]
pub struct Report {
    pub id: i32,
    pub report_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub status: ReportStatus,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new report
#[derive(Debug)]
pub struct CreateReport {
    pub report_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub user_id: i32,
}

/// Partial update; `None` leaves the column untouched
#[derive(Debug, Default)]
pub struct UpdateReport {
    pub report_type: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub status: Option<ReportStatus>,
}
