use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::reports::models::{CreateReport, Report, ReportStatus, UpdateReport};

/// Request DTO for reporting a dumping site
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportDto {
    #[validate(length(min = 1, max = 64, message = "Report type is required"))]
    pub report_type: String,

    pub latitude: f64,

    pub longitude: f64,

    #[validate(length(max = 2000, message = "Description is too long"))]
    #[serde(default)]
    pub description: Option<String>,

    #[validate(url(message = "Photo must be a valid URL"))]
    #[serde(default)]
    pub photo: Option<String>,
}

impl CreateReportDto {
    pub fn into_model(self, user_id: i32) -> CreateReport {
        CreateReport {
            report_type: self.report_type,
            latitude: self.latitude,
            longitude: self.longitude,
            description: self.description,
            photo: self.photo,
            user_id,
        }
    }
}

/// Request DTO for updating a report, including its status
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReportDto {
    #[validate(length(min = 1, max = 64, message = "Report type cannot be empty"))]
    #[serde(default)]
    pub report_type: Option<String>,

    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,

    #[validate(length(max = 2000, message = "Description is too long"))]
    #[serde(default)]
    pub description: Option<String>,

    #[validate(url(message = "Photo must be a valid URL"))]
    #[serde(default)]
    pub photo: Option<String>,

    #[serde(default)]
    pub status: Option<ReportStatus>,
}

impl From<UpdateReportDto> for UpdateReport {
    fn from(dto: UpdateReportDto) -> Self {
        Self {
            report_type: dto.report_type,
            latitude: dto.latitude,
            longitude: dto.longitude,
            description: dto.description,
            photo: dto.photo,
            status: dto.status,
        }
    }
}

/// Response DTO for report
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponseDto {
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

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            report_type: r.report_type,
            latitude: r.latitude,
            longitude: r.longitude,
            description: r.description,
            photo: r.photo,
            status: r.status,
            user_id: r.user_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_status_from_payload() {
        let dto: UpdateReportDto = serde_json::from_str(r#"{"status":"resolved"}"#).unwrap();
        assert!(dto.validate().is_ok());
        let update: UpdateReport = dto.into();
        assert_eq!(update.status, Some(ReportStatus::Resolved));
        assert!(update.report_type.is_none());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = serde_json::from_str::<UpdateReportDto>(r#"{"status":"draft"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_coordinates_are_required_on_create() {
        let result = serde_json::from_str::<CreateReportDto>(r#"{"reportType":"dump"}"#);
        assert!(result.is_err());
    }
}
