use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::reports::models::ReportStatus;
use crate::features::waste_items::models::WasteStatus;
use crate::shared::geo::{GeoPoint, Located};

/// Pending report considered by the proximity search, with its owner
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ReportCandidate {
    pub id: i32,
    pub report_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub owner_name: String,
    pub owner_phone: String,
    pub owner_address: String,
}

impl Located for ReportCandidate {
    fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Pending waste item considered by the proximity search, with its owner
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct WasteItemCandidate {
    pub id: i32,
    pub waste_type: String,
    pub quantity: f64,
    pub address: String,
    pub city: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub photo: Option<String>,
    pub status: WasteStatus,
    pub created_at: DateTime<Utc>,
    pub owner_name: String,
    pub owner_phone: String,
    pub owner_address: String,
}

impl Located for WasteItemCandidate {
    /// Items stored without coordinates are placed at (0,0), not skipped
    fn location(&self) -> GeoPoint {
        GeoPoint::or_origin(self.latitude, self.longitude)
    }
}
