use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::error::{AppError, Result};
use crate::features::geo::models::{ReportCandidate, WasteItemCandidate};
use crate::features::geo::services::{NearbyResults, ProximityKind, ProximityQuery};
use crate::features::reports::models::ReportStatus;
use crate::features::users::dtos::OwnerSummaryDto;
use crate::features::waste_items::models::WasteStatus;
use crate::shared::constants::DEFAULT_PROXIMITY_RADIUS_KM;
use crate::shared::geo::{GeoPoint, Ranked};

/// Raw query string. Values are kept as text so that bad numbers produce
/// the API's own 400 message instead of the extractor's.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProximityParams {
    /// Latitude of the search origin
    pub latitude: Option<String>,
    /// Longitude of the search origin
    pub longitude: Option<String>,
    /// Search radius in kilometres (default 5)
    pub rayon: Option<String>,
    /// `reports`, `wasteItems`, or anything else for both
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_number(raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::BadRequest("Invalid parameters".to_string()))
}

impl ProximityParams {
    pub fn into_query(self) -> Result<ProximityQuery> {
        let (Some(latitude), Some(longitude)) = (present(&self.latitude), present(&self.longitude))
        else {
            return Err(AppError::BadRequest(
                "Latitude and longitude are required".to_string(),
            ));
        };

        let origin = GeoPoint::new(parse_number(latitude)?, parse_number(longitude)?);

        let radius_km = match present(&self.rayon) {
            Some(raw) => parse_number(raw)?,
            None => DEFAULT_PROXIMITY_RADIUS_KM,
        };
        if radius_km < 0.0 {
            return Err(AppError::BadRequest("Invalid parameters".to_string()));
        }

        Ok(ProximityQuery {
            origin,
            radius_km,
            kind: ProximityKind::parse(self.kind.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NearbyReportDto {
    pub id: i32,
    pub report_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub owner: OwnerSummaryDto,
    pub distance_km: f64,
}

impl From<Ranked<ReportCandidate>> for NearbyReportDto {
    fn from(ranked: Ranked<ReportCandidate>) -> Self {
        let r = ranked.item;
        Self {
            id: r.id,
            report_type: r.report_type,
            latitude: r.latitude,
            longitude: r.longitude,
            description: r.description,
            photo: r.photo,
            status: r.status,
            created_at: r.created_at,
            owner: OwnerSummaryDto {
                name: r.owner_name,
                phone: r.owner_phone,
                address: r.owner_address,
            },
            distance_km: ranked.distance_km,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NearbyWasteItemDto {
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
    pub owner: OwnerSummaryDto,
    pub distance_km: f64,
}

impl From<Ranked<WasteItemCandidate>> for NearbyWasteItemDto {
    fn from(ranked: Ranked<WasteItemCandidate>) -> Self {
        let w = ranked.item;
        Self {
            id: w.id,
            waste_type: w.waste_type,
            quantity: w.quantity,
            address: w.address,
            city: w.city,
            latitude: w.latitude,
            longitude: w.longitude,
            photo: w.photo,
            status: w.status,
            created_at: w.created_at,
            owner: OwnerSummaryDto {
                name: w.owner_name,
                phone: w.owner_phone,
                address: w.owner_address,
            },
            distance_km: ranked.distance_km,
        }
    }
}

/// Proximity search result; the echoed query plus the requested lists
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProximityResponseDto {
    pub position: GeoPoint,
    pub rayon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reports: Option<Vec<NearbyReportDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste_items: Option<Vec<NearbyWasteItemDto>>,
}

impl ProximityResponseDto {
    pub fn new(query: &ProximityQuery, results: NearbyResults) -> Self {
        Self {
            position: query.origin,
            rayon: query.radius_km,
            reports: results
                .reports
                .map(|hits| hits.into_iter().map(Into::into).collect()),
            waste_items: results
                .waste_items
                .map(|hits| hits.into_iter().map(Into::into).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(latitude: Option<&str>, longitude: Option<&str>, rayon: Option<&str>) -> ProximityParams {
        ProximityParams {
            latitude: latitude.map(str::to_string),
            longitude: longitude.map(str::to_string),
            rayon: rayon.map(str::to_string),
            kind: None,
        }
    }

    fn message(err: AppError) -> String {
        match err {
            AppError::BadRequest(msg) => msg,
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let query = params(Some("4.05"), Some("9.70"), None).into_query().unwrap();
        assert_eq!(query.origin, GeoPoint::new(4.05, 9.70));
        assert_eq!(query.radius_km, 5.0);
        assert_eq!(query.kind, ProximityKind::Both);
    }

    #[test]
    fn test_missing_or_blank_coordinates() {
        for p in [
            params(None, Some("9.70"), None),
            params(Some("4.05"), None, None),
            params(Some(" "), Some("9.70"), None),
        ] {
            assert_eq!(
                message(p.into_query().unwrap_err()),
                "Latitude and longitude are required"
            );
        }
    }

    #[test]
    fn test_non_numeric_values() {
        for p in [
            params(Some("north"), Some("9.70"), None),
            params(Some("4.05"), Some("NaN"), None),
            params(Some("4.05"), Some("9.70"), Some("far")),
            params(Some("4.05"), Some("9.70"), Some("inf")),
            params(Some("4.05"), Some("9.70"), Some("-1")),
        ] {
            assert_eq!(message(p.into_query().unwrap_err()), "Invalid parameters");
        }
    }

    #[test]
    fn test_zero_radius_is_allowed() {
        let query = params(Some("0"), Some("0"), Some("0")).into_query().unwrap();
        assert_eq!(query.radius_km, 0.0);
    }
}
