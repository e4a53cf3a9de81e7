use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::geo::models::{ReportCandidate, WasteItemCandidate};
use crate::features::geo::services::CandidateSource;
use crate::shared::geo::{within_radius, GeoPoint, Ranked};

/// Which collections a proximity search covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximityKind {
    Reports,
    WasteItems,
    Both,
}

impl ProximityKind {
    /// Case-insensitive. Unknown or absent selectors fall back to both
    /// collections.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Both;
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "reports" | "signalements" => Self::Reports,
            "wasteitems" | "waste_items" | "dechets" => Self::WasteItems,
            _ => Self::Both,
        }
    }

    pub fn includes_reports(self) -> bool {
        matches!(self, Self::Reports | Self::Both)
    }

    pub fn includes_waste_items(self) -> bool {
        matches!(self, Self::WasteItems | Self::Both)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityQuery {
    pub origin: GeoPoint,
    pub radius_km: f64,
    pub kind: ProximityKind,
}

/// Ranked hits; a collection the query did not ask for is `None`
#[derive(Debug, Default)]
pub struct NearbyResults {
    pub reports: Option<Vec<Ranked<ReportCandidate>>>,
    pub waste_items: Option<Vec<Ranked<WasteItemCandidate>>>,
}

pub struct ProximityService {
    source: Arc<dyn CandidateSource>,
}

impl ProximityService {
    pub fn new(source: Arc<dyn CandidateSource>) -> Self {
        Self { source }
    }

    pub async fn find_nearby(&self, query: &ProximityQuery) -> Result<NearbyResults> {
        let reports = async {
            if !query.kind.includes_reports() {
                return Ok(None);
            }
            let candidates = self.source.pending_reports().await?;
            Ok::<_, AppError>(Some(within_radius(
                &query.origin,
                query.radius_km,
                candidates,
            )))
        };

        let waste_items = async {
            if !query.kind.includes_waste_items() {
                return Ok(None);
            }
            let candidates = self.source.pending_waste_items().await?;
            Ok::<_, AppError>(Some(within_radius(
                &query.origin,
                query.radius_km,
                candidates,
            )))
        };

        let (reports, waste_items) = futures::try_join!(reports, waste_items)?;

        tracing::debug!(
            "Proximity search at ({}, {}) r={}km: {} reports, {} waste items",
            query.origin.latitude,
            query.origin.longitude,
            query.radius_km,
            reports.as_ref().map_or(0, Vec::len),
            waste_items.as_ref().map_or(0, Vec::len),
        );

        Ok(NearbyResults {
            reports,
            waste_items,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::features::reports::models::ReportStatus;
    use crate::features::waste_items::models::WasteStatus;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory candidates with call counters
    #[derive(Default)]
    pub(crate) struct StaticSource {
        pub reports: Vec<ReportCandidate>,
        pub waste_items: Vec<WasteItemCandidate>,
        pub report_calls: AtomicUsize,
        pub waste_item_calls: AtomicUsize,
    }

    #[async_trait]
    impl CandidateSource for StaticSource {
        async fn pending_reports(&self) -> Result<Vec<ReportCandidate>> {
            self.report_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reports.clone())
        }

        async fn pending_waste_items(&self) -> Result<Vec<WasteItemCandidate>> {
            self.waste_item_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.waste_items.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CandidateSource for FailingSource {
        async fn pending_reports(&self) -> Result<Vec<ReportCandidate>> {
            Err(AppError::Internal("store offline".to_string()))
        }

        async fn pending_waste_items(&self) -> Result<Vec<WasteItemCandidate>> {
            Ok(vec![])
        }
    }

    pub(crate) fn report_at(id: i32, latitude: f64, longitude: f64) -> ReportCandidate {
        ReportCandidate {
            id,
            report_type: "illegal_dump".to_string(),
            latitude,
            longitude,
            description: None,
            photo: None,
            status: ReportStatus::Pending,
            created_at: Utc::now(),
            owner_name: "Awa".to_string(),
            owner_phone: "+237 600 00 00 00".to_string(),
            owner_address: "Akwa".to_string(),
        }
    }

    pub(crate) fn waste_item_at(
        id: i32,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> WasteItemCandidate {
        WasteItemCandidate {
            id,
            waste_type: "plastic".to_string(),
            quantity: 2.0,
            address: "Bonanjo".to_string(),
            city: "Douala".to_string(),
            latitude,
            longitude,
            photo: None,
            status: WasteStatus::Pending,
            created_at: Utc::now(),
            owner_name: "Jean".to_string(),
            owner_phone: "+237 611 11 11 11".to_string(),
            owner_address: "Deido".to_string(),
        }
    }

    pub(crate) fn douala_source() -> StaticSource {
        StaticSource {
            reports: vec![report_at(1, 4.20, 9.90), report_at(2, 4.06, 9.71)],
            waste_items: vec![
                waste_item_at(10, Some(4.06), Some(9.71)),
                waste_item_at(11, Some(4.051), Some(9.701)),
                waste_item_at(12, None, None),
            ],
            ..Default::default()
        }
    }

    fn query(kind: ProximityKind) -> ProximityQuery {
        ProximityQuery {
            origin: GeoPoint::new(4.05, 9.70),
            radius_km: 5.0,
            kind,
        }
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!(ProximityKind::parse(Some("reports")), ProximityKind::Reports);
        assert_eq!(ProximityKind::parse(Some("signalements")), ProximityKind::Reports);
        assert_eq!(ProximityKind::parse(Some("wasteItems")), ProximityKind::WasteItems);
        assert_eq!(ProximityKind::parse(Some("dechets")), ProximityKind::WasteItems);
        assert_eq!(ProximityKind::parse(Some("all")), ProximityKind::Both);
        assert_eq!(ProximityKind::parse(Some("bogus")), ProximityKind::Both);
        assert_eq!(ProximityKind::parse(None), ProximityKind::Both);
    }

    #[test]
    fn test_kind_parsing_ignores_case() {
        assert_eq!(ProximityKind::parse(Some("Reports")), ProximityKind::Reports);
        assert_eq!(ProximityKind::parse(Some(" SIGNALEMENTS ")), ProximityKind::Reports);
        assert_eq!(ProximityKind::parse(Some("WasteItems")), ProximityKind::WasteItems);
        assert_eq!(ProximityKind::parse(Some("Dechets")), ProximityKind::WasteItems);
    }

    #[tokio::test]
    async fn test_both_collections_filtered_and_sorted() {
        let service = ProximityService::new(Arc::new(douala_source()));
        let results = service.find_nearby(&query(ProximityKind::Both)).await.unwrap();

        let reports = results.reports.unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].item.id, 2);

        let waste_items = results.waste_items.unwrap();
        let ids: Vec<i32> = waste_items.iter().map(|r| r.item.id).collect();
        // the item without coordinates sits at (0,0), far outside the radius
        assert_eq!(ids, vec![11, 10]);
        assert!(waste_items[0].distance_km <= waste_items[1].distance_km);
    }

    #[tokio::test]
    async fn test_only_requested_collection_is_fetched() {
        let source = Arc::new(douala_source());
        let service = ProximityService::new(source.clone());

        let results = service
            .find_nearby(&query(ProximityKind::Reports))
            .await
            .unwrap();

        assert!(results.reports.is_some());
        assert!(results.waste_items.is_none());
        assert_eq!(source.report_calls.load(Ordering::SeqCst), 1);
        assert_eq!(source.waste_item_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_coordinates_match_near_origin() {
        let source = StaticSource {
            waste_items: vec![waste_item_at(5, None, Some(0.01))],
            ..Default::default()
        };
        let service = ProximityService::new(Arc::new(source));
        let results = service
            .find_nearby(&ProximityQuery {
                origin: GeoPoint::ORIGIN,
                radius_km: 5.0,
                kind: ProximityKind::WasteItems,
            })
            .await
            .unwrap();

        assert_eq!(results.waste_items.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_source_failure_propagates() {
        let service = ProximityService::new(Arc::new(FailingSource));
        let result = service.find_nearby(&query(ProximityKind::Both)).await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
