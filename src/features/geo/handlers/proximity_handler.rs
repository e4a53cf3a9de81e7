use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::geo::dtos::{ProximityParams, ProximityResponseDto};
use crate::features::geo::services::ProximityService;
use crate::shared::types::ApiResponse;

/// Pending reports and waste items around a point, nearest first
#[utoipa::path(
    get,
    path = "/api/geo/proximite",
    params(ProximityParams),
    responses(
        (status = 200, description = "Nearby records", body = ApiResponse<ProximityResponseDto>),
        (status = 400, description = "Missing or invalid parameters"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "geo",
    security(("bearer_auth" = []))
)]
pub async fn find_nearby(
    _user: AuthenticatedUser,
    State(service): State<Arc<ProximityService>>,
    AppQuery(params): AppQuery<ProximityParams>,
) -> Result<Json<ApiResponse<ProximityResponseDto>>> {
    let query = params.into_query()?;
    let results = service.find_nearby(&query).await?;

    Ok(Json(ApiResponse::success(
        Some(ProximityResponseDto::new(&query, results)),
        None,
        None,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::geo::routes;
    use crate::features::geo::services::proximity_service::tests::douala_source;
    use crate::features::users::models::UserRole;
    use crate::shared::test_helpers::with_user;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    fn server() -> TestServer {
        let service = Arc::new(ProximityService::new(Arc::new(douala_source())));
        let app = routes::routes(service);
        TestServer::new(with_user(app, AuthenticatedUser::new(8, UserRole::Collector))).unwrap()
    }

    #[tokio::test]
    async fn test_default_returns_both_lists_sorted() {
        let response = server()
            .get("/api/geo/proximite")
            .add_query_param("latitude", "4.05")
            .add_query_param("longitude", "9.70")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        let data = &body["data"];
        assert_eq!(data["rayon"], 5.0);
        assert_eq!(data["position"]["latitude"], 4.05);

        let reports = data["reports"].as_array().unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0]["id"], 2);
        assert_eq!(reports[0]["owner"]["name"], "Awa");

        let waste_items = data["wasteItems"].as_array().unwrap();
        let distances: Vec<f64> = waste_items
            .iter()
            .map(|w| w["distanceKm"].as_f64().unwrap())
            .collect();
        assert_eq!(distances.len(), 2);
        assert!(distances[0] <= distances[1]);
        assert!(distances.iter().all(|d| *d <= 5.0));
    }

    #[tokio::test]
    async fn test_type_selects_one_collection() {
        let server = server();

        let body: Value = server
            .get("/api/geo/proximite")
            .add_query_param("latitude", "4.05")
            .add_query_param("longitude", "9.70")
            .add_query_param("type", "reports")
            .await
            .json();
        assert!(body["data"]["reports"].is_array());
        assert!(body["data"].get("wasteItems").is_none());

        for kind in ["dechets", "wasteItems"] {
            let body: Value = server
                .get("/api/geo/proximite")
                .add_query_param("latitude", "4.05")
                .add_query_param("longitude", "9.70")
                .add_query_param("type", kind)
                .await
                .json();
            assert!(body["data"]["wasteItems"].is_array());
            assert!(body["data"].get("reports").is_none());
        }
    }

    #[tokio::test]
    async fn test_missing_latitude_is_bad_request() {
        let response = server()
            .get("/api/geo/proximite")
            .add_query_param("longitude", "9.70")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Latitude and longitude are required");
    }

    #[tokio::test]
    async fn test_non_numeric_radius_is_bad_request() {
        let response = server()
            .get("/api/geo/proximite")
            .add_query_param("latitude", "4.05")
            .add_query_param("longitude", "9.70")
            .add_query_param("rayon", "wide")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Invalid parameters");
    }
}
