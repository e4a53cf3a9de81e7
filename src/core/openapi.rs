use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::collections::{dtos as collections_dtos, handlers as collections_handlers};
use crate::features::geo::{dtos as geo_dtos, handlers as geo_handlers};
use crate::features::history::{dtos as history_dtos, handlers as history_handlers};
use crate::features::reports::{
    dtos as reports_dtos, handlers as reports_handlers, models as reports_models,
};
use crate::features::stats::{dtos as stats_dtos, handlers as stats_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers, models as users_models};
use crate::features::waste_items::{
    dtos as waste_items_dtos, handlers as waste_items_handlers, models as waste_items_models,
};
use crate::shared::geo::GeoPoint;
use crate::shared::types::{ApiResponse, Meta, MessageDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handlers::register,
        auth::handlers::login,
        auth::handlers::refresh_token,
        auth::handlers::logout,
        // Users
        users_handlers::create_user,
        users_handlers::get_me,
        users_handlers::list_users,
        users_handlers::get_user,
        users_handlers::update_user,
        users_handlers::delete_user,
        users_handlers::change_password,
        // Waste items
        waste_items_handlers::list_waste_items,
        waste_items_handlers::get_waste_item,
        waste_items_handlers::create_waste_item,
        waste_items_handlers::update_waste_item,
        waste_items_handlers::delete_waste_item,
        // Reports
        reports_handlers::list_reports,
        reports_handlers::get_report,
        reports_handlers::create_report,
        reports_handlers::update_report,
        reports_handlers::delete_report,
        // Collections
        collections_handlers::list_pending,
        collections_handlers::validate_collection,
        collections_handlers::list_collections,
        // History
        history_handlers::get_history,
        // Stats (admin)
        stats_handlers::get_dashboard,
        stats_handlers::get_waste_item_stats,
        stats_handlers::get_report_stats,
        // Geo
        geo_handlers::find_nearby,
    ),
    components(
        schemas(
            Meta,
            MessageDto,
            GeoPoint,
            ApiResponse<MessageDto>,
            // Auth
            auth::dtos::LoginRequestDto,
            auth::dtos::RefreshTokenRequestDto,
            auth::dtos::AuthResponseDto,
            auth::services::TokenPair,
            auth::model::AuthenticatedUser,
            ApiResponse<auth::dtos::AuthResponseDto>,
            ApiResponse<auth::services::TokenPair>,
            // Users
            users_models::UserRole,
            users_dtos::CreateUserDto,
            users_dtos::UpdateUserDto,
            users_dtos::ChangePasswordDto,
            users_dtos::UserResponseDto,
            users_dtos::OwnerSummaryDto,
            ApiResponse<users_dtos::UserResponseDto>,
            ApiResponse<Vec<users_dtos::UserResponseDto>>,
            // Waste items
            waste_items_models::WasteStatus,
            waste_items_dtos::CreateWasteItemDto,
            waste_items_dtos::UpdateWasteItemDto,
            waste_items_dtos::WasteItemResponseDto,
            ApiResponse<waste_items_dtos::WasteItemResponseDto>,
            ApiResponse<Vec<waste_items_dtos::WasteItemResponseDto>>,
            // Reports
            reports_models::ReportStatus,
            reports_dtos::CreateReportDto,
            reports_dtos::UpdateReportDto,
            reports_dtos::ReportResponseDto,
            ApiResponse<reports_dtos::ReportResponseDto>,
            ApiResponse<Vec<reports_dtos::ReportResponseDto>>,
            // Collections
            collections_dtos::CollectionItemDto,
            ApiResponse<Vec<collections_dtos::CollectionItemDto>>,
            // History
            history_dtos::HistoryKind,
            history_dtos::HistoryDetails,
            history_dtos::WasteItemDetails,
            history_dtos::ReportDetails,
            history_dtos::HistoryEntryDto,
            history_dtos::HistoryResponseDto,
            ApiResponse<history_dtos::HistoryResponseDto>,
            // Stats
            stats_dtos::DashboardStatsDto,
            stats_dtos::CountByKeyDto,
            stats_dtos::BreakdownDto,
            ApiResponse<stats_dtos::DashboardStatsDto>,
            ApiResponse<stats_dtos::BreakdownDto>,
            // Geo
            geo_dtos::NearbyReportDto,
            geo_dtos::NearbyWasteItemDto,
            geo_dtos::ProximityResponseDto,
            ApiResponse<geo_dtos::ProximityResponseDto>,
        )
    ),
    tags(
        (name = "auth", description = "Registration, login and session tokens"),
        (name = "users", description = "User accounts"),
        (name = "waste-items", description = "Waste items declared for pickup"),
        (name = "reports", description = "Illegal dumping site reports"),
        (name = "collections", description = "Pickup workflow for collectors"),
        (name = "history", description = "Per-user activity history"),
        (name = "stats", description = "Admin statistics"),
        (name = "geo", description = "Proximity search")
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Waste Collection API",
        version = "0.1.0",
        description = "API documentation for the waste collection coordination service",
    )
)]
pub struct ApiDoc;

/// Adds the Bearer JWT security scheme to the OpenAPI document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_core_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/auth/login",
            "/api/auth/refresh",
            "/api/geo/proximite",
            "/api/collections/{id}/validate",
            "/api/users/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
