use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// Waste item status enum matching database enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "waste_item_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WasteStatus {
    Pending,
    Collected,
}

impl std::fmt::Display for WasteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WasteStatus::Pending => write!(f, "pending"),
            WasteStatus::Collected => write!(f, "collected"),
        }
    }
}

/// Database model for a waste item awaiting (or past) pickup
#[derive(Debug, Clone, FromRow)]
pub struct WasteItem {
    pub id: i32,
    pub waste_type: String,
    pub quantity: f64,
    pub address: String,
    pub city: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub photo: Option<String>,
    pub status: WasteStatus,
    pub user_id: i32,
    pub collected_by: Option<i32>,
    pub collected_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct CreateWasteItem {
    pub waste_type: String,
    pub quantity: f64,
    pub address: String,
    pub city: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub photo: Option<String>,
    pub user_id: i32,
}

/// Partial update; `None` leaves the column untouched
#[derive(Debug, Default)]
pub struct UpdateWasteItem {
    pub waste_type: Option<String>,
    pub quantity: Option<f64>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub photo: Option<String>,
}
