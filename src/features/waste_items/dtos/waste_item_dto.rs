use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::waste_items::models::{
    CreateWasteItem, UpdateWasteItem, WasteItem, WasteStatus,
};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWasteItemDto {
    #[validate(length(min = 1, max = 64, message = "Waste type is required"))]
    pub waste_type: String,

    #[validate(range(exclusive_min = 0.0, message = "Quantity must be positive"))]
    pub quantity: f64,

    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,

    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,

    #[validate(url(message = "Photo must be a valid URL"))]
    #[serde(default)]
    pub photo: Option<String>,
}

impl CreateWasteItemDto {
    pub fn into_model(self, user_id: i32) -> CreateWasteItem {
        CreateWasteItem {
            waste_type: self.waste_type,
            quantity: self.quantity,
            address: self.address,
            city: self.city,
            latitude: self.latitude,
            longitude: self.longitude,
            photo: self.photo,
            user_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWasteItemDto {
    #[validate(length(min = 1, max = 64, message = "Waste type cannot be empty"))]
    #[serde(default)]
    pub waste_type: Option<String>,

    #[validate(range(exclusive_min = 0.0, message = "Quantity must be positive"))]
    #[serde(default)]
    pub quantity: Option<f64>,

    #[validate(length(min = 1, message = "Address cannot be empty"))]
    #[serde(default)]
    pub address: Option<String>,

    #[validate(length(min = 1, message = "City cannot be empty"))]
    #[serde(default)]
    pub city: Option<String>,

    #[serde(default)]
    pub latitude: Option<f64>,

    #[serde(default)]
    pub longitude: Option<f64>,

    #[validate(url(message = "Photo must be a valid URL"))]
    #[serde(default)]
    pub photo: Option<String>,
}

impl From<UpdateWasteItemDto> for UpdateWasteItem {
    fn from(dto: UpdateWasteItemDto) -> Self {
        Self {
            waste_type: dto.waste_type,
            quantity: dto.quantity,
            address: dto.address,
            city: dto.city,
            latitude: dto.latitude,
            longitude: dto.longitude,
            photo: dto.photo,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WasteItemResponseDto {
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

impl From<WasteItem> for WasteItemResponseDto {
    fn from(w: WasteItem) -> Self {
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
            user_id: w.user_id,
            collected_by: w.collected_by,
            collected_at: w.collected_at,
            created_at: w.created_at,
            updated_at: w.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> CreateWasteItemDto {
        CreateWasteItemDto {
            waste_type: "plastic".to_string(),
            quantity: 2.5,
            address: "Rue Joss".to_string(),
            city: "Douala".to_string(),
            latitude: Some(4.05),
            longitude: None,
            photo: None,
        }
    }

    #[test]
    fn test_valid_item_passes() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn test_quantity_must_be_positive() {
        let zero = CreateWasteItemDto {
            quantity: 0.0,
            ..dto()
        };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_coordinates_are_optional_in_payload() {
        let dto: CreateWasteItemDto = serde_json::from_str(
            r#"{"wasteType":"glass","quantity":1,"address":"Akwa","city":"Douala"}"#,
        )
        .unwrap();
        assert!(dto.latitude.is_none() && dto.longitude.is_none());
        assert_eq!(dto.into_model(3).user_id, 3);
    }
}
