use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::collections::models::CollectionItem;
use crate::features::users::dtos::OwnerSummaryDto;
use crate::features::waste_items::dtos::WasteItemResponseDto;
use crate::features::waste_items::models::WasteStatus;

/// Query parameters for listing collections
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CollectionFilterQuery {
    /// Only return items with this status
    pub status: Option<WasteStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CollectionItemDto {
    #[serde(flatten)]
    pub item: WasteItemResponseDto,
    pub owner: OwnerSummaryDto,
}

impl From<CollectionItem> for CollectionItemDto {
    fn from(c: CollectionItem) -> Self {
        Self {
            item: c.item.into(),
            owner: OwnerSummaryDto {
                name: c.owner_name,
                phone: c.owner_phone,
                address: c.owner_address,
            },
        }
    }
}
