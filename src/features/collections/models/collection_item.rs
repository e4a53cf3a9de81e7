use sqlx::FromRow;

use crate::features::waste_items::models::WasteItem;

/// A waste item joined with its owner's contact details
#[derive(Debug, Clone, FromRow)]
pub struct CollectionItem {
    #[sqlx(flatten)]
    pub item: WasteItem,
    pub owner_name: String,
    pub owner_phone: String,
    pub owner_address: String,
}
