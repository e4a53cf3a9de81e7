pub mod waste_item;

pub use waste_item::{CreateWasteItem, UpdateWasteItem, WasteItem, WasteStatus};
