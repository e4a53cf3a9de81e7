pub mod waste_item_service;

pub use waste_item_service::WasteItemService;
