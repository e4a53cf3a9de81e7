pub mod waste_item_dto;

pub use waste_item_dto::*;
