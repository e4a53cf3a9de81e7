pub mod proximity_dto;

pub use proximity_dto::*;
