pub mod history_dto;

pub use history_dto::*;
