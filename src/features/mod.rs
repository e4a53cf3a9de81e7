pub mod auth;
pub mod collections;
pub mod geo;
pub mod history;
pub mod reports;
pub mod stats;
pub mod users;
pub mod waste_items;
