//! Waste items declared by users for pickup.
//!
//! Items start `pending` and become `collected` through the collections
//! feature. Only the owner or an admin may edit or delete an item.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::WasteItemService;
