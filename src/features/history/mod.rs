//! Per-user activity timeline (`GET /api/history`).

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::HistoryService;
