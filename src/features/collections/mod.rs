//! Pickup workflow for collectors.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Access |
//! |--------|----------|--------|
//! | GET | `/api/collections/pending` | collector |
//! | PUT | `/api/collections/{id}/validate` | collector |
//! | GET | `/api/collections?status=` | authenticated |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CollectionService;
