//! User account management.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Access |
//! |--------|----------|--------|
//! | POST | `/api/users` | public |
//! | GET | `/api/users/me` | authenticated |
//! | GET | `/api/users` | admin |
//! | GET | `/api/users/{id}` | authenticated |
//! | PUT | `/api/users/{id}` | self or admin |
//! | DELETE | `/api/users/{id}` | admin |
//! | POST | `/api/users/change-password` | authenticated |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::UserService;
