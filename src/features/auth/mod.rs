//! Authentication: password login, stateless JWT sessions and role guards.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Access |
//! |--------|----------|--------|
//! | POST | `/api/auth/register` | public |
//! | POST | `/api/auth/login` | public |
//! | POST | `/api/auth/refresh` | public |
//! | POST | `/api/auth/logout` | authenticated |

pub mod dtos;
pub mod guards;
pub mod handlers;
pub mod model;
pub mod password;
pub mod routes;
pub mod services;

pub use services::{AuthService, SessionService};
