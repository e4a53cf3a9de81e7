//! Proximity search over pending reports and waste items.
//!
//! `GET /api/geo/proximite?latitude=&longitude=&rayon=&type=`
//!
//! Candidates are loaded through [`services::CandidateSource`] and ranked by
//! haversine distance with a linear scan. Waste items stored without
//! coordinates are treated as lying at (0,0).

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{PgCandidateSource, ProximityService};
