pub mod candidate_source;
pub mod proximity_service;

pub use candidate_source::{CandidateSource, PgCandidateSource};
pub use proximity_service::{NearbyResults, ProximityKind, ProximityQuery, ProximityService};
