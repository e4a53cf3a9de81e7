pub mod candidate;

pub use candidate::{ReportCandidate, WasteItemCandidate};
