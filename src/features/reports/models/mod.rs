pub mod report;

pub use report::{CreateReport, Report, ReportStatus, UpdateReport};
