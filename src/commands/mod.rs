//! Report command implementations.

pub mod date_report;
pub mod zip_report;

pub use date_report::{DateReportCommand, DateReportStats};
pub use zip_report::{ZipReportCommand, ZipReportStats};
