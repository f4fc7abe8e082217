//! Political contribution aggregation.
//!
//! This library ingests pipe-delimited FEC itemized contribution records
//! and produces two aggregate reports, each carrying a running median,
//! count, and total per group:
//!
//! - **Zip report**: grouped by (recipient committee, zip5), one line per
//!   accepted record in input order, reflecting the group's state after
//!   that record.
//! - **Date report**: grouped by (recipient committee, transaction date),
//!   one line per distinct group, sorted by key, reflecting final state.
//!
//! # Example
//!
//! ```rust,no_run
//! use political_donors::commands::{DateReportCommand, ZipReportCommand};
//! use std::fs::File;
//!
//! let mut zip_out = File::create("medianvals_by_zip.txt").unwrap();
//! ZipReportCommand::new().run("itcont.txt", &mut zip_out).unwrap();
//!
//! let mut date_out = File::create("medianvals_by_date.txt").unwrap();
//! DateReportCommand::new().run("itcont.txt", &mut date_out).unwrap();
//! ```

pub mod accumulator;
pub mod commands;
pub mod output;
pub mod record;
pub mod rules;

// Re-export commonly used types
pub use accumulator::{GroupAccumulator, GroupStats};
pub use record::{Record, ReportError};
pub use rules::{DateRule, GroupKey, ReportRule, ZipRule};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::accumulator::{GroupAccumulator, GroupStats};
    pub use crate::commands::{DateReportCommand, ZipReportCommand};
    pub use crate::record::{Record, ReportError};
    pub use crate::rules::{DateRule, GroupKey, ReportRule, ZipRule};
}
