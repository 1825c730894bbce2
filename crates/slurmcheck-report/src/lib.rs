//! Reporting for slurmcheck.
//!
//! Extracts metadata rows for failed and timed-out experiments into detail
//! tables, and prints the bucketed ID lists for the operator.

pub mod emit;
pub mod extract;

pub use emit::{print_report, print_written};
pub use extract::{extract_details, ExtractionOutcome, MetadataTable, ReportError};
