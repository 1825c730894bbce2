//! Core types for slurmcheck.
//!
//! Lifecycle stages, the marker vocabulary written by the SLURM job
//! wrapper, and the scanner that reduces one job log to a single stage.

pub mod bucket;
pub mod markers;
pub mod scan;
pub mod stage;

pub use bucket::BucketSet;
pub use scan::scan_log;
pub use stage::{ExperimentId, Stage};
