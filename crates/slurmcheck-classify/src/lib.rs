//! Job classification for slurmcheck.
//!
//! Loads the experiment manifest and buckets every experiment ID by the
//! lifecycle stage its SLURM log has reached.

pub mod classify;
pub mod manifest;

pub use classify::{classify_jobs, ClassifyError};
pub use manifest::{Manifest, ManifestError};
