//! Per-job log classification.

use crate::manifest::Manifest;
use camino::Utf8PathBuf;
use slurmcheck_config::ResolvedPaths;
use slurmcheck_core::{scan_log, BucketSet, Stage};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifyError {
    /// The log exists but could not be read. Distinct from an absent log,
    /// which means the job has not started.
    #[error("Failed to read job log {path}: {source}")]
    LogRead {
        path: Utf8PathBuf,
        source: std::io::Error,
    },
}

/// Bucket every experiment ID by the stage its log has reached.
///
/// For each ID: no log file means the job is still queued and nothing is
/// opened; otherwise the log is read in full and scanned against that ID's
/// manifest command. A log with no recognized marker lands in the Unknown
/// bucket. Every ID ends up in exactly one bucket, in ascending order.
pub fn classify_jobs(
    manifest: &Manifest,
    paths: &ResolvedPaths,
    job: u64,
) -> Result<BucketSet, ClassifyError> {
    let mut buckets = BucketSet::default();

    for (id, command) in manifest.iter() {
        let log_path = paths.log_path(job, id);
        if !log_path.exists() {
            buckets.push(id, Stage::Queued);
            continue;
        }

        let content =
            std::fs::read_to_string(&log_path).map_err(|source| ClassifyError::LogRead {
                path: log_path.clone(),
                source,
            })?;

        match scan_log(&content, command) {
            Some(stage) => buckets.push(id, stage),
            None => {
                tracing::warn!("No lifecycle marker in {log_path}, bucketing id {id} as unknown");
                buckets.push(id, Stage::Unknown);
            }
        }
    }

    Ok(buckets)
}
