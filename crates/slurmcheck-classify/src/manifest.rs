//! Experiment manifest.

use camino::{Utf8Path, Utf8PathBuf};
use slurmcheck_core::ExperimentId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Experiment manifest not found: {0}")]
    NotFound(Utf8PathBuf),
    #[error("Failed to read experiment manifest {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        source: std::io::Error,
    },
}

/// Ordered list of expected experiment commands.
///
/// The 1-based position of a command is its experiment ID. The same order
/// was used at submission time to build the SLURM array and the metadata
/// table, so the manifest must not be reordered between submission and
/// status checking.
#[derive(Debug, Clone)]
pub struct Manifest {
    commands: Vec<String>,
}

impl Manifest {
    /// Load a manifest file, one command per line.
    ///
    /// A missing manifest is an operator misconfiguration, never a job
    /// status signal, so it is surfaced as its own error.
    pub fn load(path: &Utf8Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            return Err(ManifestError::NotFound(path.to_owned()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_owned(),
            source,
        })?;
        Ok(Self {
            commands: content.lines().map(str::to_string).collect(),
        })
    }

    /// Number of experiments.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Command for one experiment ID (1-based).
    pub fn command(&self, id: ExperimentId) -> Option<&str> {
        id.checked_sub(1)
            .and_then(|idx| self.commands.get(idx))
            .map(String::as_str)
    }

    /// Iterate (experiment ID, command) pairs in manifest order.
    pub fn iter(&self) -> impl Iterator<Item = (ExperimentId, &str)> {
        self.commands
            .iter()
            .enumerate()
            .map(|(idx, cmd)| (idx + 1, cmd.as_str()))
    }
}
