//! Job lifecycle stages.

use serde::{Deserialize, Serialize};

/// 1-based position of a command in the experiment manifest.
///
/// The same position indexes the manifest, the per-job log filename and the
/// metadata table, so it must never be renumbered between runs.
pub type ExperimentId = usize;

/// Lifecycle stage of one experiment job at observation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// No log file yet; job still waiting in the scheduler queue
    Queued,
    /// Input data being staged to the compute node's scratch space
    TransferringIn,
    /// Provided command currently executing
    Running,
    /// Output data being staged back to shared storage
    TransferringOut,
    /// Job finished successfully
    Finished,
    /// Command exited with an error
    Failed,
    /// Cancelled by the scheduler, typically a time limit
    TimedOut,
    /// Log exists but contains no recognized marker
    Unknown,
}

impl Stage {
    /// All stages in canonical report order.
    pub const CANONICAL: [Stage; 8] = [
        Stage::Queued,
        Stage::TransferringIn,
        Stage::Running,
        Stage::TransferringOut,
        Stage::Finished,
        Stage::Failed,
        Stage::TimedOut,
        Stage::Unknown,
    ];

    /// Section label used by the console report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Queued => "QUEUED",
            Self::TransferringIn => "TRANSFERRING IN",
            Self::Running => "RUNNING",
            Self::TransferringOut => "TRANSFERRING OUT",
            Self::Finished => "FINISHED",
            Self::Failed => "FAILED",
            Self::TimedOut => "TIMED OUT",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Whether the stage is a terminal outcome rather than a progress marker.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished | Self::Failed | Self::TimedOut)
    }
}
