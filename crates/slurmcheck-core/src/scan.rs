//! Single-pass log scanner.
//!
//! Reduces one job log to the most advanced lifecycle stage it records.

use crate::markers::{
    FAILED_PROMPT, FINISHED_PROMPT, RUNNING_PREFIX, TIMEOUT_PROMPT, TRANSFER_IN_PREFIX,
    TRANSFER_OUT_PROMPT,
};
use crate::stage::Stage;

/// One boolean per marker, set as the scan encounters them.
///
/// A job log is a monotonically growing record of stages already passed, so
/// later markers never invalidate earlier ones; resolution picks the most
/// advanced flag rather than the first.
#[derive(Debug, Clone, Copy, Default)]
struct StageFlags {
    transferring_in: bool,
    running: bool,
    transferring_out: bool,
    finished: bool,
    failed: bool,
    timed_out: bool,
}

impl StageFlags {
    /// Highest-priority true flag, terminal outcomes first.
    fn resolve(self) -> Option<Stage> {
        if self.timed_out {
            Some(Stage::TimedOut)
        } else if self.failed {
            Some(Stage::Failed)
        } else if self.finished {
            Some(Stage::Finished)
        } else if self.transferring_out {
            Some(Stage::TransferringOut)
        } else if self.running {
            Some(Stage::Running)
        } else if self.transferring_in {
            Some(Stage::TransferringIn)
        } else {
            None
        }
    }
}

/// Scan a job log and return the stage it has reached.
///
/// `expected_command` is the manifest line for this experiment ID; the
/// running marker only counts when the wrapper echoed exactly this command,
/// which guards against a misconfigured log directory attributing another
/// experiment's log to this ID.
///
/// Scanning stops at the first terminal marker in file order. Returns `None`
/// when the log contains none of the markers (truncated or foreign log).
pub fn scan_log(content: &str, expected_command: &str) -> Option<Stage> {
    let running_marker = format!("{RUNNING_PREFIX}{expected_command}");
    let mut flags = StageFlags::default();

    for line in content.lines() {
        // Terminal markers end the scan; nothing after them changes the outcome.
        if line.contains(FINISHED_PROMPT) {
            flags.finished = true;
            break;
        }
        if line.contains(FAILED_PROMPT) {
            flags.failed = true;
            break;
        }
        if line.contains(TIMEOUT_PROMPT) {
            flags.timed_out = true;
            break;
        }

        // Progress markers accumulate; all three may be set by the end.
        if line.contains(TRANSFER_IN_PREFIX) {
            flags.transferring_in = true;
        }
        if line.contains(&running_marker) {
            flags.running = true;
        }
        if line.contains(TRANSFER_OUT_PROMPT) {
            flags.transferring_out = true;
        }
    }

    flags.resolve()
}
