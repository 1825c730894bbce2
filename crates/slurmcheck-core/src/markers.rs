//! Marker strings written by the SLURM job wrapper.
//!
//! The wrapper appends one of these to the job log as it moves through its
//! lifecycle. Matching is substring containment, not exact-line equality.
//! The running marker is a prefix: the wrapper echoes the exact command it
//! was given after it, which lets the scanner reject logs that belong to a
//! different experiment.

/// Input data being copied to the compute node (prefix, path follows).
pub const TRANSFER_IN_PREFIX: &str = "Moving input data to the compute node's scratch space: ";

/// Command launch (prefix, the exact manifest command follows).
pub const RUNNING_PREFIX: &str = "Running provided command: ";

/// Output data being copied back to shared storage.
pub const TRANSFER_OUT_PROMPT: &str = "Moving output data back to DFS";

/// Terminal: job completed successfully.
pub const FINISHED_PROMPT: &str = "Job finished successfully!";

/// Terminal: command exited non-zero.
pub const FAILED_PROMPT: &str = "Command failed!";

/// Terminal: SLURM cancelled the job (time limit or scancel).
pub const TIMEOUT_PROMPT: &str = "CANCELLED";
