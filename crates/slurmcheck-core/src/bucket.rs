//! Partition of experiment IDs by lifecycle stage.

use crate::stage::{ExperimentId, Stage};

/// One classifier run's output: every experiment ID in exactly one bucket.
///
/// IDs are pushed in ascending order by the classifier, so each bucket stays
/// sorted and the report output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketSet {
    queued: Vec<ExperimentId>,
    transferring_in: Vec<ExperimentId>,
    running: Vec<ExperimentId>,
    transferring_out: Vec<ExperimentId>,
    finished: Vec<ExperimentId>,
    failed: Vec<ExperimentId>,
    timed_out: Vec<ExperimentId>,
    unknown: Vec<ExperimentId>,
}

impl BucketSet {
    /// Add an ID to the bucket for `stage`.
    pub fn push(&mut self, id: ExperimentId, stage: Stage) {
        self.bucket_mut(stage).push(id);
    }

    /// IDs currently in `stage`, in ascending order.
    pub fn ids(&self, stage: Stage) -> &[ExperimentId] {
        match stage {
            Stage::Queued => &self.queued,
            Stage::TransferringIn => &self.transferring_in,
            Stage::Running => &self.running,
            Stage::TransferringOut => &self.transferring_out,
            Stage::Finished => &self.finished,
            Stage::Failed => &self.failed,
            Stage::TimedOut => &self.timed_out,
            Stage::Unknown => &self.unknown,
        }
    }

    fn bucket_mut(&mut self, stage: Stage) -> &mut Vec<ExperimentId> {
        match stage {
            Stage::Queued => &mut self.queued,
            Stage::TransferringIn => &mut self.transferring_in,
            Stage::Running => &mut self.running,
            Stage::TransferringOut => &mut self.transferring_out,
            Stage::Finished => &mut self.finished,
            Stage::Failed => &mut self.failed,
            Stage::TimedOut => &mut self.timed_out,
            Stage::Unknown => &mut self.unknown,
        }
    }

    /// Iterate buckets in canonical report order.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, &[ExperimentId])> {
        Stage::CANONICAL
            .iter()
            .map(move |&stage| (stage, self.ids(stage)))
    }

    /// Total number of bucketed IDs.
    pub fn total(&self) -> usize {
        Stage::CANONICAL
            .iter()
            .map(|&stage| self.ids(stage).len())
            .sum()
    }
}
