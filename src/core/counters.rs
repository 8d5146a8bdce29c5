use crate::models::worker::Worker;
use std::collections::HashMap;

/// Per-worker running count of slots assigned in the current run.
/// Scoped to a single generation; never persisted.
#[derive(Debug, Clone, Default)]
pub struct FairnessCounters {
    counts: HashMap<i64, u32>,
}

impl FairnessCounters {
    pub fn for_roster(roster: &[Worker]) -> Self {
        let mut counts = HashMap::with_capacity(roster.len());
        for w in roster {
            counts.insert(w.id, 0);
        }
        Self { counts }
    }

    pub fn get(&self, worker_id: i64) -> u32 {
        self.counts.get(&worker_id).copied().unwrap_or(0)
    }

    /// Record a committed slot: both the primary and the backup worker
    /// carry the load, so later picks in the same run see it.
    pub fn commit_pair(&mut self, primary_id: i64, backup_id: i64) {
        *self.counts.entry(primary_id).or_insert(0) += 1;
        *self.counts.entry(backup_id).or_insert(0) += 1;
    }

    /// Largest minus smallest count across the roster. Used by the
    /// fairness tests; 0 or 1 after a balanced run.
    pub fn spread(&self) -> u32 {
        let max = self.counts.values().copied().max().unwrap_or(0);
        let min = self.counts.values().copied().min().unwrap_or(0);
        max - min
    }
}
