//! Fairness allocator: picks the two least-loaded workers for one slot.

use crate::core::counters::FairnessCounters;
use crate::errors::{AppError, AppResult};
use crate::models::worker::Worker;

/// Minimum pool size for a single slot (one primary, one backup).
pub const MIN_POOL: usize = 2;

/// Select the primary and backup worker for one duty slot.
///
/// The pool is sorted ascending by the current counter; ties keep the
/// pool's input order, so the caller must hand in a deterministically
/// ordered roster (ascending by worker id) for reproducible schedules.
/// The sort here is stable, which makes that tie-break explicit rather
/// than an accident of the algorithm.
///
/// The caller commits the pair to the counters only after the slot is
/// accepted, so a failed slot never skews later picks.
pub fn select_pair<'a>(
    pool: &'a [Worker],
    counters: &FairnessCounters,
) -> AppResult<(&'a Worker, &'a Worker)> {
    if pool.len() < MIN_POOL {
        return Err(AppError::InsufficientWorkers {
            found: pool.len(),
            required: MIN_POOL,
        });
    }

    let mut ranked: Vec<&Worker> = pool.iter().collect();
    ranked.sort_by_key(|w| counters.get(w.id));

    Ok((ranked[0], ranked[1]))
}
