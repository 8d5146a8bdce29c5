//! Regeneration controller: turns (year, month) into a freshly persisted
//! batch of assignments plus their report skeletons, replacing whatever
//! the month held before. Re-running for the same month is idempotent in
//! count and shape; it never appends.

use crate::core::generator::generate_month;
use crate::core::reports::{ReportContent, ReportCutoff, synthesize_report};
use crate::core::store::{DutyStore, RegenOutcome};
use crate::errors::{AppError, AppResult};
use crate::utils::date::DateRange;

/// Tunables for one regeneration run.
pub struct RegenOptions {
    /// Whole-run minimum roster size. The allocator's hard floor is 2;
    /// operations usually want more headroom (default config: 4).
    pub min_workers: usize,
    /// Which assignments get a report skeleton.
    pub cutoff: ReportCutoff,
}

/// Replace the whole month in one atomic store operation.
///
/// Any failure -- roster too small, generation error, persistence error --
/// aborts the entire call and surfaces as a single aggregate error naming
/// the month. A partially regenerated month is never observable.
pub fn regenerate_month(
    store: &mut dyn DutyStore,
    year: i32,
    month: u32,
    opts: &RegenOptions,
    content: &mut dyn ReportContent,
) -> AppResult<RegenOutcome> {
    run(store, year, month, opts, content)
        .map_err(|e| AppError::regeneration(year, month, e))
}

fn run(
    store: &mut dyn DutyStore,
    year: i32,
    month: u32,
    opts: &RegenOptions,
    content: &mut dyn ReportContent,
) -> AppResult<RegenOutcome> {
    let range = DateRange::month(year, month)?;

    let roster = store.list_eligible_workers()?;
    if roster.len() < opts.min_workers {
        return Err(AppError::InsufficientWorkers {
            found: roster.len(),
            required: opts.min_workers,
        });
    }

    let generated = generate_month(year, month, &roster)?;

    let cutoff = opts.cutoff;
    store.replace_month(&range, &generated.assignments, &mut |assignment| {
        synthesize_report(assignment, cutoff, content)
    })
}
