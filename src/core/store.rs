//! Storage contract of the scheduling core.
//!
//! The core never talks to SQLite (or anything else) directly; it goes
//! through this trait. `replace_month` is deliberately one call: the
//! delete-old / insert-new / insert-reports sequence must be atomic, and
//! only the store knows how to make it so (a transaction here, something
//! else elsewhere). Everything before that call is pure computation that
//! can be thrown away on failure.

use crate::errors::AppResult;
use crate::models::assignment::{Assignment, AssignmentView, NewAssignment};
use crate::models::report::{NewReport, Report, ReportView};
use crate::models::worker::Worker;
use crate::utils::date::DateRange;

/// Result of one atomic month replacement.
#[derive(Debug)]
pub struct RegenOutcome {
    /// Assignments removed from the target range before inserting.
    pub deleted: usize,
    /// The freshly persisted batch, ids and timestamps filled in.
    pub assignments: Vec<Assignment>,
    /// Number of reports synthesized and persisted alongside.
    pub reports: usize,
}

/// Narrow, storage-agnostic persistence collaborator.
///
/// `&mut self` throughout: one store handle serializes its operations, so
/// two regenerations of the same month cannot interleave through it.
pub trait DutyStore {
    /// All workers eligible for scheduling (`excluded = false`), ordered
    /// ascending by id. Downstream tie-breaking depends on that order.
    fn list_eligible_workers(&mut self) -> AppResult<Vec<Worker>>;

    /// Atomically replace every assignment (and, transitively, every
    /// report) in `range` with the given batch. `synthesize` is invoked
    /// once per inserted assignment, inside the same atomic unit, and may
    /// decline (cutoff policy). On any error nothing is kept.
    fn replace_month(
        &mut self,
        range: &DateRange,
        batch: &[NewAssignment],
        synthesize: &mut dyn FnMut(&Assignment) -> Option<NewReport>,
    ) -> AppResult<RegenOutcome>;

    fn query_assignments(&mut self, range: &DateRange) -> AppResult<Vec<Assignment>>;

    fn query_reports(&mut self, range: &DateRange) -> AppResult<Vec<Report>>;

    /// Worker-joined assignment views. Workers are resolved through the
    /// assignment's foreign keys, never by date lookup.
    fn assignment_views(&mut self, range: &DateRange) -> AppResult<Vec<AssignmentView>>;

    /// Worker-joined report views, resolved through `duty_worker_id`.
    fn report_views(&mut self, range: &DateRange) -> AppResult<Vec<ReportView>>;
}
