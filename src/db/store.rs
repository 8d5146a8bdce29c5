//! SQLite implementation of the core's `DutyStore` contract.

use crate::core::store::{DutyStore, RegenOutcome};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::assignment::{Assignment, AssignmentView, NewAssignment};
use crate::models::report::{NewReport, Report, ReportView};
use crate::models::worker::Worker;
use crate::utils::date::DateRange;
use std::collections::HashMap;

fn resolve_worker(workers: &HashMap<i64, Worker>, id: i64) -> AppResult<Worker> {
    workers
        .get(&id)
        .cloned()
        .ok_or(AppError::UnknownWorker(id))
}

impl DutyStore for DbPool {
    fn list_eligible_workers(&mut self) -> AppResult<Vec<Worker>> {
        queries::list_eligible_workers(&self.conn)
    }

    /// Delete-then-insert for the whole range, in one SQLite transaction.
    /// Reports go first so no orphan can survive even with the cascade
    /// pragma off; on any error the transaction rolls back and the month
    /// is untouched.
    fn replace_month(
        &mut self,
        range: &DateRange,
        batch: &[NewAssignment],
        synthesize: &mut dyn FnMut(&Assignment) -> Option<NewReport>,
    ) -> AppResult<RegenOutcome> {
        let tx = self.conn.transaction()?;

        queries::delete_reports_in_range(&tx, range)?;
        let deleted = queries::delete_assignments_in_range(&tx, range)?;

        let mut assignments = Vec::with_capacity(batch.len());
        let mut reports = 0;

        for na in batch {
            let assignment = queries::insert_assignment(&tx, na)?;
            if let Some(nr) = synthesize(&assignment) {
                queries::insert_report(&tx, &nr)?;
                reports += 1;
            }
            assignments.push(assignment);
        }

        tx.commit()?;

        Ok(RegenOutcome {
            deleted,
            assignments,
            reports,
        })
    }

    fn query_assignments(&mut self, range: &DateRange) -> AppResult<Vec<Assignment>> {
        queries::query_assignments(&self.conn, range)
    }

    fn query_reports(&mut self, range: &DateRange) -> AppResult<Vec<Report>> {
        queries::query_reports(&self.conn, range)
    }

    fn assignment_views(&mut self, range: &DateRange) -> AppResult<Vec<AssignmentView>> {
        let assignments = queries::query_assignments(&self.conn, range)?;
        let workers = queries::workers_by_id(&self.conn)?;

        assignments
            .into_iter()
            .map(|assignment| {
                // Join strictly by the worker foreign keys; a weekend date
                // has two assignments, so a date-based join would be wrong.
                let primary_worker = resolve_worker(&workers, assignment.primary_worker_id)?;
                let backup_worker = resolve_worker(&workers, assignment.backup_worker_id)?;
                Ok(AssignmentView {
                    assignment,
                    primary_worker,
                    backup_worker,
                })
            })
            .collect()
    }

    fn report_views(&mut self, range: &DateRange) -> AppResult<Vec<ReportView>> {
        let reports = queries::query_reports(&self.conn, range)?;
        let workers = queries::workers_by_id(&self.conn)?;

        reports
            .into_iter()
            .map(|report| {
                let duty_worker = resolve_worker(&workers, report.duty_worker_id)?;
                Ok(ReportView {
                    report,
                    duty_worker,
                })
            })
            .collect()
    }
}
