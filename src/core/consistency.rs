//! Linkage checks between assignments and their reports.
//!
//! These invariants hold by construction; a failure here means a bug in
//! the write path (or hand-edited rows), not a transient condition. The
//! `db --check` command runs them against the live database.

use crate::errors::{AppError, AppResult};
use crate::models::assignment::Assignment;
use crate::models::report::Report;
use std::collections::{HashMap, HashSet};

/// Verify that every report is correctly linked to its assignment:
/// the duty worker is the assignment's primary worker and the report
/// date matches the assignment date. Also rejects duplicate
/// `(date, slot_type)` pairs and reports pointing at missing assignments.
pub fn verify_linkage(assignments: &[Assignment], reports: &[Report]) -> AppResult<()> {
    let mut seen = HashSet::new();
    let mut by_id: HashMap<i64, &Assignment> = HashMap::with_capacity(assignments.len());

    for a in assignments {
        if !seen.insert((a.date, a.slot_type)) {
            return Err(AppError::ConsistencyViolation(format!(
                "duplicate slot {} {}",
                a.date_str(),
                a.slot_type.to_db_str()
            )));
        }
        if a.primary_worker_id == a.backup_worker_id {
            return Err(AppError::ConsistencyViolation(format!(
                "assignment {} has the same primary and backup worker",
                a.id
            )));
        }
        by_id.insert(a.id, a);
    }

    for r in reports {
        let a = by_id.get(&r.assignment_id).ok_or_else(|| {
            AppError::ConsistencyViolation(format!(
                "report {} references missing assignment {}",
                r.id, r.assignment_id
            ))
        })?;

        if r.duty_worker_id != a.primary_worker_id {
            return Err(AppError::ConsistencyViolation(format!(
                "report {} duty worker {} != assignment {} primary worker {}",
                r.id, r.duty_worker_id, a.id, a.primary_worker_id
            )));
        }

        if r.report_date != a.date {
            return Err(AppError::ConsistencyViolation(format!(
                "report {} date {} != assignment {} date {}",
                r.id,
                r.date_str(),
                a.id,
                a.date_str()
            )));
        }
    }

    Ok(())
}
