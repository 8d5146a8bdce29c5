//! Regeneration controller tests against an in-memory store, so the
//! atomic-replace contract is exercised without SQLite in the way.

use chrono::NaiveDate;
use dutyrota::core::consistency::verify_linkage;
use dutyrota::core::regenerate::{RegenOptions, regenerate_month};
use dutyrota::core::reports::{DefaultContent, ReportCutoff};
use dutyrota::core::store::{DutyStore, RegenOutcome};
use dutyrota::errors::{AppError, AppResult};
use dutyrota::models::assignment::{Assignment, AssignmentView, NewAssignment};
use dutyrota::models::report::{NewReport, Report, ReportView};
use dutyrota::models::worker::Worker;
use dutyrota::utils::date::DateRange;

#[derive(Default)]
struct MemStore {
    workers: Vec<Worker>,
    assignments: Vec<Assignment>,
    reports: Vec<Report>,
    next_assignment_id: i64,
    next_report_id: i64,
}

impl MemStore {
    fn with_roster(n: usize) -> Self {
        Self {
            workers: (1..=n as i64)
                .map(|i| Worker::new(i, &format!("W{}", i)))
                .collect(),
            next_assignment_id: 1,
            next_report_id: 1,
            ..Default::default()
        }
    }
}

impl DutyStore for MemStore {
    fn list_eligible_workers(&mut self) -> AppResult<Vec<Worker>> {
        let mut out: Vec<Worker> = self
            .workers
            .iter()
            .filter(|w| !w.excluded)
            .cloned()
            .collect();
        out.sort_by_key(|w| w.id);
        Ok(out)
    }

    fn replace_month(
        &mut self,
        range: &DateRange,
        batch: &[NewAssignment],
        synthesize: &mut dyn FnMut(&Assignment) -> Option<NewReport>,
    ) -> AppResult<RegenOutcome> {
        let before = self.assignments.len();
        self.assignments.retain(|a| !range.contains(a.date));
        let deleted = before - self.assignments.len();

        // Cascade: drop reports whose assignment is gone
        let live: std::collections::HashSet<i64> =
            self.assignments.iter().map(|a| a.id).collect();
        self.reports.retain(|r| live.contains(&r.assignment_id));

        let mut inserted = Vec::with_capacity(batch.len());
        let mut reports = 0;

        for na in batch {
            let a = Assignment {
                id: self.next_assignment_id,
                date: na.date,
                slot_type: na.slot_type,
                primary_worker_id: na.primary_worker_id,
                backup_worker_id: na.backup_worker_id,
                created_at: String::new(),
                updated_at: String::new(),
            };
            self.next_assignment_id += 1;

            if let Some(nr) = synthesize(&a) {
                self.reports.push(Report {
                    id: self.next_report_id,
                    report_date: nr.report_date,
                    assignment_id: nr.assignment_id,
                    duty_worker_id: nr.duty_worker_id,
                    body: nr.body,
                    created_at: String::new(),
                    updated_at: String::new(),
                });
                self.next_report_id += 1;
                reports += 1;
            }

            self.assignments.push(a.clone());
            inserted.push(a);
        }

        Ok(RegenOutcome {
            deleted,
            assignments: inserted,
            reports,
        })
    }

    fn query_assignments(&mut self, range: &DateRange) -> AppResult<Vec<Assignment>> {
        Ok(self
            .assignments
            .iter()
            .filter(|a| range.contains(a.date))
            .cloned()
            .collect())
    }

    fn query_reports(&mut self, range: &DateRange) -> AppResult<Vec<Report>> {
        Ok(self
            .reports
            .iter()
            .filter(|r| range.contains(r.report_date))
            .cloned()
            .collect())
    }

    fn assignment_views(&mut self, _range: &DateRange) -> AppResult<Vec<AssignmentView>> {
        unimplemented!("not exercised here")
    }

    fn report_views(&mut self, _range: &DateRange) -> AppResult<Vec<ReportView>> {
        unimplemented!("not exercised here")
    }
}

fn opts(min_workers: usize) -> RegenOptions {
    RegenOptions {
        min_workers,
        cutoff: ReportCutoff::All,
    }
}

#[test]
fn regeneration_is_idempotent() {
    let mut store = MemStore::with_roster(4);
    let mut content = DefaultContent::seeded(7);

    let first = regenerate_month(&mut store, 2025, 6, &opts(4), &mut content).unwrap();
    assert_eq!(first.deleted, 0);

    let second = regenerate_month(&mut store, 2025, 6, &opts(4), &mut content).unwrap();
    assert_eq!(second.deleted, first.assignments.len());
    assert_eq!(second.assignments.len(), first.assignments.len());

    // No leftovers from the first run
    let range = DateRange::month(2025, 6).unwrap();
    assert_eq!(
        store.query_assignments(&range).unwrap().len(),
        first.assignments.len()
    );
    assert_eq!(store.query_reports(&range).unwrap().len(), second.reports);
}

#[test]
fn leap_february_regeneration_boundary() {
    let mut store = MemStore::with_roster(4);
    let mut content = DefaultContent::seeded(7);

    // 2024-02 is a leap February: 21 weekdays + 8 weekend days = 37 slots
    let first = regenerate_month(&mut store, 2024, 2, &opts(4), &mut content).unwrap();
    assert_eq!(first.assignments.len(), 37);

    let second = regenerate_month(&mut store, 2024, 2, &opts(4), &mut content).unwrap();
    assert_eq!(second.deleted, 37);
    assert!(
        second
            .assignments
            .iter()
            .any(|a| a.date == NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
    );
}

#[test]
fn regeneration_does_not_touch_other_months() {
    let mut store = MemStore::with_roster(4);
    let mut content = DefaultContent::seeded(7);

    let june = regenerate_month(&mut store, 2025, 6, &opts(4), &mut content).unwrap();
    regenerate_month(&mut store, 2025, 7, &opts(4), &mut content).unwrap();

    let range = DateRange::month(2025, 6).unwrap();
    assert_eq!(
        store.query_assignments(&range).unwrap().len(),
        june.assignments.len()
    );
}

#[test]
fn reports_keep_the_linkage_invariant() {
    let mut store = MemStore::with_roster(5);
    let mut content = DefaultContent::seeded(42);

    regenerate_month(&mut store, 2025, 6, &opts(4), &mut content).unwrap();

    let range = DateRange::month(2025, 6).unwrap();
    let assignments = store.query_assignments(&range).unwrap();
    let reports = store.query_reports(&range).unwrap();

    assert_eq!(reports.len(), assignments.len());
    verify_linkage(&assignments, &reports).unwrap();

    for r in &reports {
        assert!((80u8..=95).contains(&r.body.completion_rate));
    }
}

#[test]
fn cutoff_policy_skips_future_reports() {
    let mut store = MemStore::with_roster(4);
    let mut content = DefaultContent::seeded(1);

    let cutoff = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
    let opts = RegenOptions {
        min_workers: 4,
        cutoff: ReportCutoff::OnOrBefore(cutoff),
    };

    let outcome = regenerate_month(&mut store, 2025, 6, &opts, &mut content).unwrap();

    let range = DateRange::month(2025, 6).unwrap();
    let reports = store.query_reports(&range).unwrap();
    assert_eq!(reports.len(), outcome.reports);
    assert!(reports.iter().all(|r| r.report_date <= cutoff));
    // Assignments still cover the whole month
    assert!(outcome.assignments.iter().any(|a| a.date > cutoff));
    // Linkage holds even with a partial report set
    verify_linkage(&store.query_assignments(&range).unwrap(), &reports).unwrap();
}

#[test]
fn excluded_workers_never_scheduled() {
    let mut store = MemStore::with_roster(5);
    store.workers[4].excluded = true; // W5

    let mut content = DefaultContent::seeded(1);
    let outcome = regenerate_month(&mut store, 2025, 6, &opts(4), &mut content).unwrap();

    for a in &outcome.assignments {
        assert_ne!(a.primary_worker_id, 5);
        assert_ne!(a.backup_worker_id, 5);
    }
}

#[test]
fn small_roster_fails_with_aggregate_error() {
    let mut store = MemStore::with_roster(3);
    let mut content = DefaultContent::seeded(1);

    let err = regenerate_month(&mut store, 2025, 6, &opts(4), &mut content).unwrap_err();
    match err {
        AppError::Regeneration { year, month, source } => {
            assert_eq!((year, month), (2025, 6));
            assert!(matches!(
                *source,
                AppError::InsufficientWorkers { found: 3, required: 4 }
            ));
        }
        other => panic!("unexpected error: {}", other),
    }

    // Nothing persisted on failure
    let range = DateRange::month(2025, 6).unwrap();
    assert!(store.query_assignments(&range).unwrap().is_empty());
}

#[test]
fn linkage_violations_are_detected() {
    let mut store = MemStore::with_roster(4);
    let mut content = DefaultContent::seeded(1);
    regenerate_month(&mut store, 2025, 6, &opts(4), &mut content).unwrap();

    let range = DateRange::month(2025, 6).unwrap();
    let assignments = store.query_assignments(&range).unwrap();
    let mut reports = store.query_reports(&range).unwrap();

    // Corrupt one report's duty worker
    reports[0].duty_worker_id = 9999;
    let err = verify_linkage(&assignments, &reports).unwrap_err();
    assert!(matches!(err, AppError::ConsistencyViolation(_)));

    // And one report's date
    let mut reports = store.query_reports(&range).unwrap();
    reports[1].report_date = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
    let err = verify_linkage(&assignments, &reports).unwrap_err();
    assert!(matches!(err, AppError::ConsistencyViolation(_)));
}
