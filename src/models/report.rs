use super::worker::Worker;
use chrono::NaiveDate;
use serde::Serialize;

/// Narrative body of a duty report, produced by a `ReportContent`
/// implementation. All fields are plain text except the completion rate.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ReportBody {
    pub instruction_datetime: String,
    pub instruction_content: String,
    pub instruction_handover: String,
    pub patrol_datetime: String,
    pub patrol_content: String,
    pub patrol_actions: String,
    pub patrol_notes: String,
    pub handover_issues: String,
    pub handover_pending: String,
    pub handover_notes: String,
    pub completion_rate: u8, // 0-100
}

/// A persisted duty report. Its lifetime is bound to the assignment it
/// references: deleting the assignment deletes the report.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub id: i64,               // ⇔ reports.id
    pub report_date: NaiveDate, // ⇔ reports.report_date, equals assignment date
    pub assignment_id: i64,    // ⇔ reports.assignment_id (FK)
    pub duty_worker_id: i64,   // ⇔ reports.duty_worker_id, equals primary worker
    #[serde(flatten)]
    pub body: ReportBody,
    pub created_at: String,
    pub updated_at: String,
}

impl Report {
    pub fn date_str(&self) -> String {
        self.report_date.format("%Y-%m-%d").to_string()
    }
}

/// A report synthesized for a freshly inserted assignment, not yet persisted.
#[derive(Debug, Clone, Serialize)]
pub struct NewReport {
    pub report_date: NaiveDate,
    pub assignment_id: i64,
    pub duty_worker_id: i64,
    #[serde(flatten)]
    pub body: ReportBody,
}

/// Read-side view: a report with the duty worker resolved via
/// `duty_worker_id`.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    #[serde(flatten)]
    pub report: Report,
    pub duty_worker: Worker,
}
