use super::slot_type::SlotType;
use super::worker::Worker;
use chrono::NaiveDate;
use serde::Serialize;

/// A persisted duty slot. At most one assignment exists per
/// `(date, slot_type)`; the two worker ids are always distinct.
#[derive(Debug, Clone, Serialize)]
pub struct Assignment {
    pub id: i64,                // ⇔ assignments.id
    pub date: NaiveDate,        // ⇔ assignments.date (TEXT "YYYY-MM-DD")
    pub slot_type: SlotType,    // ⇔ assignments.slot_type
    pub primary_worker_id: i64, // ⇔ assignments.primary_worker_id
    pub backup_worker_id: i64,  // ⇔ assignments.backup_worker_id
    pub created_at: String,     // ⇔ assignments.created_at (ISO8601)
    pub updated_at: String,     // ⇔ assignments.updated_at (ISO8601)
}

impl Assignment {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// An assignment produced by the generator but not yet persisted.
/// The store assigns the id and timestamps on insert.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewAssignment {
    pub date: NaiveDate,
    pub slot_type: SlotType,
    pub primary_worker_id: i64,
    pub backup_worker_id: i64,
}

/// Read-side view: an assignment with both workers resolved via their
/// foreign keys. Never build one of these by matching on the date alone --
/// a weekend date carries two assignments.
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentView {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub primary_worker: Worker,
    pub backup_worker: Worker,
}
