//! Report synthesizer: one handover report skeleton per assignment.
//!
//! The scheduling core only guarantees the linkage contract
//! (`duty_worker_id` = primary worker, `report_date` = assignment date).
//! The narrative body is domain content, produced by a pluggable
//! `ReportContent` implementation keyed on the slot type; the shipped
//! default mirrors the wording the handover dashboard expects and draws
//! its completion rate from a seedable RNG so runs can be reproduced.

use crate::models::assignment::Assignment;
use crate::models::report::{NewReport, ReportBody};
use crate::models::slot_type::SlotType;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces the narrative body for one duty report.
pub trait ReportContent {
    fn body(&mut self, date: NaiveDate, slot_type: SlotType) -> ReportBody;
}

/// Which assignments get a report. A report for a future shift has
/// nothing to report yet, so callers may cut off at "today"; the default
/// covers the whole month, matching how the handover dashboard pre-fills
/// its calendar.
#[derive(Debug, Clone, Copy)]
pub enum ReportCutoff {
    All,
    OnOrBefore(NaiveDate),
}

impl ReportCutoff {
    pub fn wants(&self, date: NaiveDate) -> bool {
        match self {
            ReportCutoff::All => true,
            ReportCutoff::OnOrBefore(cutoff) => date <= *cutoff,
        }
    }
}

/// Build the report skeleton for one persisted assignment, or None when
/// the cutoff policy skips it.
pub fn synthesize_report(
    assignment: &Assignment,
    cutoff: ReportCutoff,
    content: &mut dyn ReportContent,
) -> Option<NewReport> {
    if !cutoff.wants(assignment.date) {
        return None;
    }

    Some(NewReport {
        report_date: assignment.date,
        assignment_id: assignment.id,
        duty_worker_id: assignment.primary_worker_id,
        body: content.body(assignment.date, assignment.slot_type),
    })
}

/// Default placeholder content, varied per slot type.
pub struct DefaultContent {
    rng: StdRng,
}

impl DefaultContent {
    /// Fixed seed: identical bodies on every run, used by tests and by
    /// `report_seed` in the config.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Clock-seeded; rates vary run to run like real hand-filled reports.
    pub fn from_clock() -> Self {
        let seed = chrono::Local::now().timestamp_millis() as u64;
        Self::seeded(seed)
    }
}

impl ReportContent for DefaultContent {
    fn body(&mut self, date: NaiveDate, slot_type: SlotType) -> ReportBody {
        let date_str = date.format("%Y-%m-%d").to_string();
        let weekend = slot_type.is_weekend();

        let instruction_content = if weekend {
            "Weekend special inspection; review regional incident feeds, wildfire watch, reinforce site security"
        } else {
            "Review regional incident feeds, wildfire watch, confirm duty regulations"
        };

        let patrol_notes = match slot_type {
            SlotType::WeekendNight => {
                "Night special patrol carried out; extra checks per standing wildfire instructions"
            }
            SlotType::WeekendDay => "Weekend daytime round; visitor safety checks",
            SlotType::WeekdayNight => "Extra checks per standing wildfire instructions",
        };

        let handover_notes = match slot_type {
            SlotType::WeekendNight => {
                "Night security to be reinforced; keep monitoring wildfire status, share incident feed findings"
            }
            SlotType::WeekendDay => {
                "Weekend visitor management to be reinforced; share facility safety check results"
            }
            SlotType::WeekdayNight => {
                "Keep monitoring wildfire status; share incident feed findings"
            }
        };

        ReportBody {
            instruction_datetime: format!("{} 08:00, duty commander briefing", date_str),
            instruction_content: instruction_content.to_string(),
            instruction_handover: "Pass today's instructions and patrol results to the next duty worker".to_string(),
            patrol_datetime: format!("{} 17:00-18:00", date_str),
            patrol_content: "Routine site patrol carried out".to_string(),
            patrol_actions: "Full facility check complete, security status confirmed".to_string(),
            patrol_notes: patrol_notes.to_string(),
            handover_issues: if weekend {
                "Weekend special inspection complete, security status good".to_string()
            } else {
                "Routine inspection complete, nothing unusual".to_string()
            },
            handover_pending: if weekend {
                "3 tasks pending".to_string()
            } else {
                "2 tasks pending".to_string()
            },
            handover_notes: handover_notes.to_string(),
            completion_rate: self.rng.gen_range(80..=95),
        }
    }
}
