//! Monthly assignment generator.
//!
//! A pure function of (year, month, roster): walks every real calendar day
//! of the month in order and asks the allocator for one pair per slot.
//! Weekdays carry a single night slot; Saturdays and Sundays carry a day
//! slot and a night slot, allocated independently but against the same
//! counters, so the night pick already sees the day pick's load. That
//! means weekends consume slots twice as fast as weekdays -- an inherited
//! scheduling trade-off, kept on purpose.

use crate::core::allocator::select_pair;
use crate::core::counters::FairnessCounters;
use crate::errors::AppResult;
use crate::models::assignment::NewAssignment;
use crate::models::slot_type::SlotType;
use crate::models::worker::Worker;
use crate::utils::date::{DateRange, is_weekday};

/// Output of one generation run: the slot batch plus the final counters
/// (the latter only matter for diagnostics and tests).
#[derive(Debug)]
pub struct GeneratedMonth {
    pub assignments: Vec<NewAssignment>,
    pub counters: FairnessCounters,
}

/// Generate the full slot batch for one calendar month.
///
/// The roster is re-sorted ascending by id before the run so the
/// allocator's tie-breaking never depends on caller ordering. Counters
/// start at zero for every run; history from earlier months does not
/// carry over.
pub fn generate_month(year: i32, month: u32, roster: &[Worker]) -> AppResult<GeneratedMonth> {
    let range = DateRange::month(year, month)?;

    let mut pool: Vec<Worker> = roster.to_vec();
    pool.sort_by_key(|w| w.id);

    let mut counters = FairnessCounters::for_roster(&pool);
    let mut assignments = Vec::new();

    for date in range.days() {
        let slots: &[SlotType] = if is_weekday(date) {
            &[SlotType::WeekdayNight]
        } else {
            &[SlotType::WeekendDay, SlotType::WeekendNight]
        };

        for slot_type in slots {
            let (primary, backup) = select_pair(&pool, &counters)?;
            let (primary_id, backup_id) = (primary.id, backup.id);

            assignments.push(NewAssignment {
                date,
                slot_type: *slot_type,
                primary_worker_id: primary_id,
                backup_worker_id: backup_id,
            });

            counters.commit_pair(primary_id, backup_id);
        }
    }

    Ok(GeneratedMonth {
        assignments,
        counters,
    })
}
