use chrono::NaiveDate;
use dutyrota::core::allocator::select_pair;
use dutyrota::core::counters::FairnessCounters;
use dutyrota::core::generator::generate_month;
use dutyrota::errors::AppError;
use dutyrota::models::slot_type::SlotType;
use dutyrota::models::worker::Worker;
use dutyrota::utils::date::{DateRange, is_weekday};
use std::collections::HashSet;

fn roster(n: usize) -> Vec<Worker> {
    (1..=n as i64)
        .map(|i| Worker::new(i, &format!("W{}", i)))
        .collect()
}

/// Count weekdays/weekend days of a month straight off the calendar,
/// as an oracle for the coverage property.
fn day_counts(year: i32, month: u32) -> (usize, usize) {
    let range = DateRange::month(year, month).unwrap();
    let weekdays = range.days().iter().filter(|d| is_weekday(**d)).count();
    (weekdays, range.days().len() - weekdays)
}

#[test]
fn coverage_matches_calendar() {
    for (year, month) in [(2024, 2), (2025, 2), (2025, 6), (2025, 12), (2024, 8)] {
        let generated = generate_month(year, month, &roster(5)).unwrap();
        let (weekdays, weekend_days) = day_counts(year, month);

        let count_of = |slot: SlotType| {
            generated
                .assignments
                .iter()
                .filter(|a| a.slot_type == slot)
                .count()
        };

        assert_eq!(count_of(SlotType::WeekdayNight), weekdays, "{}-{}", year, month);
        assert_eq!(count_of(SlotType::WeekendDay), weekend_days, "{}-{}", year, month);
        assert_eq!(count_of(SlotType::WeekendNight), weekend_days, "{}-{}", year, month);
        assert_eq!(
            generated.assignments.len(),
            weekdays + 2 * weekend_days,
            "{}-{}",
            year,
            month
        );
    }
}

#[test]
fn leap_february_has_29_days_of_slots() {
    // February 2024: 21 weekdays, 8 weekend days
    let generated = generate_month(2024, 2, &roster(4)).unwrap();
    assert_eq!(generated.assignments.len(), 21 + 2 * 8);

    let dates: HashSet<NaiveDate> = generated.assignments.iter().map(|a| a.date).collect();
    assert_eq!(dates.len(), 29);
    assert!(dates.contains(&NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
    assert!(!dates.contains(&NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
}

#[test]
fn no_duplicate_slots() {
    let generated = generate_month(2025, 6, &roster(4)).unwrap();
    let mut seen = HashSet::new();
    for a in &generated.assignments {
        assert!(seen.insert((a.date, a.slot_type)), "duplicate {:?}", a);
    }
}

#[test]
fn primary_and_backup_always_differ() {
    let generated = generate_month(2025, 6, &roster(4)).unwrap();
    for a in &generated.assignments {
        assert_ne!(a.primary_worker_id, a.backup_worker_id);
    }
}

#[test]
fn weekend_slots_are_allocated_independently() {
    // With 4 workers a weekend day spreads its two slots over all four.
    let generated = generate_month(2025, 6, &roster(4)).unwrap();
    // 2025-06-07 is a Saturday
    let sat = NaiveDate::from_ymd_opt(2025, 6, 7).unwrap();
    let day_slots: Vec<_> = generated
        .assignments
        .iter()
        .filter(|a| a.date == sat)
        .collect();
    assert_eq!(day_slots.len(), 2);

    let mut ids = HashSet::new();
    for a in &day_slots {
        ids.insert(a.primary_worker_id);
        ids.insert(a.backup_worker_id);
    }
    assert_eq!(ids.len(), 4, "day and night slot should use distinct pairs");
}

#[test]
fn fairness_spread_bounded_after_full_month() {
    for n in [2, 3, 4, 5, 7] {
        let generated = generate_month(2025, 6, &roster(n)).unwrap();
        assert!(
            generated.counters.spread() <= 1,
            "spread {} with {} workers",
            generated.counters.spread(),
            n
        );
    }
}

#[test]
fn generation_is_deterministic() {
    let a = generate_month(2025, 9, &roster(5)).unwrap();
    let b = generate_month(2025, 9, &roster(5)).unwrap();
    assert_eq!(a.assignments, b.assignments);

    // Roster order must not matter: it is re-sorted by id.
    let mut shuffled = roster(5);
    shuffled.reverse();
    let c = generate_month(2025, 9, &shuffled).unwrap();
    assert_eq!(a.assignments, c.assignments);
}

#[test]
fn insufficient_workers_rejected() {
    let err = generate_month(2025, 6, &roster(1)).unwrap_err();
    assert!(matches!(
        err,
        AppError::InsufficientWorkers { found: 1, required: 2 }
    ));
}

#[test]
fn invalid_month_rejected() {
    assert!(matches!(
        generate_month(2025, 13, &roster(4)),
        Err(AppError::InvalidDateRange(_))
    ));
}

/// The worked allocator trace: roster [W1..W4], slots Mon, Tue, then a
/// Saturday's day and night slot. Ties always break by ascending id.
#[test]
fn allocator_example_trace() {
    let pool = roster(4);
    let mut counters = FairnessCounters::for_roster(&pool);

    // Mon, weekday night
    let (p, b) = select_pair(&pool, &counters).unwrap();
    assert_eq!((p.id, b.id), (1, 2));
    counters.commit_pair(p.id, b.id);

    // Tue, weekday night
    let (p, b) = select_pair(&pool, &counters).unwrap();
    assert_eq!((p.id, b.id), (3, 4));
    counters.commit_pair(p.id, b.id);

    // Sat, weekend day: all tied again, id order wins
    let (p, b) = select_pair(&pool, &counters).unwrap();
    assert_eq!((p.id, b.id), (1, 2));
    counters.commit_pair(p.id, b.id);

    // Sat, weekend night: sees the day slot's load
    let (p, b) = select_pair(&pool, &counters).unwrap();
    assert_eq!((p.id, b.id), (3, 4));
    counters.commit_pair(p.id, b.id);

    assert_eq!(counters.spread(), 0);
    for id in 1..=4 {
        assert_eq!(counters.get(id), 2);
    }
}
