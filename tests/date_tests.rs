use chrono::NaiveDate;
use dutyrota::utils::date::{DateRange, is_weekday, range_from_period};

#[test]
fn month_bounds_are_exact() {
    let feb = DateRange::month(2024, 2).unwrap();
    assert_eq!(feb.start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    assert_eq!(feb.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    assert_eq!(feb.days().len(), 29);

    let feb = DateRange::month(2025, 2).unwrap();
    assert_eq!(feb.days().len(), 28);

    let dec = DateRange::month(2025, 12).unwrap();
    assert_eq!(dec.end, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
    assert_eq!(dec.days().len(), 31);
}

#[test]
fn month_rejects_bad_input() {
    assert!(DateRange::month(2025, 0).is_err());
    assert!(DateRange::month(2025, 13).is_err());
}

#[test]
fn inverted_range_rejected() {
    let a = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    let b = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    assert!(DateRange::new(a, b).is_err());
    assert!(DateRange::new(b, a).is_ok());
}

#[test]
fn period_parsing() {
    let r = range_from_period("2025-06").unwrap();
    assert_eq!(r.days().len(), 30);

    let r = range_from_period("2025-06-15").unwrap();
    assert_eq!(r.start, r.end);

    let r = range_from_period("2024").unwrap();
    assert_eq!(r.days().len(), 366);

    assert!(range_from_period("junk").is_err());
    assert!(range_from_period("2025-14").is_err());
}

#[test]
fn weekday_classification() {
    // 2025-06-02 is a Monday, 2025-06-07 a Saturday, 2025-06-08 a Sunday
    assert!(is_weekday(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()));
    assert!(is_weekday(NaiveDate::from_ymd_opt(2025, 6, 6).unwrap()));
    assert!(!is_weekday(NaiveDate::from_ymd_opt(2025, 6, 7).unwrap()));
    assert!(!is_weekday(NaiveDate::from_ymd_opt(2025, 6, 8).unwrap()));
}
