use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};

/// Inclusive date range. The only constructor that matters for the engine
/// is `month()`, which always spans day 1 through the month's actual last
/// calendar day (leap-year Februarys included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if end < start {
            return Err(AppError::InvalidDateRange(format!(
                "end {} before start {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// Exact bounds of a calendar month.
    pub fn month(year: i32, month: u32) -> AppResult<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| AppError::InvalidDateRange(format!("{}-{:02}", year, month)))?;
        let end = last_day_of_month(year, month)
            .ok_or_else(|| AppError::InvalidDateRange(format!("{}-{:02}", year, month)))?;
        Ok(Self { start, end })
    }

    pub fn contains(&self, d: NaiveDate) -> bool {
        self.start <= d && d <= self.end
    }

    /// Every day in the range, ascending.
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut out = Vec::new();
        let mut d = self.start;
        while d <= self.end {
            out.push(d);
            d = d.succ_opt().unwrap();
        }
        out
    }

    pub fn start_str(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    next_first.pred_opt().filter(|d| *d >= first)
}

/// Mon-Fri. Saturday and Sunday are weekend days with two duty slots each.
pub fn is_weekday(d: NaiveDate) -> bool {
    !matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Parse a period filter into a range.
/// Accepts YYYY-MM-DD (single day), YYYY-MM (month) or YYYY (whole year).
pub fn range_from_period(p: &str) -> AppResult<DateRange> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return DateRange::new(d, d);
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return DateRange::month(first.year(), first.month());
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>() {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| AppError::InvalidDateRange(p.to_string()))?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| AppError::InvalidDateRange(p.to_string()))?;
        return DateRange::new(start, end);
    }

    Err(AppError::InvalidDateRange(format!("invalid period: {}", p)))
}
