use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Month – fixed calendar ordering used for grouping and display
// ---------------------------------------------------------------------------

/// Calendar month. The derived `Ord` follows declaration order, so sorting
/// by `Month` gives January→December rather than alphabetical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Month of a calendar date.
    pub fn of(date: NaiveDate) -> Self {
        // month0() is always in 0..12
        Self::ALL[date.month0() as usize]
    }

    /// Zero-based position in the calendar order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Full English name, e.g. `"January"`.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Three-letter abbreviation, e.g. `"Jan"`.
    pub fn abbrev(self) -> &'static str {
        &self.name()[..3]
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the input CSV
// ---------------------------------------------------------------------------

/// Page views recorded on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub date: NaiveDate,
    pub value: u32,
}

impl Record {
    pub fn new(date: NaiveDate, value: u32) -> Self {
        Self { date, value }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> Month {
        Month::of(self.date)
    }
}

// ---------------------------------------------------------------------------
// PageViews – the loaded table
// ---------------------------------------------------------------------------

/// All records read from the input file, sorted by date.
#[derive(Debug, Clone, Default)]
pub struct PageViews {
    records: Vec<Record>,
}

impl PageViews {
    /// Build the table, sorting chronologically. The sort is stable, so
    /// duplicate dates keep their input order.
    pub fn from_records(mut records: Vec<Record>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All values in record order.
    pub fn values(&self) -> Vec<u32> {
        self.records.iter().map(|r| r.value).collect()
    }
}

// ---------------------------------------------------------------------------
// FilteredDataset – records surviving the quantile trim
// ---------------------------------------------------------------------------

/// Inclusive value range a record must fall in to survive trimming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimBounds {
    pub low: f64,
    pub high: f64,
}

impl TrimBounds {
    pub fn contains(&self, value: u32) -> bool {
        let v = f64::from(value);
        self.low <= v && v <= self.high
    }
}

/// The trimmed base table shared read-only by every chart.
#[derive(Debug, Clone)]
pub struct FilteredDataset {
    records: Vec<Record>,
    bounds: TrimBounds,
    /// Size of the table before trimming.
    source_len: usize,
}

impl FilteredDataset {
    pub(crate) fn new(records: Vec<Record>, bounds: TrimBounds, source_len: usize) -> Self {
        Self {
            records,
            bounds,
            source_len,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn bounds(&self) -> TrimBounds {
        self.bounds
    }

    pub fn source_len(&self) -> usize {
        self.source_len
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First and last date covered, if any records survived.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.records.first()?.date, self.records.last()?.date))
    }

    pub fn max_value(&self) -> Option<u32> {
        self.records.iter().map(|r| r.value).max()
    }
}

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

/// Mean page views for one (year, month) group.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAggregate {
    pub year: i32,
    pub month: Month,
    pub mean_value: f64,
    /// Number of days averaged.
    pub count: usize,
}

/// A record tagged with its year and month abbreviation for box plotting.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedRecord {
    pub date: NaiveDate,
    pub value: u32,
    pub year: i32,
    pub month: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_order_is_calendar_not_alphabetical() {
        let mut months = vec![Month::April, Month::December, Month::August, Month::January];
        months.sort();
        assert_eq!(
            months,
            vec![Month::January, Month::April, Month::August, Month::December]
        );
    }

    #[test]
    fn month_names_and_abbreviations() {
        assert_eq!(Month::of(date(2016, 5, 9)), Month::May);
        assert_eq!(Month::September.name(), "September");
        assert_eq!(Month::September.abbrev(), "Sep");
        let abbrevs: Vec<&str> = Month::ALL.iter().map(|m| m.abbrev()).collect();
        assert_eq!(
            abbrevs,
            ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
    }

    #[test]
    fn page_views_sorted_by_date() {
        let pv = PageViews::from_records(vec![
            Record::new(date(2017, 1, 2), 5),
            Record::new(date(2016, 12, 31), 7),
            Record::new(date(2017, 1, 1), 6),
        ]);
        let dates: Vec<NaiveDate> = pv.records().iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2016, 12, 31), date(2017, 1, 1), date(2017, 1, 2)]);
        assert_eq!(pv.values(), vec![7, 6, 5]);
    }

    #[test]
    fn trim_bounds_are_inclusive() {
        let b = TrimBounds { low: 10.0, high: 20.0 };
        assert!(b.contains(10));
        assert!(b.contains(20));
        assert!(!b.contains(9));
        assert!(!b.contains(21));
    }
}
