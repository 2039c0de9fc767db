use std::collections::BTreeMap;

use super::model::{FilteredDataset, Month, MonthlyAggregate};

// ---------------------------------------------------------------------------
// Monthly means for the bar chart
// ---------------------------------------------------------------------------

/// Mean page views per (year, month), ordered by year then January→December.
///
/// Only groups with at least one record appear; months missing from a year
/// are not zero-filled.
pub fn monthly_means(dataset: &FilteredDataset) -> Vec<MonthlyAggregate> {
    let mut groups: BTreeMap<(i32, Month), (u64, usize)> = BTreeMap::new();
    for r in dataset.records() {
        let (sum, count) = groups.entry((r.year(), r.month())).or_default();
        *sum += u64::from(r.value);
        *count += 1;
    }

    groups
        .into_iter()
        .map(|((year, month), (sum, count))| {
            let mean_value = sum as f64 / count as f64;
            log::debug!("{year} {month}: mean {mean_value:.1} over {count} days");
            MonthlyAggregate {
                year,
                month,
                mean_value,
                count,
            }
        })
        .collect()
}

/// Distinct years present in the aggregates, ascending.
pub fn years(aggregates: &[MonthlyAggregate]) -> Vec<i32> {
    let mut years: Vec<i32> = aggregates.iter().map(|a| a.year).collect();
    years.dedup();
    years
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::data::filter::trim_outliers;
    use crate::data::model::{PageViews, Record, TrimBounds};

    fn rec(y: i32, m: u32, d: u32, v: u32) -> Record {
        Record::new(NaiveDate::from_ymd_opt(y, m, d).unwrap(), v)
    }

    fn untrimmed(records: Vec<Record>) -> FilteredDataset {
        let n = records.len();
        FilteredDataset::new(
            PageViews::from_records(records).records().to_vec(),
            TrimBounds {
                low: 0.0,
                high: f64::MAX,
            },
            n,
        )
    }

    #[test]
    fn groups_by_year_and_month_in_calendar_order() {
        let ds = untrimmed(vec![
            rec(2017, 12, 1, 10),
            rec(2016, 5, 9, 100),
            rec(2016, 5, 10, 200),
            rec(2016, 12, 31, 40),
            rec(2017, 1, 15, 30),
            rec(2016, 8, 1, 70),
        ]);

        let got: Vec<(i32, Month, f64, usize)> = monthly_means(&ds)
            .into_iter()
            .map(|a| (a.year, a.month, a.mean_value, a.count))
            .collect();

        assert_eq!(
            got,
            vec![
                (2016, Month::May, 150.0, 2),
                (2016, Month::August, 70.0, 1),
                (2016, Month::December, 40.0, 1),
                (2017, Month::January, 30.0, 1),
                (2017, Month::December, 10.0, 1),
            ]
        );
    }

    #[test]
    fn absent_months_are_not_filled() {
        let ds = untrimmed(vec![rec(2019, 3, 1, 5), rec(2019, 3, 2, 6)]);
        let aggs = monthly_means(&ds);
        assert_eq!(aggs.len(), 1);
        assert_eq!(aggs[0].month, Month::March);
        assert_eq!(aggs[0].mean_value, 5.5);
    }

    #[test]
    fn trimmed_may_2016_row_present_only_if_a_record_survives() {
        // One extreme low value in May 2016 followed by a plateau of
        // ordinary days in June; the May record is trimmed away.
        let mut records = vec![rec(2016, 5, 9, 1)];
        records.extend((1..=30).map(|d| rec(2016, 6, d, 1000 + d)));
        let filtered = trim_outliers(&PageViews::from_records(records.clone())).unwrap();
        let aggs = monthly_means(&filtered);
        assert!(!aggs.iter().any(|a| a.year == 2016 && a.month == Month::May));

        // Same data with a typical May value: the row appears.
        records[0] = rec(2016, 5, 9, 1015);
        let filtered = trim_outliers(&PageViews::from_records(records)).unwrap();
        let may = monthly_means(&filtered)
            .into_iter()
            .find(|a| a.year == 2016 && a.month == Month::May)
            .expect("May 2016 survives");
        assert_eq!(may.mean_value, 1015.0);
    }

    #[test]
    fn distinct_years() {
        let ds = untrimmed(vec![
            rec(2016, 5, 9, 1),
            rec(2016, 6, 9, 1),
            rec(2018, 1, 1, 1),
        ]);
        assert_eq!(years(&monthly_means(&ds)), vec![2016, 2018]);
    }

    proptest! {
        #[test]
        fn one_row_per_group_with_exact_mean(
            days in prop::collection::vec((2016i32..2020, 1u32..=12, 1u32..=28, 0u32..200_000), 1..200)
        ) {
            let ds = untrimmed(days.iter().map(|&(y, m, d, v)| rec(y, m, d, v)).collect());
            let aggs = monthly_means(&ds);

            let keys: Vec<(i32, Month)> = aggs.iter().map(|a| (a.year, a.month)).collect();
            let mut sorted = keys.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(&keys, &sorted);

            for a in &aggs {
                let matching: Vec<f64> = ds
                    .records()
                    .iter()
                    .filter(|r| r.year() == a.year && r.month() == a.month)
                    .map(|r| f64::from(r.value))
                    .collect();
                let mean = matching.iter().sum::<f64>() / matching.len() as f64;
                prop_assert_eq!(a.count, matching.len());
                prop_assert!((a.mean_value - mean).abs() < 1e-6);
            }
            let total: usize = aggs.iter().map(|a| a.count).sum();
            prop_assert_eq!(total, ds.len());
        }
    }
}
