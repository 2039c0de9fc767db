use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::error::{DataError, Result};

use super::model::{PageViews, Record};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load page views from a CSV file.
///
/// Layout: header row with at least a `date` column (`YYYY-MM-DD`) and a
/// `value` column (non-negative integer). Any other columns are ignored.
pub fn load_csv(path: &Path) -> Result<PageViews> {
    let reader = csv::Reader::from_path(path).map_err(|source| DataError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    let page_views = read_records(reader)?;
    log::info!(
        "Loaded {} daily records from {}",
        page_views.len(),
        path.display()
    );
    Ok(page_views)
}

/// Parse records from any CSV source.
pub fn load_from_reader<R: Read>(input: R) -> Result<PageViews> {
    read_records(csv::Reader::from_reader(input))
}

fn read_records<R: Read>(mut reader: csv::Reader<R>) -> Result<PageViews> {
    let headers = reader
        .headers()
        .map_err(|source| DataError::Parse { row: 0, source })?;
    for column in ["date", "value"] {
        if !headers.iter().any(|h| h == column) {
            return Err(DataError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    let mut seen = HashSet::new();

    for (row_no, result) in reader.deserialize::<Record>().enumerate() {
        // Row numbers are 1-based and count the header.
        let record = result.map_err(|source| DataError::Parse {
            row: row_no + 2,
            source,
        })?;
        if !seen.insert(record.date) {
            log::warn!("Duplicate date {} kept as a separate record", record.date);
        }
        records.push(record);
    }

    Ok(PageViews::from_records(records))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn parses_date_and_value_columns() {
        let csv = "date,value\n2016-05-10,2591\n2016-05-09,1201\n";
        let pv = load_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(pv.len(), 2);
        assert_eq!(
            pv.records()[0],
            Record::new(NaiveDate::from_ymd_opt(2016, 5, 9).unwrap(), 1201)
        );
    }

    #[test]
    fn ignores_extra_columns_in_any_order() {
        let csv = "value,source,date\n42,forum,2018-02-01\n";
        let pv = load_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(pv.values(), vec![42]);
    }

    #[test]
    fn keeps_duplicate_dates() {
        let csv = "date,value\n2017-03-01,1\n2017-03-01,2\n";
        let pv = load_from_reader(csv.as_bytes()).unwrap();
        assert_eq!(pv.values(), vec![1, 2]);
    }

    #[test]
    fn header_only_is_empty() {
        let pv = load_from_reader("date,value\n".as_bytes()).unwrap();
        assert!(pv.is_empty());
    }

    #[test]
    fn missing_value_column() {
        let err = load_from_reader("date,views\n2017-03-01,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn("value")));
    }

    #[test]
    fn bad_value_reports_row() {
        let csv = "date,value\n2017-03-01,1\n2017-03-02,lots\n";
        let err = load_from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::Parse { row: 3, .. }), "{err}");
    }

    #[test]
    fn negative_value_rejected() {
        let csv = "date,value\n2017-03-01,-5\n";
        assert!(load_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn bad_date_rejected() {
        let csv = "date,value\n03/01/2017,5\n";
        assert!(matches!(
            load_from_reader(csv.as_bytes()),
            Err(DataError::Parse { row: 2, .. })
        ));
    }
}
