//! CSV-backed record store
//!
//! Stores expenses in a flat CSV file with a fixed four-column header:
//! `Date,Amount,Category,Description`. Rows are only ever appended.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use super::RecordStore;
use crate::error::{ExpenseError, ExpenseResult, MalformedRecordError};
use crate::models::{ExpenseRecord, RECORD_DATE_FORMAT};

/// Column names, in file order
pub const CSV_HEADER: [&str; 4] = ["Date", "Amount", "Category", "Description"];

/// Position of each column, found by header name
///
/// A header missing a known name falls back to that column's file order.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    date: usize,
    amount: usize,
    category: usize,
    description: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::ByteRecord) -> Self {
        let find = |name: &str, fallback: usize| {
            headers
                .iter()
                .position(|h| h == name.as_bytes())
                .unwrap_or(fallback)
        };

        Self {
            date: find(CSV_HEADER[0], 0),
            amount: find(CSV_HEADER[1], 1),
            category: find(CSV_HEADER[2], 2),
            description: find(CSV_HEADER[3], 3),
        }
    }

    /// Build a record from one raw row
    ///
    /// Absent fields read as empty, so a short row is rejected with the kind
    /// of its first missing field. Bytes that are not UTF-8 are replaced
    /// rather than failing the row.
    fn record(&self, row: &csv::ByteRecord) -> Result<ExpenseRecord, MalformedRecordError> {
        let field = |i: usize| {
            row.get(i)
                .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                .unwrap_or_default()
        };

        ExpenseRecord::parse(
            &field(self.date),
            &field(self.amount),
            &field(self.category),
            &field(self.description),
        )
    }
}

/// Rows that failed validation, keyed by 1-based data row number
pub type RejectedRows = Vec<(usize, MalformedRecordError)>;

/// Record store backed by a CSV file
#[derive(Debug, Clone)]
pub struct CsvRecordStore {
    path: PathBuf,
}

impl CsvRecordStore {
    /// Open the store, creating the file with its header if needed
    ///
    /// An existing non-empty file is left untouched.
    pub fn open(path: impl Into<PathBuf>) -> ExpenseResult<Self> {
        let path = path.into();

        let needs_header = match fs::metadata(&path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        if needs_header {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    ExpenseError::Storage(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }

            let mut writer = csv::Writer::from_path(&path).map_err(|e| {
                ExpenseError::Storage(format!("Failed to create {}: {}", path.display(), e))
            })?;
            writer.write_record(CSV_HEADER)?;
            writer.flush()?;
        }

        Ok(Self { path })
    }

    /// Path of the underlying CSV file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_rows(
        &self,
    ) -> ExpenseResult<Vec<(usize, Result<ExpenseRecord, MalformedRecordError>)>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_path(&self.path)
            .map_err(|e| {
                ExpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let columns = ColumnIndex::from_headers(reader.byte_headers()?);

        let mut rows = Vec::new();
        for (idx, result) in reader.byte_records().enumerate() {
            let row = result.map_err(|e| {
                ExpenseError::Csv(format!("Failed to read row {}: {}", idx + 1, e))
            })?;
            rows.push((idx + 1, columns.record(&row)));
        }

        Ok(rows)
    }
}

impl RecordStore for CsvRecordStore {
    fn append(&mut self, record: &ExpenseRecord) -> ExpenseResult<()> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                ExpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        let date = record.date().format(RECORD_DATE_FORMAT).to_string();
        let amount = record.amount().to_decimal_string();
        writer.write_record([
            date.as_str(),
            amount.as_str(),
            record.category(),
            record.description(),
        ])?;
        writer.flush()?;

        Ok(())
    }

    /// Read every record; the first malformed row fails the whole read
    fn list_all(&self) -> ExpenseResult<Vec<ExpenseRecord>> {
        self.read_rows()?
            .into_iter()
            .map(|(row, parsed)| parsed.map_err(|e| ExpenseError::malformed(row, e)))
            .collect()
    }

    /// Read every row, keeping valid records and reporting the rest
    ///
    /// Rejected rows never reach the returned records, so one bad line does
    /// not block summaries of the others.
    fn list_valid(&self) -> ExpenseResult<(Vec<ExpenseRecord>, RejectedRows)> {
        let mut records = Vec::new();
        let mut rejected = Vec::new();

        for (row, parsed) in self.read_rows()? {
            match parsed {
                Ok(record) => records.push(record),
                Err(err) => rejected.push((row, err)),
            }
        }

        Ok((records, rejected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn record(d: u32, cents: i64, category: &str, description: &str) -> ExpenseRecord {
        ExpenseRecord::new(
            NaiveDate::from_ymd_opt(2024, 3, d).unwrap(),
            Money::from_cents(cents),
            category,
            description,
        )
        .unwrap()
    }

    #[test]
    fn test_open_writes_header_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");

        CsvRecordStore::open(&path).unwrap();
        CsvRecordStore::open(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "Date,Amount,Category,Description\n");
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("expenses.csv");

        let store = CsvRecordStore::open(&path).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_append_and_list() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = CsvRecordStore::open(temp_dir.path().join("expenses.csv")).unwrap();

        let first = record(1, 10050, "Food", "dinner, with friends");
        let second = record(2, 5000, "Travel", "");
        store.append(&first).unwrap();
        store.append(&second).unwrap();

        let records = store.list_all().unwrap();
        assert_eq!(records, vec![first, second]);

        let contents = fs::read_to_string(store.path()).unwrap();
        assert!(contents.contains("2024-03-01,100.50,Food,\"dinner, with friends\""));
    }

    #[test]
    fn test_reads_float_style_amounts() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        fs::write(
            &path,
            "Date,Amount,Category,Description\n2024-03-01,100.0,Food,lunch\n",
        )
        .unwrap();

        let store = CsvRecordStore::open(&path).unwrap();
        let records = store.list_all().unwrap();
        assert_eq!(records[0].amount().cents(), 10000);
    }

    #[test]
    fn test_malformed_row_fails_list_all_with_row_and_kind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        fs::write(
            &path,
            "Date,Amount,Category,Description\n\
             2024-03-01,10,Food,\n\
             2024-03-02,abc,Food,\n",
        )
        .unwrap();

        let store = CsvRecordStore::open(&path).unwrap();
        match store.list_all().unwrap_err() {
            ExpenseError::Malformed { row, source } => {
                assert_eq!(row, 2);
                assert_eq!(source, MalformedRecordError::InvalidAmount("abc".into()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_list_valid_separates_rejected_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        fs::write(
            &path,
            "Date,Amount,Category,Description\n\
             03/01/2024,10,Food,\n\
             2024-03-02,20,Food,\n\
             2024-03-03,30,,\n",
        )
        .unwrap();

        let store = CsvRecordStore::open(&path).unwrap();
        let (records, rejected) = store.list_valid().unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount().cents(), 2000);
        assert_eq!(
            rejected,
            vec![
                (1, MalformedRecordError::InvalidDate("03/01/2024".into())),
                (3, MalformedRecordError::MissingCategory),
            ]
        );
    }

    #[test]
    fn test_row_without_description_column() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        fs::write(&path, "Date,Amount,Category,Description\n2024-03-01,5,Tea\n").unwrap();

        let store = CsvRecordStore::open(&path).unwrap();
        let records = store.list_all().unwrap();
        assert_eq!(records[0].category(), "Tea");
        assert_eq!(records[0].description(), "");
    }

    #[test]
    fn test_short_row_is_rejected_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        fs::write(
            &path,
            "Date,Amount,Category,Description\n\
             2024-03-01,10,Food,\n\
             garbage\n\
             2024-03-02,20,Food,\n\
             2024-03-03,30\n",
        )
        .unwrap();

        let store = CsvRecordStore::open(&path).unwrap();
        let (records, rejected) = store.list_valid().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            rejected,
            vec![
                (2, MalformedRecordError::InvalidDate("garbage".into())),
                (4, MalformedRecordError::MissingCategory),
            ]
        );

        match store.list_all().unwrap_err() {
            ExpenseError::Malformed { row, .. } => assert_eq!(row, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_row_with_missing_amount_field() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        fs::write(&path, "Date,Amount,Category,Description\n2024-03-01\n").unwrap();

        let store = CsvRecordStore::open(&path).unwrap();
        let (_, rejected) = store.list_valid().unwrap();
        assert_eq!(
            rejected,
            vec![(1, MalformedRecordError::InvalidAmount(String::new()))]
        );
    }

    #[test]
    fn test_non_utf8_row_does_not_block_others() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        let mut contents = b"Date,Amount,Category,Description\n2024-03-01,10,Food,\n".to_vec();
        contents.extend_from_slice(b"2024-03-02,5,Caf\xe9,\n");
        contents.extend_from_slice(b"2024-03-03,20,Food,\n");
        fs::write(&path, contents).unwrap();

        let store = CsvRecordStore::open(&path).unwrap();
        let (records, rejected) = store.list_valid().unwrap();

        assert!(rejected.is_empty());
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].category(), "Caf\u{FFFD}");
        let total: Money = records.iter().map(ExpenseRecord::amount).sum();
        assert_eq!(total, Money::from_cents(3500));
    }

    #[test]
    fn test_columns_found_by_header_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        fs::write(
            &path,
            "Category, Amount ,Date,Description\nBooks,12.5,2024-03-01,novel\n",
        )
        .unwrap();

        let store = CsvRecordStore::open(&path).unwrap();
        let records = store.list_all().unwrap();
        assert_eq!(records[0].category(), "Books");
        assert_eq!(records[0].amount(), Money::from_cents(1250));
        assert_eq!(records[0].description(), "novel");
    }

    #[test]
    fn test_missing_file_lists_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let store = CsvRecordStore {
            path: temp_dir.path().join("gone.csv"),
        };
        assert!(store.list_all().unwrap().is_empty());
    }
}
