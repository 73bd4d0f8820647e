//! Storage layer for the expense log
//!
//! Records are persisted by a [`RecordStore`]. The aggregation code never
//! sees a store; callers load records and pass a slice.

pub mod csv_store;
pub mod memory;

pub use csv_store::{CsvRecordStore, RejectedRows, CSV_HEADER};
pub use memory::MemoryRecordStore;

use crate::error::ExpenseResult;
use crate::models::ExpenseRecord;

/// Append-only source of expense records
pub trait RecordStore {
    /// Persist one record after all existing ones
    fn append(&mut self, record: &ExpenseRecord) -> ExpenseResult<()>;

    /// Every stored record, in insertion order
    fn list_all(&self) -> ExpenseResult<Vec<ExpenseRecord>>;

    /// Every valid record, plus the rows that could not be read as records
    ///
    /// Stores that can only hold valid records report nothing rejected.
    fn list_valid(&self) -> ExpenseResult<(Vec<ExpenseRecord>, RejectedRows)> {
        Ok((self.list_all()?, Vec::new()))
    }
}
