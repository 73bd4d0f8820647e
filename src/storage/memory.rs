//! In-memory record store
//!
//! Keeps records in a `Vec`. Used for fixtures and tests that exercise the
//! service layer without touching the filesystem.

use super::RecordStore;
use crate::error::ExpenseResult;
use crate::models::ExpenseRecord;

#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    records: Vec<ExpenseRecord>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with records
    pub fn with_records(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryRecordStore {
    fn append(&mut self, record: &ExpenseRecord) -> ExpenseResult<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn list_all(&self) -> ExpenseResult<Vec<ExpenseRecord>> {
        Ok(self.records.clone())
    }
}
