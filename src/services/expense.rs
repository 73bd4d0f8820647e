//! Expense service
//!
//! Connects a record store, the audit log and the aggregation functions.
//! The store is handed in by the caller; nothing here knows where records
//! live.

use chrono::NaiveDate;

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::ExpenseResult;
use crate::models::{ExpenseRecord, SummaryPeriod};
use crate::reports::{rank_by_category, CategoryTotal, ChartData, WindowOptions, WindowedTotal};
use crate::storage::{RecordStore, RejectedRows};

/// Records loaded from a store, with any rows that were skipped
#[derive(Debug, Clone, Default)]
pub struct LoadedRecords {
    pub records: Vec<ExpenseRecord>,
    pub rejected: RejectedRows,
}

impl LoadedRecords {
    /// Total for one window around `reference_date`
    pub fn summary(
        &self,
        period: SummaryPeriod,
        reference_date: NaiveDate,
        options: &WindowOptions,
    ) -> WindowedTotal {
        WindowedTotal::compute(&self.records, period, reference_date, options)
    }

    /// Categories ordered by total spent
    pub fn ranking(&self) -> Vec<CategoryTotal> {
        rank_by_category(&self.records)
    }

    /// Chart projection of the ranking
    pub fn chart_data(&self) -> ChartData {
        ChartData::from_ranking(&self.ranking())
    }
}

/// Service for adding and summarizing expenses
pub struct ExpenseService<S: RecordStore> {
    store: S,
    audit: Option<AuditLogger>,
}

impl<S: RecordStore> ExpenseService<S> {
    /// Create a service without audit logging
    pub fn new(store: S) -> Self {
        Self { store, audit: None }
    }

    /// Write an audit entry for every added expense
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append a record and log it
    pub fn add_expense(&mut self, record: ExpenseRecord) -> ExpenseResult<ExpenseRecord> {
        self.store.append(&record)?;

        if let Some(logger) = &self.audit {
            logger.log(&AuditEntry::expense_added(&record))?;
        }

        Ok(record)
    }

    /// Load every readable record; unreadable rows are reported, not summed
    pub fn load(&self) -> ExpenseResult<LoadedRecords> {
        let (records, rejected) = self.store.list_valid()?;
        Ok(LoadedRecords { records, rejected })
    }
}
