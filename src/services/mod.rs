//! Service layer for the expense log
//!
//! The service layer sits between the command line and the storage layer,
//! handling audit logging and feeding loaded records to the reports.

pub mod expense;

pub use expense::{ExpenseService, LoadedRecords};
