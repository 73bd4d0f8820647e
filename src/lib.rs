//! expense-log - Terminal-based personal expense logger
//!
//! This library provides the core of the `expenses` command: recording
//! dated, categorized expenses and summarizing them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, expense records and summary periods
//! - `reports`: Pure aggregation (windowed totals, category ranking, chart data)
//! - `storage`: The record store trait and its CSV and in-memory backends
//! - `services`: Business logic tying storage, audit and reports together
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting of summaries, tables and charts
//! - `export`: CSV export of the category ranking
//! - `cli`: Command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_log::config::{ExpensePaths, Settings};
//! use expense_log::services::ExpenseService;
//! use expense_log::storage::CsvRecordStore;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let service = ExpenseService::new(CsvRecordStore::open(paths.expenses_file())?);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::ExpenseError;
