//! Export module for the expense log
//!
//! Writes the category ranking as CSV for spreadsheets.

pub mod csv;

pub use self::csv::{export_ranking_csv, RANKING_CSV_HEADER};
