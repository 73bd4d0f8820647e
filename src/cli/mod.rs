//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer. Handlers write
//! to any `Write` so the interactive menu and tests can reuse them.

pub mod expense;
pub mod menu;
pub mod report;

use chrono::NaiveDate;

use crate::error::MalformedRecordError;

pub use expense::{build_record, handle_add, ExpenseInput};
pub use menu::run_menu;
pub use report::{handle_top, write_chart, write_summary, write_top};

/// Parse a user-supplied date, treating empty input as `today`
pub fn parse_date_input(
    input: Option<&str>,
    date_format: &str,
    today: NaiveDate,
) -> Result<NaiveDate, MalformedRecordError> {
    match input.map(str::trim) {
        None | Some("") => Ok(today),
        Some(text) => NaiveDate::parse_from_str(text, date_format)
            .map_err(|_| MalformedRecordError::InvalidDate(text.to_string())),
    }
}
