//! Adding expenses from command-line or menu input

use chrono::NaiveDate;
use std::io::Write;

use super::parse_date_input;
use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult, MalformedRecordError};
use crate::models::{ExpenseRecord, Money};
use crate::services::ExpenseService;
use crate::storage::RecordStore;

/// Raw text fields for a new expense
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub amount: String,
    pub category: String,
    pub description: String,
    /// `None` or empty means today
    pub date: Option<String>,
}

/// Build a record from raw input, reporting every invalid field
pub fn build_record(
    input: &ExpenseInput,
    date_format: &str,
    today: NaiveDate,
) -> Result<ExpenseRecord, Vec<MalformedRecordError>> {
    let mut errors = Vec::new();

    let date = match parse_date_input(input.date.as_deref(), date_format, today) {
        Ok(date) => Some(date),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    let amount = match Money::parse(&input.amount) {
        Ok(amount) if !amount.is_negative() => Some(amount),
        _ => {
            errors.push(MalformedRecordError::InvalidAmount(
                input.amount.trim().to_string(),
            ));
            None
        }
    };

    if input.category.trim().is_empty() {
        errors.push(MalformedRecordError::MissingCategory);
    }

    match (date, amount) {
        (Some(date), Some(amount)) if errors.is_empty() => {
            ExpenseRecord::new(date, amount, &input.category, input.description.trim())
                .map_err(|e| vec![e])
        }
        _ => Err(errors),
    }
}

/// Handle `expenses add`
pub fn handle_add<S: RecordStore, W: Write>(
    service: &mut ExpenseService<S>,
    settings: &Settings,
    input: &ExpenseInput,
    today: NaiveDate,
    out: &mut W,
) -> ExpenseResult<()> {
    let record = build_record(input, &settings.date_format, today).map_err(|errors| {
        ExpenseError::Validation(
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        )
    })?;

    let record = service.add_expense(record)?;
    writeln!(
        out,
        "Added expense: {} {} {}",
        record.date().format(&settings.date_format),
        record.category(),
        record.amount().format_with_symbol(&settings.currency_symbol)
    )?;

    Ok(())
}
