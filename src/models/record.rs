//! Expense record model
//!
//! One logged expense. Records are created once and never edited; the only
//! way to build one is through the validating constructors below, so every
//! record the aggregator sees is well formed.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::money::Money;
use crate::error::MalformedRecordError;

/// Date format used for stored and typed dates
pub const RECORD_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single expense entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseRecord {
    date: NaiveDate,
    amount: Money,
    category: String,
    description: String,
}

impl ExpenseRecord {
    /// Create a record from typed values
    ///
    /// The category is trimmed; an empty category or a negative amount is
    /// rejected.
    pub fn new(
        date: NaiveDate,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, MalformedRecordError> {
        if amount.is_negative() {
            return Err(MalformedRecordError::InvalidAmount(amount.to_decimal_string()));
        }

        let category = category.into().trim().to_string();
        if category.is_empty() {
            return Err(MalformedRecordError::MissingCategory);
        }

        Ok(Self {
            date,
            amount,
            category,
            description: description.into(),
        })
    }

    /// Create a record from raw text fields, as read from storage or typed
    /// by the user
    ///
    /// Fields are checked in order date, amount, category; the first failing
    /// field is reported.
    pub fn parse(
        date: &str,
        amount: &str,
        category: &str,
        description: &str,
    ) -> Result<Self, MalformedRecordError> {
        let date = parse_record_date(date)?;
        let amount = Money::parse(amount)
            .map_err(|_| MalformedRecordError::InvalidAmount(amount.trim().to_string()))?;
        Self::new(date, amount, category, description.trim())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format(RECORD_DATE_FORMAT),
            self.category,
            self.amount
        )?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        Ok(())
    }
}

/// Parse a `YYYY-MM-DD` date, mapping failure to the record error kind
pub fn parse_record_date(s: &str) -> Result<NaiveDate, MalformedRecordError> {
    let trimmed = s.trim();
    NaiveDate::parse_from_str(trimmed, RECORD_DATE_FORMAT)
        .map_err(|_| MalformedRecordError::InvalidDate(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_record() {
        let record =
            ExpenseRecord::new(date(2024, 3, 5), Money::from_cents(4550), " Food ", "lunch")
                .unwrap();
        assert_eq!(record.date(), date(2024, 3, 5));
        assert_eq!(record.amount().cents(), 4550);
        assert_eq!(record.category(), "Food");
        assert_eq!(record.description(), "lunch");
    }

    #[test]
    fn test_empty_description_is_allowed() {
        let record = ExpenseRecord::new(date(2024, 3, 5), Money::zero(), "Misc", "").unwrap();
        assert_eq!(record.description(), "");
    }

    #[test]
    fn test_new_rejects_negative_amount() {
        let err = ExpenseRecord::new(date(2024, 3, 5), Money::from_cents(-100), "Food", "")
            .unwrap_err();
        assert_eq!(err, MalformedRecordError::InvalidAmount("-1.00".into()));
    }

    #[test]
    fn test_new_rejects_blank_category() {
        let err =
            ExpenseRecord::new(date(2024, 3, 5), Money::from_cents(100), "   ", "").unwrap_err();
        assert_eq!(err, MalformedRecordError::MissingCategory);
    }

    #[test]
    fn test_parse_reports_each_field() {
        assert_eq!(
            ExpenseRecord::parse("2024-02-30", "10", "Food", "").unwrap_err(),
            MalformedRecordError::InvalidDate("2024-02-30".into())
        );
        assert_eq!(
            ExpenseRecord::parse("2024-02-10", "ten", "Food", "").unwrap_err(),
            MalformedRecordError::InvalidAmount("ten".into())
        );
        assert_eq!(
            ExpenseRecord::parse("2024-02-10", "10", "", "").unwrap_err(),
            MalformedRecordError::MissingCategory
        );
    }

    #[test]
    fn test_parse_valid_row() {
        let record = ExpenseRecord::parse(" 2024-02-10 ", "100.0", "Travel", " bus ").unwrap();
        assert_eq!(record.amount().cents(), 10000);
        assert_eq!(record.description(), "bus");
        assert_eq!(record.to_string(), "2024-02-10 Travel ₹100.00 (bus)");
    }
}
