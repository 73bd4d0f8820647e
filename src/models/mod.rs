//! Core data models for the expense log
//!
//! This module contains the value types shared by storage, aggregation and
//! presentation: money amounts, expense records and summary periods.

pub mod money;
pub mod period;
pub mod record;

pub use money::{Money, MoneyParseError};
pub use period::{PeriodParseError, SummaryPeriod};
pub use record::{parse_record_date, ExpenseRecord, RECORD_DATE_FORMAT};
