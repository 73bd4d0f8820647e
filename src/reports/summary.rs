//! Windowed Summary
//!
//! Totals the expenses that fall inside a daily, weekly or monthly window
//! around an explicit reference date.

use chrono::{Datelike, NaiveDate};

use crate::models::{ExpenseRecord, Money, SummaryPeriod};

/// Number of days before the reference date still counted as "this week"
pub const WEEKLY_WINDOW_DAYS: i64 = 7;

/// Switches that alter window rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowOptions {
    /// Require the record's year to match for the monthly window.
    /// Off by default: the monthly window matches on month number alone.
    pub monthly_same_year: bool,
}

/// Whether a record dated `date` falls in `period` around `reference_date`
///
/// - Daily: same day.
/// - Weekly: 0 to 7 days before the reference date, inclusive. Future-dated
///   records are outside the window.
/// - Monthly: same month number, in any year unless
///   [`WindowOptions::monthly_same_year`] is set.
pub fn in_window(
    date: NaiveDate,
    period: SummaryPeriod,
    reference_date: NaiveDate,
    options: &WindowOptions,
) -> bool {
    match period {
        SummaryPeriod::Daily => date == reference_date,
        SummaryPeriod::Weekly => {
            let days_ago = (reference_date - date).num_days();
            (0..=WEEKLY_WINDOW_DAYS).contains(&days_ago)
        }
        SummaryPeriod::Monthly => {
            date.month() == reference_date.month()
                && (!options.monthly_same_year || date.year() == reference_date.year())
        }
    }
}

/// Total of all record amounts inside the window, using default options
pub fn summarize(
    records: &[ExpenseRecord],
    period: SummaryPeriod,
    reference_date: NaiveDate,
) -> Money {
    summarize_with(records, period, reference_date, &WindowOptions::default())
}

/// Total of all record amounts inside the window
///
/// Empty input, or input with nothing in the window, yields zero.
pub fn summarize_with(
    records: &[ExpenseRecord],
    period: SummaryPeriod,
    reference_date: NaiveDate,
    options: &WindowOptions,
) -> Money {
    records
        .iter()
        .filter(|r| in_window(r.date(), period, reference_date, options))
        .map(ExpenseRecord::amount)
        .sum()
}

/// A windowed total together with what produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowedTotal {
    pub period: SummaryPeriod,
    pub reference_date: NaiveDate,
    pub total: Money,
    /// Number of records inside the window
    pub count: usize,
}

impl WindowedTotal {
    /// Compute the total and record count for one window
    pub fn compute(
        records: &[ExpenseRecord],
        period: SummaryPeriod,
        reference_date: NaiveDate,
        options: &WindowOptions,
    ) -> Self {
        let mut total = Money::zero();
        let mut count = 0;

        for record in records
            .iter()
            .filter(|r| in_window(r.date(), period, reference_date, options))
        {
            total += record.amount();
            count += 1;
        }

        Self {
            period,
            reference_date,
            total,
            count,
        }
    }
}
