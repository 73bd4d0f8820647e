//! CLI commands for summaries, rankings and charts

use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::config::Settings;
use crate::display::{
    format_rejected_rows, format_ranking_table, format_windowed_total, render_bar_chart,
    render_distribution,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::export_ranking_csv;
use crate::models::SummaryPeriod;
use crate::services::{ExpenseService, LoadedRecords};
use crate::storage::RecordStore;

/// Load records, printing a warning for every skipped row
fn load_with_warnings<S: RecordStore, W: Write>(
    service: &ExpenseService<S>,
    out: &mut W,
) -> ExpenseResult<LoadedRecords> {
    let loaded = service.load()?;
    if !loaded.rejected.is_empty() {
        writeln!(out, "{}", format_rejected_rows(&loaded.rejected))?;
    }
    Ok(loaded)
}

/// Print the total for one window
pub fn write_summary<S: RecordStore, W: Write>(
    service: &ExpenseService<S>,
    settings: &Settings,
    period: SummaryPeriod,
    reference_date: NaiveDate,
    out: &mut W,
) -> ExpenseResult<()> {
    let loaded = load_with_warnings(service, out)?;
    let windowed = loaded.summary(period, reference_date, &settings.window_options());
    writeln!(
        out,
        "{}",
        format_windowed_total(&windowed, &settings.currency_symbol)
    )?;
    Ok(())
}

/// Print the ranked category table
pub fn write_top<S: RecordStore, W: Write>(
    service: &ExpenseService<S>,
    settings: &Settings,
    limit: Option<usize>,
    out: &mut W,
) -> ExpenseResult<()> {
    let loaded = load_with_warnings(service, out)?;
    writeln!(
        out,
        "{}",
        format_ranking_table(&loaded.ranking(), &settings.currency_symbol, limit)
    )?;
    Ok(())
}

/// Handle `expenses top`, exporting to CSV when `output` is given
pub fn handle_top<S: RecordStore, W: Write>(
    service: &ExpenseService<S>,
    settings: &Settings,
    limit: Option<usize>,
    output: Option<&Path>,
    out: &mut W,
) -> ExpenseResult<()> {
    let Some(path) = output else {
        return write_top(service, settings, limit, out);
    };

    let loaded = load_with_warnings(service, out)?;
    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    export_ranking_csv(&loaded.ranking(), limit, BufWriter::new(file))?;
    writeln!(out, "Top categories exported to: {}", path.display())?;

    Ok(())
}

/// Print the bar chart followed by the distribution
pub fn write_chart<S: RecordStore, W: Write>(
    service: &ExpenseService<S>,
    settings: &Settings,
    width: usize,
    out: &mut W,
) -> ExpenseResult<()> {
    let loaded = load_with_warnings(service, out)?;
    let chart = loaded.chart_data();

    writeln!(
        out,
        "{}",
        render_bar_chart(&chart, &settings.currency_symbol, width)
    )?;
    writeln!(out)?;
    writeln!(out, "{}", render_distribution(&chart, width))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, Money};
    use crate::storage::MemoryRecordStore;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service() -> ExpenseService<MemoryRecordStore> {
        let record = |d, cents, category: &str| {
            ExpenseRecord::new(d, Money::from_cents(cents), category, "").unwrap()
        };
        ExpenseService::new(MemoryRecordStore::with_records(vec![
            record(date(2024, 3, 15), 10000, "Food"),
            record(date(2024, 3, 15), 5000, "Travel"),
            record(date(2024, 3, 10), 3000, "Food"),
        ]))
    }

    fn run(f: impl FnOnce(&mut Vec<u8>) -> ExpenseResult<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_summary() {
        let service = service();
        let settings = Settings::default();

        let daily = run(|out| {
            write_summary(&service, &settings, SummaryPeriod::Daily, date(2024, 3, 15), out)
        });
        assert_eq!(
            daily.trim(),
            "Daily Expense: ₹150.00 (2 expenses, as of 2024-03-15)"
        );

        let weekly = run(|out| {
            write_summary(&service, &settings, SummaryPeriod::Weekly, date(2024, 3, 15), out)
        });
        assert!(weekly.starts_with("Weekly Expense: ₹180.00"));
    }

    #[test]
    fn test_write_top_and_chart() {
        let service = service();
        let settings = Settings::default();

        let top = run(|out| write_top(&service, &settings, None, out));
        assert!(top.starts_with("Top Spending Categories"));
        assert!(top.find("Food").unwrap() < top.find("Travel").unwrap());

        let chart = run(|out| write_chart(&service, &settings, 10, out));
        assert!(chart.contains("Expenses by Category"));
        assert!(chart.contains("Expense Distribution"));
    }

    #[test]
    fn test_handle_top_exports_csv() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("top.csv");
        let service = service();

        let message = run(|out| {
            handle_top(&service, &Settings::default(), Some(1), Some(&path), out)
        });
        assert!(message.starts_with("Top categories exported to:"));

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents.lines().collect::<Vec<_>>(),
            vec!["Rank,Category,Amount,Count,Percentage", "1,Food,130.00,2,72.22"]
        );
    }
}
