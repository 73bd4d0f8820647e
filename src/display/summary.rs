//! Summary and ranking display formatting
//!
//! Formats windowed totals and the category ranking for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::report::format_percentage;
use crate::models::{Money, SummaryPeriod};
use crate::reports::{ranking_total, CategoryTotal, WindowedTotal};
use crate::storage::RejectedRows;

/// One-line total for a period, e.g. "Daily Expense: ₹130.00"
pub fn format_summary_line(period: SummaryPeriod, total: Money, symbol: &str) -> String {
    format!("{} Expense: {}", period, total.format_with_symbol(symbol))
}

/// Summary line with the record count and reference date
pub fn format_windowed_total(windowed: &WindowedTotal, symbol: &str) -> String {
    let noun = if windowed.count == 1 { "expense" } else { "expenses" };
    format!(
        "{} ({} {}, as of {})",
        format_summary_line(windowed.period, windowed.total, symbol),
        windowed.count,
        noun,
        windowed.reference_date
    )
}

#[derive(Tabled)]
struct RankingRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Share")]
    share: String,
}

/// Ranked category table, highest spending first
///
/// `limit` keeps only the first N rows; the grand total always covers the
/// whole ranking.
pub fn format_ranking_table(
    ranking: &[CategoryTotal],
    symbol: &str,
    limit: Option<usize>,
) -> String {
    if ranking.is_empty() {
        return "No expenses recorded yet.".to_string();
    }

    let grand_total = ranking_total(ranking);
    let shown = limit.unwrap_or(ranking.len()).min(ranking.len());

    let rows: Vec<RankingRow> = ranking
        .iter()
        .take(shown)
        .enumerate()
        .map(|(i, entry)| RankingRow {
            rank: i + 1,
            category: entry.category.clone(),
            amount: entry.total.format_with_symbol(symbol),
            count: entry.count,
            share: format_percentage(entry.share_of(grand_total)),
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()));

    let mut output = String::from("Top Spending Categories\n\n");
    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\n\nTotal: {}",
        grand_total.format_with_symbol(symbol)
    ));
    if shown < ranking.len() {
        output.push_str(&format!(
            " ({} of {} categories shown)",
            shown,
            ranking.len()
        ));
    }

    output
}

/// Warning lines for rows skipped while loading
pub fn format_rejected_rows(rejected: &RejectedRows) -> String {
    rejected
        .iter()
        .map(|(row, err)| format!("Warning: skipped row {}: {}", row, err))
        .collect::<Vec<_>>()
        .join("\n")
}
