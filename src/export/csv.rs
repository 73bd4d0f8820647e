//! CSV export of the category ranking

use serde::Serialize;
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::reports::{ranking_total, CategoryTotal};

pub const RANKING_CSV_HEADER: [&str; 5] = ["Rank", "Category", "Amount", "Count", "Percentage"];

#[derive(Serialize)]
struct RankingCsvRow<'a> {
    rank: usize,
    category: &'a str,
    amount: String,
    count: usize,
    percentage: String,
}

/// Export the ranking, highest spending first
///
/// Amounts are plain decimals without a currency symbol. `limit` keeps only
/// the first N rows; percentages are still shares of the full total.
pub fn export_ranking_csv<W: Write>(
    ranking: &[CategoryTotal],
    limit: Option<usize>,
    writer: W,
) -> ExpenseResult<()> {
    let grand_total = ranking_total(ranking);
    let shown = limit.unwrap_or(ranking.len());

    let mut csv_writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(RANKING_CSV_HEADER)?;

    for (i, entry) in ranking.iter().take(shown).enumerate() {
        csv_writer.serialize(RankingCsvRow {
            rank: i + 1,
            category: &entry.category,
            amount: entry.total.to_decimal_string(),
            count: entry.count,
            percentage: format!("{:.2}", entry.share_of(grand_total)),
        })?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))
}
