//! Terminal charts
//!
//! Renders [`ChartData`] as a horizontal bar chart and as a proportional
//! distribution (the terminal stand-in for a pie chart).

use super::report::{format_bar, format_percentage, left_align, separator, truncate};
use crate::reports::ChartData;

/// Labels longer than this are truncated in charts
const MAX_LABEL_WIDTH: usize = 20;

/// Fill glyphs cycled through for distribution slices
const SLICE_GLYPHS: [char; 6] = ['█', '▓', '▒', '░', '#', '*'];

fn label_width(chart: &ChartData) -> usize {
    chart
        .labels
        .iter()
        .map(|l| truncate(l, MAX_LABEL_WIDTH).chars().count())
        .max()
        .unwrap_or(0)
}

/// "Expenses by Category": one bar per label, scaled to the largest value
pub fn render_bar_chart(chart: &ChartData, symbol: &str, width: usize) -> String {
    let title = "Expenses by Category";
    if chart.is_empty() {
        return format!("{}\n{}\nNo expenses recorded yet.", title, separator(title.len()));
    }

    let max = chart.max_value().as_f64();
    let label_width = label_width(chart);

    let mut lines = vec![title.to_string(), separator(label_width + width + 12)];
    for (label, value) in chart.iter() {
        lines.push(format!(
            "{}  {} {}",
            left_align(&truncate(label, MAX_LABEL_WIDTH), label_width),
            format_bar(value.as_f64(), max, width),
            value.format_with_symbol(symbol)
        ));
    }

    lines.join("\n")
}

/// Number of strip cells each slice gets
///
/// Slice boundaries are rounded from cumulative shares, so the cells always
/// add up to `width` when the total is non-zero.
fn slice_widths(chart: &ChartData, width: usize) -> Vec<usize> {
    let total = chart.total().cents();
    if total <= 0 {
        return vec![0; chart.len()];
    }

    let mut widths = Vec::with_capacity(chart.len());
    let mut cumulative = 0i64;
    let mut previous_edge = 0usize;
    for value in &chart.values {
        cumulative += value.cents();
        let edge = ((cumulative as f64 / total as f64) * width as f64).round() as usize;
        widths.push(edge - previous_edge);
        previous_edge = edge;
    }
    widths
}

/// "Expense Distribution": a stacked strip plus a legend with percentages
pub fn render_distribution(chart: &ChartData, width: usize) -> String {
    let title = "Expense Distribution";
    if chart.is_empty() {
        return format!("{}\n{}\nNo expenses recorded yet.", title, separator(title.len()));
    }

    let strip: String = slice_widths(chart, width)
        .into_iter()
        .enumerate()
        .map(|(i, cells)| SLICE_GLYPHS[i % SLICE_GLYPHS.len()].to_string().repeat(cells))
        .collect();

    let label_width = label_width(chart);
    let mut lines = vec![
        title.to_string(),
        separator(width + 2),
        format!("[{}]", strip),
    ];
    for (i, (label, pct)) in chart.labels.iter().zip(chart.percentages()).enumerate() {
        lines.push(format!(
            "{} {}  {:>6}",
            SLICE_GLYPHS[i % SLICE_GLYPHS.len()],
            left_align(&truncate(label, MAX_LABEL_WIDTH), label_width),
            format_percentage(pct)
        ));
    }

    lines.join("\n")
}
