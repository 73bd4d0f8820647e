//! Display formatting for terminal output
//!
//! Turns aggregation results into text: summary lines, the ranked category
//! table, and the bar and distribution charts.

pub mod chart;
pub mod report;
pub mod summary;

pub use chart::{render_bar_chart, render_distribution};
pub use summary::{
    format_rejected_rows, format_ranking_table, format_summary_line, format_windowed_total,
};
