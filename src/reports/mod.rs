//! Reports module for the expense log
//!
//! The aggregation engine: windowed totals, category ranking and the chart
//! projection. Everything here is a pure function over a slice of records.
//! Nothing performs I/O, reads the clock, or mutates its input, so partial
//! results from separate batches can be combined by adding them.

pub mod categories;
pub mod chart;
pub mod summary;

pub use categories::{rank_by_category, ranking_total, CategoryTotal};
pub use chart::ChartData;
pub use summary::{in_window, summarize, summarize_with, WindowOptions, WindowedTotal};
