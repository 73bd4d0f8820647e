//! Chart data projection
//!
//! Splits a category ranking into parallel label and value sequences for a
//! chart renderer. Order is taken from the ranking as-is.

use crate::models::Money;

use super::categories::CategoryTotal;

/// Parallel labels and values, index-aligned
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<Money>,
}

impl ChartData {
    pub fn from_ranking(ranking: &[CategoryTotal]) -> Self {
        let (labels, values) = ranking
            .iter()
            .map(|c| (c.category.clone(), c.total))
            .unzip();
        Self { labels, values }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn total(&self) -> Money {
        self.values.iter().sum()
    }

    /// Largest value, or zero for an empty chart
    pub fn max_value(&self) -> Money {
        self.values.iter().copied().max().unwrap_or_default()
    }

    /// Each value's percentage of the total; all zero when the total is zero
    pub fn percentages(&self) -> Vec<f64> {
        let total = self.total();
        self.values
            .iter()
            .map(|v| {
                if total.is_zero() {
                    0.0
                } else {
                    v.cents() as f64 / total.cents() as f64 * 100.0
                }
            })
            .collect()
    }

    /// Iterate `(label, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}
