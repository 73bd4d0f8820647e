//! Category Ranking
//!
//! Groups expenses by category label and orders the groups by total spent.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{ExpenseRecord, Money};

/// Accumulated spending for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    /// Category label, exactly as recorded
    pub category: String,
    /// Sum of all amounts in this category
    pub total: Money,
    /// Number of records in this category
    pub count: usize,
}

impl CategoryTotal {
    /// Percentage of `grand_total` this category accounts for
    pub fn share_of(&self, grand_total: Money) -> f64 {
        if grand_total.is_zero() {
            0.0
        } else {
            (self.total.cents() as f64 / grand_total.cents() as f64) * 100.0
        }
    }
}

/// Rank categories by total spending
///
/// Labels are compared exactly (case-sensitive). The result is sorted by
/// total descending; equal totals are ordered by label ascending so output
/// never depends on hash order.
pub fn rank_by_category(records: &[ExpenseRecord]) -> Vec<CategoryTotal> {
    let mut by_category: HashMap<&str, (Money, usize)> = HashMap::new();

    for record in records {
        let entry = by_category
            .entry(record.category())
            .or_insert((Money::zero(), 0));
        entry.0 += record.amount();
        entry.1 += 1;
    }

    let mut ranking: Vec<CategoryTotal> = by_category
        .into_iter()
        .map(|(category, (total, count))| CategoryTotal {
            category: category.to_string(),
            total,
            count,
        })
        .collect();

    ranking.sort_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.category.cmp(&b.category))
    });

    ranking
}

/// Sum of every category total in a ranking
pub fn ranking_total(ranking: &[CategoryTotal]) -> Money {
    ranking.iter().map(|c| c.total).sum()
}
