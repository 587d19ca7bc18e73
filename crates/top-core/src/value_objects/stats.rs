//! Aggregate statistics over a resource table

use std::collections::BTreeMap;

/// Row count, mean of a numeric column, and per-category row counts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryStats {
    pub total: i64,
    /// 0 when the table is empty
    pub average: f64,
    /// Only non-empty categories appear here; `total` still counts every row
    pub per_category: BTreeMap<String, i64>,
}

impl CategoryStats {
    pub fn new(total: i64, average: f64, groups: impl IntoIterator<Item = (String, i64)>) -> Self {
        Self {
            total,
            average,
            per_category: groups
                .into_iter()
                .filter(|(category, _)| !category.is_empty())
                .collect(),
        }
    }
}
