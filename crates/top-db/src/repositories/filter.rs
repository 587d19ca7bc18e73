//! WHERE / ORDER BY builders shared by count and find
//!
//! Column names come only from `ResourceSpec` and `SortOrder` constants;
//! user input is always bound as a parameter.

use top_core::{ListFilter, ResourceSpec, SortOrder};

use crate::mappers::BindValue;

/// Condition excluding soft-deleted rows, if the resource has any
pub(crate) fn live_condition(spec: &ResourceSpec) -> Option<&'static str> {
    spec.soft_delete.then_some("deleted_at IS NULL")
}

/// Build the WHERE clause for a list filter.
///
/// Returns the clause (empty when unconditional), the values to bind, and the
/// next free placeholder index.
pub(crate) fn build_filter(spec: &ResourceSpec, filter: &ListFilter) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    if let Some(live) = live_condition(spec) {
        conditions.push(live.to_string());
    }

    if let Some(keyword) = filter.keyword() {
        if !spec.search_columns.is_empty() {
            let matches: Vec<String> = spec
                .search_columns
                .iter()
                .map(|column| format!("{column} ILIKE ${bind_idx}"))
                .collect();
            conditions.push(format!("({})", matches.join(" OR ")));
            bind_idx += 1;
            bind_values.push(BindValue::Text(format!("%{keyword}%")));
        }
    }

    if let (Some(column), Some(value)) = (spec.exact_column, filter.exact()) {
        conditions.push(format!("{column} = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(value.to_string()));
    }

    if let Some(threshold) = filter.at_least {
        conditions.push(format!("{} >= ${bind_idx}", threshold.column));
        bind_idx += 1;
        bind_values.push(BindValue::Float(threshold.value));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}

/// Render an ORDER BY clause
pub(crate) fn order_clause(order: &SortOrder) -> String {
    if order.keys().is_empty() {
        return String::new();
    }
    let keys: Vec<String> = order
        .keys()
        .iter()
        .map(|key| {
            let direction = if key.descending { "DESC" } else { "ASC" };
            format!("{} {direction}", key.column)
        })
        .collect();
    format!("ORDER BY {}", keys.join(", "))
}
