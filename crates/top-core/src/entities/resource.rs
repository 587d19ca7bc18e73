//! The capability shared by every managed resource type
//!
//! The resource engine, the store and the transport are written once against
//! [`Resource`]; each entity only declares its [`ResourceSpec`] and how a
//! partial update is merged into it.

use chrono::{DateTime, Utc};

/// Static description of a resource type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSpec {
    /// Human readable name used in errors and logs ("user", "product", ...)
    pub name: &'static str,
    /// Backing table
    pub table: &'static str,
    /// Columns searched (case-insensitive substring, OR-ed) by a list keyword
    pub search_columns: &'static [&'static str],
    /// Column matched exactly by a list's categorical filter, if the type has one
    pub exact_column: Option<&'static str>,
    /// Whether deletion marks the row instead of removing it
    pub soft_delete: bool,
}

/// A borrowed field value, addressed by column name
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl<'a> FieldValue<'a> {
    /// Text content, if this is a text field
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// Numeric content, if this is a numeric field
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

/// A persistent record managed through create / fetch / list / update / delete
pub trait Resource: Clone + Send + Sync + 'static {
    /// Creation payload: every mutable field, no identity or timestamps
    type Draft: Clone + Send + Sync + 'static;

    /// Partial update payload: every mutable field optional
    type Patch: Clone + Default + Send + Sync + 'static;

    const SPEC: ResourceSpec;

    fn id(&self) -> i64;

    fn created_at(&self) -> DateTime<Utc>;

    fn updated_at(&self) -> DateTime<Utc>;

    /// Overwrite every field present in `patch`, keep the rest.
    fn merge(&mut self, patch: Self::Patch);

    /// Look up a searchable, filterable or sortable field by column name.
    fn field(&self, column: &str) -> Option<FieldValue<'_>>;
}

/// Assign `value` to `slot` when present.
#[inline]
pub(crate) fn apply<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
