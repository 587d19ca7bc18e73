//! Listing predicates, ordering and windows shared by the engine and the store

/// Lower bound on a numeric column (`column >= value`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub column: &'static str,
    pub value: f64,
}

/// Predicate for count and find.
///
/// Empty strings are treated as absent, so a count and a fetch built from the
/// same filter always see the same conditions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilter {
    /// Case-insensitive substring matched against the resource's search columns
    pub keyword: Option<String>,
    /// Equality on the resource's exact-filter column
    pub exact: Option<String>,
    pub at_least: Option<Threshold>,
}

impl ListFilter {
    pub fn new(keyword: Option<String>, exact: Option<String>) -> Self {
        Self {
            keyword: keyword.filter(|k| !k.is_empty()),
            exact: exact.filter(|e| !e.is_empty()),
            at_least: None,
        }
    }

    /// Only rows whose `column` is at least `value`
    pub fn at_least(mut self, column: &'static str, value: f64) -> Self {
        self.at_least = Some(Threshold { column, value });
        self
    }

    #[inline]
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref().filter(|k| !k.is_empty())
    }

    #[inline]
    pub fn exact(&self) -> Option<&str> {
        self.exact.as_deref().filter(|e| !e.is_empty())
    }
}

/// One ordering key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: &'static str,
    pub descending: bool,
}

/// Ordering applied to a find
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    keys: Vec<SortKey>,
}

impl SortOrder {
    /// Creation time descending, ties broken by id descending
    pub fn newest_first() -> Self {
        Self::desc("created_at").then_desc("id")
    }

    /// `column` descending, then newest first
    pub fn by_desc_then_newest(column: &'static str) -> Self {
        Self::desc(column).then_desc("created_at").then_desc("id")
    }

    pub fn desc(column: &'static str) -> Self {
        Self {
            keys: vec![SortKey {
                column,
                descending: true,
            }],
        }
    }

    pub fn then_desc(mut self, column: &'static str) -> Self {
        self.keys.push(SortKey {
            column,
            descending: true,
        });
        self
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::newest_first()
    }
}

/// Offset/limit slice of an ordered find; `limit: None` means uncapped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Window {
    pub offset: i64,
    pub limit: Option<i64>,
}

impl Window {
    pub fn new(offset: i64, limit: Option<i64>) -> Self {
        Self {
            offset: offset.max(0),
            limit,
        }
    }

    /// First `limit` rows; a non-positive limit means no cap
    pub fn first(limit: i64) -> Self {
        Self::new(0, (limit > 0).then_some(limit))
    }
}
