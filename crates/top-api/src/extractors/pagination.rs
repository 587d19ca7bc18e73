//! Listing query extractors
//!
//! Page-based listing parameters and the limit used by ranked movie listings.
//! Both spellings of the page size (`page_size`, `limit`) and of the keyword
//! (`keyword`, `search`) are accepted.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::{Deserialize, Deserializer};
use top_core::PageRequest;

use crate::response::ApiError;

/// Limit applied to ranked listings when the query has none
pub const DEFAULT_RANKED_LIMIT: i64 = 10;

/// Read an integer parameter; an empty or non-numeric value counts as absent
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

/// Query parameters of a paginated list endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default, deserialize_with = "lenient_int")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub page_size: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub limit: Option<i64>,
    pub keyword: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub genre: Option<String>,
}

impl ListQuery {
    /// Normalized page and page size; `page_size` wins over `limit`
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size.or(self.limit))
    }

    /// Search text from `keyword`, falling back to `search`
    pub fn keyword(&self) -> Option<String> {
        self.keyword.clone().or_else(|| self.search.clone())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<ListQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(query)
    }
}

/// Query parameters of the top-rated and by-genre endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankedQuery {
    pub genre: Option<String>,
    /// Kept raw: absent means the default, unparsable means uncapped
    pub limit: Option<String>,
}

impl RankedQuery {
    /// Requested limit. [`DEFAULT_RANKED_LIMIT`] when absent, 0 (no cap)
    /// when not a number.
    pub fn limit(&self) -> i64 {
        match &self.limit {
            None => DEFAULT_RANKED_LIMIT,
            Some(raw) => raw.trim().parse().unwrap_or(0),
        }
    }

    pub fn genre(&self) -> &str {
        self.genre.as_deref().unwrap_or_default()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RankedQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<RankedQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(query)
    }
}
