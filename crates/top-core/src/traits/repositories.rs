//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. A single generic port serves every
//! [`Resource`]; its [`ResourceSpec`](crate::ResourceSpec) tells the
//! implementation which columns to search and whether deletion is soft.

use async_trait::async_trait;

use crate::entities::Resource;
use crate::error::DomainError;
use crate::value_objects::{ListFilter, SortOrder, Window};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

#[async_trait]
pub trait ResourceRepository<R: Resource>: Send + Sync {
    /// Insert a new record; the store assigns id and timestamps
    async fn insert(&self, draft: &R::Draft) -> RepoResult<R>;

    /// Find a live record by ID (soft-deleted rows are excluded)
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<R>>;

    /// Count live records matching the filter
    async fn count(&self, filter: &ListFilter) -> RepoResult<i64>;

    /// Find live records matching the filter, ordered and windowed
    async fn find(
        &self,
        filter: &ListFilter,
        order: &SortOrder,
        window: Window,
    ) -> RepoResult<Vec<R>>;

    /// Rewrite every mutable field of a live record.
    ///
    /// Returns `None` when the record no longer exists.
    async fn update(&self, record: &R) -> RepoResult<Option<R>>;

    /// Delete by ID (soft or hard per the resource), returning rows affected
    async fn delete(&self, id: i64) -> RepoResult<u64>;

    /// Mean of a numeric column over live records, 0 when there are none
    async fn average(&self, column: &'static str) -> RepoResult<f64>;

    /// Live record counts grouped by a text column
    async fn group_count(&self, column: &'static str) -> RepoResult<Vec<(String, i64)>>;
}
