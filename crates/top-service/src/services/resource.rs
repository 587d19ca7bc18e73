//! Resource service
//!
//! The CRUD and paginated-list engine shared by every managed resource.

use top_core::traits::ResourceRepository;
use top_core::{ListFilter, PageRequest, Resource, SortOrder};
use tracing::{debug, info, instrument};

use super::error::{ServiceError, ServiceResult};

/// One page of a filtered listing
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Rows matching the filter, across all pages
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// Resource service
pub struct ResourceService<'a, R: Resource> {
    repo: &'a dyn ResourceRepository<R>,
}

impl<'a, R: Resource> ResourceService<'a, R> {
    /// Create a new ResourceService
    pub fn new(repo: &'a dyn ResourceRepository<R>) -> Self {
        Self { repo }
    }

    /// Insert a new record from a validated draft
    #[instrument(skip(self, draft), fields(resource = R::SPEC.name))]
    pub async fn create(&self, draft: R::Draft) -> ServiceResult<R> {
        let record = self.repo.insert(&draft).await?;

        info!(id = record.id(), "{} created", R::SPEC.name);

        Ok(record)
    }

    /// Fetch a live record by ID
    #[instrument(skip(self), fields(resource = R::SPEC.name))]
    pub async fn get(&self, id: i64) -> ServiceResult<R> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(R::SPEC.name, id))
    }

    /// Paginated listing, newest first.
    ///
    /// The exact filter is dropped for resources without an exact-filter
    /// column. A page past the end yields no items and the real total.
    #[instrument(skip(self), fields(resource = R::SPEC.name))]
    pub async fn list(
        &self,
        page: PageRequest,
        keyword: Option<String>,
        exact: Option<String>,
    ) -> ServiceResult<Page<R>> {
        let exact = exact.filter(|_| R::SPEC.exact_column.is_some());
        let filter = ListFilter::new(keyword, exact);

        let total = self.repo.count(&filter).await?;
        let items = self
            .repo
            .find(&filter, &SortOrder::newest_first(), page.window())
            .await?;

        debug!(total, returned = items.len(), "Listed {}s", R::SPEC.name);

        Ok(Page {
            items,
            total,
            page: page.page(),
            page_size: page.page_size(),
        })
    }

    /// Merge the fields present in `patch` into the stored record and rewrite it
    #[instrument(skip(self, patch), fields(resource = R::SPEC.name))]
    pub async fn update(&self, id: i64, patch: R::Patch) -> ServiceResult<R> {
        let mut record = self.get(id).await?;
        record.merge(patch);

        // The row may have been deleted since the fetch
        let updated = self
            .repo
            .update(&record)
            .await?
            .ok_or_else(|| ServiceError::not_found(R::SPEC.name, id))?;

        info!(id, "{} updated", R::SPEC.name);

        Ok(updated)
    }

    /// Delete a record; soft for users and products, hard for movies
    #[instrument(skip(self), fields(resource = R::SPEC.name))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        let affected = self.repo.delete(id).await?;
        if affected == 0 {
            return Err(ServiceError::not_found(R::SPEC.name, id));
        }

        info!(id, soft = R::SPEC.soft_delete, "{} deleted", R::SPEC.name);

        Ok(())
    }
}
