//! Movie service
//!
//! The generic resource operations plus rating-ordered listings and stats.

use std::ops::Deref;

use top_core::traits::ResourceRepository;
use top_core::{CategoryStats, ListFilter, Movie, SortOrder, Window};
use tracing::{debug, instrument};

use super::error::ServiceResult;
use super::resource::ResourceService;
use super::stats::StatsService;

/// Movie service
pub struct MovieService<'a> {
    repo: &'a dyn ResourceRepository<Movie>,
    resources: ResourceService<'a, Movie>,
}

impl<'a> MovieService<'a> {
    /// Create a new MovieService
    pub fn new(repo: &'a dyn ResourceRepository<Movie>) -> Self {
        Self {
            repo,
            resources: ResourceService::new(repo),
        }
    }

    /// Movies of one genre, best rated first.
    ///
    /// An empty genre matches every movie; a non-positive limit means no cap.
    #[instrument(skip(self))]
    pub async fn list_by_genre(&self, genre: &str, limit: i64) -> ServiceResult<Vec<Movie>> {
        let filter = ListFilter::new(None, Some(genre.to_string()));
        self.ranked(&filter, limit).await
    }

    /// Movies rated at least [`Movie::TOP_RATED_THRESHOLD`], best rated first
    #[instrument(skip(self))]
    pub async fn top_rated(&self, limit: i64) -> ServiceResult<Vec<Movie>> {
        let filter = ListFilter::default().at_least("rating", Movie::TOP_RATED_THRESHOLD);
        self.ranked(&filter, limit).await
    }

    /// Total count, mean rating and per-genre counts
    pub async fn stats(&self) -> ServiceResult<CategoryStats> {
        StatsService::movies(self.repo).compute().await
    }

    async fn ranked(&self, filter: &ListFilter, limit: i64) -> ServiceResult<Vec<Movie>> {
        let movies = self
            .repo
            .find(
                filter,
                &SortOrder::by_desc_then_newest("rating"),
                Window::first(limit),
            )
            .await?;

        debug!(returned = movies.len(), "Ranked movies listed");

        Ok(movies)
    }
}

impl<'a> Deref for MovieService<'a> {
    type Target = ResourceService<'a, Movie>;

    fn deref(&self) -> &Self::Target {
        &self.resources
    }
}
