//! Aggregate statistics over a resource table

use top_core::traits::ResourceRepository;
use top_core::{CategoryStats, ListFilter, Movie, Resource};
use tracing::instrument;

use super::error::ServiceResult;

/// Which columns a resource's statistics are computed over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSpec {
    /// Numeric column averaged over all rows
    pub value_column: &'static str,
    /// Text column rows are counted by
    pub category_column: &'static str,
}

impl StatsSpec {
    /// Movie rating averaged, movies counted per genre
    pub const MOVIE_RATINGS: StatsSpec = StatsSpec {
        value_column: "rating",
        category_column: "genre",
    };
}

/// Stats service
pub struct StatsService<'a, R: Resource> {
    repo: &'a dyn ResourceRepository<R>,
    spec: StatsSpec,
}

impl<'a, R: Resource> StatsService<'a, R> {
    pub fn new(repo: &'a dyn ResourceRepository<R>, spec: StatsSpec) -> Self {
        Self { repo, spec }
    }

    /// Total rows, mean of the value column, and non-empty category counts.
    ///
    /// The three reads are independent store calls.
    #[instrument(skip(self), fields(resource = R::SPEC.name))]
    pub async fn compute(&self) -> ServiceResult<CategoryStats> {
        let total = self.repo.count(&ListFilter::default()).await?;
        let average = self.repo.average(self.spec.value_column).await?;
        let groups = self.repo.group_count(self.spec.category_column).await?;

        Ok(CategoryStats::new(total, average, groups))
    }
}

impl<'a> StatsService<'a, Movie> {
    pub fn movies(repo: &'a dyn ResourceRepository<Movie>) -> Self {
        Self::new(repo, StatsSpec::MOVIE_RATINGS)
    }
}
