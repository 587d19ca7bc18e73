//! Generic PostgreSQL implementation of ResourceRepository

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use top_core::entities::{Movie, Product, User};
use top_core::traits::{RepoResult, ResourceRepository};
use top_core::value_objects::{ListFilter, SortOrder, Window};

use crate::mappers::{bind_query_as, bind_query_scalar, PgResource};

use super::error::map_db_error;
use super::filter::{build_filter, live_condition, order_clause};

/// PostgreSQL repository for any [`PgResource`]
pub struct PgResourceRepository<R> {
    pool: PgPool,
    _resource: PhantomData<fn() -> R>,
}

/// PostgreSQL implementation of the user repository
pub type PgUserRepository = PgResourceRepository<User>;

/// PostgreSQL implementation of the product repository
pub type PgProductRepository = PgResourceRepository<Product>;

/// PostgreSQL implementation of the movie repository
pub type PgMovieRepository = PgResourceRepository<Movie>;

impl<R> Clone for PgResourceRepository<R> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

impl<R> PgResourceRepository<R> {
    /// Create a new repository over a shared pool
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _resource: PhantomData,
        }
    }
}

impl<R: PgResource> PgResourceRepository<R> {
    /// `WHERE id = $1`, restricted to live rows for soft-delete resources
    fn id_condition() -> String {
        match live_condition(&R::SPEC) {
            Some(live) => format!("WHERE id = $1 AND {live}"),
            None => "WHERE id = $1".to_string(),
        }
    }
}

#[async_trait]
impl<R: PgResource> ResourceRepository<R> for PgResourceRepository<R> {
    #[instrument(skip(self, draft), fields(resource = R::SPEC.name))]
    async fn insert(&self, draft: &R::Draft) -> RepoResult<R> {
        let placeholders: Vec<String> = (1..=R::WRITE_COLUMNS.len()).map(|i| format!("${i}")).collect();
        let query = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            R::SPEC.table,
            R::WRITE_COLUMNS.join(", "),
            placeholders.join(", "),
            R::COLUMNS
        );
        let values = R::draft_values(draft);

        let model = bind_query_as(sqlx::query_as::<_, R::Model>(&query), &values)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self), fields(resource = R::SPEC.name))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<R>> {
        let query = format!(
            "SELECT {} FROM {} {}",
            R::COLUMNS,
            R::SPEC.table,
            Self::id_condition()
        );

        let result = sqlx::query_as::<_, R::Model>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Into::into))
    }

    #[instrument(skip(self), fields(resource = R::SPEC.name))]
    async fn count(&self, filter: &ListFilter) -> RepoResult<i64> {
        let (where_clause, values, _) = build_filter(&R::SPEC, filter);
        let query = format!("SELECT COUNT(*)::BIGINT FROM {} {where_clause}", R::SPEC.table);

        bind_query_scalar(sqlx::query_scalar::<_, i64>(&query), &values)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self), fields(resource = R::SPEC.name))]
    async fn find(
        &self,
        filter: &ListFilter,
        order: &SortOrder,
        window: Window,
    ) -> RepoResult<Vec<R>> {
        let (where_clause, values, bind_idx) = build_filter(&R::SPEC, filter);
        let page_clause = match window.limit {
            Some(_) => format!("LIMIT ${bind_idx} OFFSET ${}", bind_idx + 1),
            None => format!("OFFSET ${bind_idx}"),
        };
        let query = format!(
            "SELECT {} FROM {} {where_clause} {} {page_clause}",
            R::COLUMNS,
            R::SPEC.table,
            order_clause(order)
        );

        let mut q = bind_query_as(sqlx::query_as::<_, R::Model>(&query), &values);
        if let Some(limit) = window.limit {
            q = q.bind(limit);
        }
        let rows = q
            .bind(window.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self, record), fields(resource = R::SPEC.name, id = record.id()))]
    async fn update(&self, record: &R) -> RepoResult<Option<R>> {
        let assignments: Vec<String> = R::WRITE_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = ${}", i + 2))
            .collect();
        let query = format!(
            "UPDATE {} SET {}, updated_at = NOW() {} RETURNING {}",
            R::SPEC.table,
            assignments.join(", "),
            Self::id_condition(),
            R::COLUMNS
        );
        let values = record.record_values();

        let result = bind_query_as(sqlx::query_as::<_, R::Model>(&query).bind(record.id()), &values)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Into::into))
    }

    #[instrument(skip(self), fields(resource = R::SPEC.name))]
    async fn delete(&self, id: i64) -> RepoResult<u64> {
        let query = if R::SPEC.soft_delete {
            format!(
                "UPDATE {} SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
                R::SPEC.table
            )
        } else {
            format!("DELETE FROM {} WHERE id = $1", R::SPEC.table)
        };

        let result = sqlx::query(&query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self), fields(resource = R::SPEC.name))]
    async fn average(&self, column: &'static str) -> RepoResult<f64> {
        let where_clause = live_condition(&R::SPEC)
            .map(|live| format!("WHERE {live}"))
            .unwrap_or_default();
        let query = format!(
            "SELECT COALESCE(AVG({column})::float8, 0.0) FROM {} {where_clause}",
            R::SPEC.table
        );

        sqlx::query_scalar::<_, f64>(&query)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self), fields(resource = R::SPEC.name))]
    async fn group_count(&self, column: &'static str) -> RepoResult<Vec<(String, i64)>> {
        let live = live_condition(&R::SPEC)
            .map(|live| format!("AND {live}"))
            .unwrap_or_default();
        let query = format!(
            "SELECT {column}, COUNT(*)::BIGINT FROM {} WHERE {column} <> '' {live} \
             GROUP BY {column} ORDER BY {column}",
            R::SPEC.table
        );

        sqlx::query_as::<_, (String, i64)>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)
    }
}
