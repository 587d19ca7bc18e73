//! Entity to model mappers
//!
//! This module provides conversions between domain entities (top-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - [`PgResource`]: column lists and bind values used to write an entity

mod bind;
mod movie;
mod product;
mod user;

use sqlx::postgres::PgRow;
use sqlx::FromRow;
use top_core::Resource;

pub use bind::BindValue;
pub(crate) use bind::{bind_query_as, bind_query_scalar};

/// A resource the generic PostgreSQL repository knows how to read and write
pub trait PgResource: Resource {
    /// Row type read back from the table
    type Model: for<'r> FromRow<'r, PgRow> + Send + Unpin + Into<Self>;

    /// Column list for SELECT and RETURNING clauses
    const COLUMNS: &'static str;

    /// Columns written on insert and update, in bind order
    const WRITE_COLUMNS: &'static [&'static str];

    /// Values for [`Self::WRITE_COLUMNS`] taken from a creation draft
    fn draft_values(draft: &Self::Draft) -> Vec<BindValue>;

    /// Values for [`Self::WRITE_COLUMNS`] taken from a stored record
    fn record_values(&self) -> Vec<BindValue>;
}
