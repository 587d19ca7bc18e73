//! Repository implementations
//!
//! PostgreSQL implementation of the repository port defined in top-core.
//! One generic repository serves every resource; the per-type differences
//! (table, columns, searchable fields, soft delete) come from the resource's
//! `ResourceSpec` and its [`PgResource`](crate::mappers::PgResource) mapping.

mod error;
mod filter;
mod resource;

pub use error::map_db_error;
pub use resource::{PgMovieRepository, PgProductRepository, PgResourceRepository, PgUserRepository};
