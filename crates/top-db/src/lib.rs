//! # top-db
//!
//! Database layer implementing the repository port with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides the PostgreSQL implementation of the
//! `ResourceRepository` port defined in `top-core`. It handles:
//!
//! - Connection pool management and embedded migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - One generic repository shared by users, products and movies
//!
//! ## Usage
//!
//! ```rust,ignore
//! use top_db::{create_pool, run_migrations, DatabaseConfig, PgUserRepository};
//! use top_core::traits::ResourceRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use mappers::{BindValue, PgResource};
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    map_db_error, PgMovieRepository, PgProductRepository, PgResourceRepository, PgUserRepository,
};
