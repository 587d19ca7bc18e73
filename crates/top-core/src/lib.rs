//! # top-core
//!
//! Domain layer containing the managed resources (users, products, movies),
//! the query value objects used for listing, and the repository ports.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    FieldValue, Movie, MovieDraft, MoviePatch, Product, ProductDraft, ProductPatch, Resource,
    ResourceSpec, Status, User, UserDraft, UserPatch,
};
pub use error::DomainError;
pub use traits::{RepoResult, ResourceRepository};
pub use value_objects::{
    CategoryStats, ListFilter, PageRequest, SortKey, SortOrder, Threshold, Window,
};
