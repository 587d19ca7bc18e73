//! Axum extractors for request handling
//!
//! Custom extractors for validation, listing queries, and path IDs.

mod pagination;
mod path;
mod validated;

pub use pagination::{ListQuery, RankedQuery, DEFAULT_RANKED_LIMIT};
pub use path::IdPath;
pub use validated::ValidatedJson;
