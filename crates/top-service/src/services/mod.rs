//! Business logic services
//!
//! The resource engine is written once ([`ResourceService`]) and instantiated
//! per resource type; movies add rating-ordered listings and statistics.

pub mod context;
pub mod error;
pub mod movie;
pub mod resource;
pub mod stats;

#[cfg(test)]
mod memory;

// Re-export all services for convenience
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use movie::MovieService;
pub use resource::{Page, ResourceService};
pub use stats::{StatsService, StatsSpec};
