//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod health;
pub mod movies;
pub mod products;
pub mod users;
