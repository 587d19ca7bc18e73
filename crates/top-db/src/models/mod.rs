//! Database models - SQLx-compatible structs for PostgreSQL tables

mod movie;
mod product;
mod user;

pub use movie::MovieModel;
pub use product::ProductModel;
pub use user::UserModel;
