//! Domain entities - the resources managed by the service

mod movie;
mod product;
mod resource;
mod status;
mod user;

pub use movie::{Movie, MovieDraft, MoviePatch};
pub use product::{Product, ProductDraft, ProductPatch};
pub use resource::{FieldValue, Resource, ResourceSpec};
pub use status::Status;
pub use user::{User, UserDraft, UserPatch};
