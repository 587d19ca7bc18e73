//! Value objects - immutable query and result types

mod page;
mod query;
mod stats;

pub use page::PageRequest;
pub use query::{ListFilter, SortKey, SortOrder, Threshold, Window};
pub use stats::CategoryStats;
