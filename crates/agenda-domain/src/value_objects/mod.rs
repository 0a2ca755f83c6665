//! Value objects - immutable, validated domain concepts

pub mod id;
pub mod title;

pub use id::{CategoryId, Id, TaskId};
pub use title::Title;
