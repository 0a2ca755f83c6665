//! Domain layer - pure business logic and ports
//!
//! Re-exports the domain crate's entities and value objects, and defines
//! the port traits handlers depend on. No infrastructure concerns.

pub mod ports;

pub use agenda_domain::{
    Category, CategoryId, DomainError, DomainResult, Task, TaskId, TaskStatus, Title,
};
