//! Application layer - use cases and orchestration
//!
//! Implements the command/handler pattern with separate command and query
//! handlers. Handlers orchestrate domain logic through the ports; a
//! repository failure during execution never escapes a handler as a panic,
//! only as an `Err` in the returned result.

pub mod commands;
pub mod handlers;
pub mod queries;

pub use commands::{RecomputeDeadlines, RegisterTask};
pub use queries::GetCategoryById;

/// Application Result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Application-specific errors
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    /// Fault raised below the application layer during execution
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    /// A command was constructed with invalid fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// Vocabulary for callers that treat an absent lookup result as an
    /// error at their own boundary; the handlers themselves report absence
    /// as a successful empty result
    #[error("Not found: {0}")]
    NotFound(String),
}
