//! Agenda Domain Layer - Pure Business Logic
//!
//! This crate contains the pure domain logic for agenda (task management)
//! with no infrastructure dependencies.
//!
//! ## Architecture
//!
//! Following Clean Architecture principles:
//! - **Value Objects**: Immutable, validated domain concepts (`Title`, typed ids)
//! - **Entities**: Domain objects with identity (`Task`, `Category`)
//!
//! Identity is store-assigned: entities are constructed with an unassigned id
//! and receive a real one when a repository adapter persists them.

#![warn(missing_docs)]

pub mod entities;
pub mod value_objects;

// Re-export core domain types
pub use entities::{Category, Task, TaskStatus};
pub use value_objects::{CategoryId, TaskId, Title};

/// Domain Result type
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-specific errors
///
/// All domain errors are value types with no external dependencies.
/// Uses thiserror for ergonomic error handling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DomainError {
    /// Task title failed validation
    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    /// Category name failed validation
    #[error("Invalid category name: {0}")]
    InvalidCategoryName(String),

    /// Invalid status transition attempted
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    /// Task invariant violation
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Task not found in the store
    #[error("Task not found: {0}")]
    TaskNotFound(String),

    /// Persistence fault raised by a repository
    #[error("Storage error: {0}")]
    Storage(String),

    /// General domain logic error
    #[error("Domain logic error: {0}")]
    Logic(String),
}

impl DomainError {
    /// Create an invariant violation error
    pub fn invariant_violation(message: impl Into<String>) -> Self {
        Self::InvariantViolation(message.into())
    }

    /// Create an invalid state transition error
    pub fn invalid_transition(from: &str, to: &str) -> Self {
        Self::InvalidStateTransition(format!("{from} -> {to}"))
    }

    /// Create a storage fault
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

impl From<String> for DomainError {
    fn from(error: String) -> Self {
        Self::Logic(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_creation() {
        let err = DomainError::invariant_violation("test");
        assert!(matches!(err, DomainError::InvariantViolation(_)));

        let err = DomainError::invalid_transition("Created", "Created");
        assert!(matches!(err, DomainError::InvalidStateTransition(_)));

        let err = DomainError::storage("disk on fire");
        assert!(matches!(err, DomainError::Storage(_)));
    }

    #[test]
    fn test_domain_error_display_carries_detail() {
        let err = DomainError::invalid_transition("Completed", "Overdue");
        assert_eq!(err.to_string(), "Invalid state transition: Completed -> Overdue");
    }

    #[test]
    fn test_domain_result() {
        let result: DomainResult<u32> = Ok(42);
        assert!(result.is_ok());

        let result: DomainResult<u32> = Err(DomainError::Logic("test".to_string()));
        assert!(result.is_err());
    }
}
