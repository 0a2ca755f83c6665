//! # Agenda Core
//!
//! Command/handler pipeline for the agenda task manager.
//!
//! Immutable intent objects (commands and queries) are dispatched to
//! single-purpose handlers; each handler performs its repository work,
//! converts any failure into an [`ApplicationResult`] and reports the
//! outcome through an injected diagnostic log. Repository failures are
//! contained at the handler boundary - callers observe them only through
//! the returned result, never as a panic.
//!
//! The crate is layered the usual way:
//! - [`domain`] re-exports the pure domain crate and defines the ports
//!   handlers depend on (repository, diagnostic log, clock)
//! - [`application`] holds commands, queries and their handlers
//! - [`infrastructure`] provides adapters for the ports

#![warn(rust_2018_idioms)]

pub mod application;
pub mod domain;
pub mod infrastructure;

// Domain layer exports
pub use domain::{
    Category, CategoryId, DomainError, DomainResult, Task, TaskId, TaskStatus, Title,
    ports::{Clock, DiagnosticLog, TaskRepository},
};

// Application layer exports
pub use application::{
    ApplicationError, ApplicationResult,
    commands::{RecomputeDeadlines, RegisterTask},
    handlers::{
        CommandHandler, GetCategoryByIdHandler, QueryHandler, RecomputeDeadlinesHandler,
        RegisterTaskHandler,
    },
    queries::GetCategoryById,
};

// Infrastructure exports
pub use infrastructure::adapters::{InMemoryRepository, SystemClock, TracingLog};
