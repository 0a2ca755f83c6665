//! Command and query handlers
//!
//! One handler per intent type. A handler consumes its command, performs
//! the repository work and wraps the outcome in an [`ApplicationResult`].
//! The containment contract: a repository failure during execution is
//! caught inside the handler and surfaces only through the returned
//! result, never as a panic crossing the handler boundary.

pub mod command_handlers;
pub mod query_handlers;

pub use command_handlers::{RecomputeDeadlinesHandler, RegisterTaskHandler};
pub use query_handlers::GetCategoryByIdHandler;

use crate::application::ApplicationResult;

/// Command handler trait - one implementation per command type
pub trait CommandHandler<TCommand> {
    /// The response type for this command
    type Response;

    /// Execute the command and report the outcome
    fn execute(&self, command: TCommand) -> ApplicationResult<Self::Response>;
}

/// Query handler trait - one implementation per query type
pub trait QueryHandler<TQuery> {
    /// The response type for this query
    type Response;

    /// Execute the query and report the outcome
    fn execute(&self, query: TQuery) -> ApplicationResult<Self::Response>;
}
