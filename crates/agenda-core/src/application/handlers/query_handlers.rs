//! Query handlers for read operations

use crate::{
    application::{
        ApplicationError, ApplicationResult, handlers::QueryHandler, queries::GetCategoryById,
    },
    domain::{Category, ports::TaskRepository},
};
use std::sync::Arc;

/// Handler for category lookup by id
///
/// Mediates exactly one repository call per invocation, forwarding the id
/// unchanged; an absent category is a successful lookup with an empty
/// result. Keeping this seam thin is what lets tests swap the repository
/// implementation freely.
#[derive(Debug)]
pub struct GetCategoryByIdHandler<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> GetCategoryByIdHandler<R>
where
    R: TaskRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> QueryHandler<GetCategoryById> for GetCategoryByIdHandler<R>
where
    R: TaskRepository,
{
    type Response = Option<Category>;

    fn execute(&self, query: GetCategoryById) -> ApplicationResult<Option<Category>> {
        self.repository
            .category_by_id(query.id())
            .map_err(ApplicationError::Domain)
    }
}
