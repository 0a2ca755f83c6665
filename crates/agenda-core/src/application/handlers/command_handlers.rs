//! Command handlers implementing business use cases

use crate::{
    application::{
        ApplicationError, ApplicationResult,
        commands::{RecomputeDeadlines, RegisterTask},
        handlers::CommandHandler,
    },
    domain::{
        Task,
        ports::{Clock, DiagnosticLog, TaskRepository},
    },
};
use std::sync::Arc;

/// Handler for task registration
#[derive(Debug)]
pub struct RegisterTaskHandler<R, L>
where
    R: TaskRepository,
    L: DiagnosticLog,
{
    repository: Arc<R>,
    log: Arc<L>,
}

impl<R, L> RegisterTaskHandler<R, L>
where
    R: TaskRepository,
    L: DiagnosticLog,
{
    pub fn new(repository: Arc<R>, log: Arc<L>) -> Self {
        Self { repository, log }
    }
}

impl<R, L> CommandHandler<RegisterTask> for RegisterTaskHandler<R, L>
where
    R: TaskRepository,
    L: DiagnosticLog,
{
    type Response = ();

    fn execute(&self, command: RegisterTask) -> ApplicationResult<()> {
        let title = command.title().to_string();
        let task = Task::new(
            command.title().clone(),
            command.category().clone(),
            command.deadline(),
        );

        // Single-element batch through the bulk port
        match self.repository.insert_tasks(vec![task]) {
            Ok(()) => {
                self.log.notice(&format!("task \"{title}\" registered"));
                Ok(())
            }
            Err(cause) => {
                self.log
                    .failure(&format!("could not register task \"{title}\""), &cause);
                Err(ApplicationError::Domain(cause))
            }
        }
    }
}

/// Handler for the batch deadline sweep
///
/// Reads open tasks, transitions the ones past their deadline to overdue
/// and persists the whole changed set with one bulk update per invocation,
/// however many tasks changed.
#[derive(Debug)]
pub struct RecomputeDeadlinesHandler<R, L, C>
where
    R: TaskRepository,
    L: DiagnosticLog,
    C: Clock,
{
    repository: Arc<R>,
    log: Arc<L>,
    clock: Arc<C>,
}

impl<R, L, C> RecomputeDeadlinesHandler<R, L, C>
where
    R: TaskRepository,
    L: DiagnosticLog,
    C: Clock,
{
    pub fn new(repository: Arc<R>, log: Arc<L>, clock: Arc<C>) -> Self {
        Self {
            repository,
            log,
            clock,
        }
    }
}

impl<R, L, C> CommandHandler<RecomputeDeadlines> for RecomputeDeadlinesHandler<R, L, C>
where
    R: TaskRepository,
    L: DiagnosticLog,
    C: Clock,
{
    type Response = usize;

    fn execute(&self, _command: RecomputeDeadlines) -> ApplicationResult<usize> {
        let today = self.clock.today();
        let open = self.repository.tasks_matching(&|task: &Task| task.is_open());
        let scanned = open.len();

        let mut overdue = Vec::new();
        for mut task in open {
            if task.refresh_status(today) {
                overdue.push(task);
            }
        }
        let changed = overdue.len();

        // One bulk update per sweep, including the empty set
        match self.repository.update_tasks(overdue) {
            Ok(()) => {
                self.log.notice(&format!(
                    "deadline sweep: {changed} of {scanned} open tasks now overdue"
                ));
                Ok(changed)
            }
            Err(cause) => {
                self.log
                    .failure("deadline sweep could not persist its changes", &cause);
                Err(ApplicationError::Domain(cause))
            }
        }
    }
}
