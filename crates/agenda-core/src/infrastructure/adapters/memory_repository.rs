//! In-memory repository adapter
//!
//! `DashMap`-backed implementation of the [`TaskRepository`] port. Assigns
//! monotonically increasing integer ids on insert, mirroring a
//! store-assigned identity column.
//!
//! # Concurrency Model
//!
//! Backed by `DashMap` for lock-free concurrent access. Scans
//! (`tasks_matching`) are weakly consistent: items inserted or removed
//! during a scan may or may not be included. Single-key operations are
//! authoritative.

use std::sync::atomic::{AtomicI32, Ordering};

use dashmap::DashMap;

use crate::domain::{
    Category, CategoryId, DomainError, DomainResult, Task, TaskId,
    ports::TaskRepository,
};

/// In-memory implementation of [`TaskRepository`]
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    tasks: DashMap<TaskId, Task>,
    categories: DashMap<CategoryId, Category>,
    next_task_id: AtomicI32,
    next_category_id: AtomicI32,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a category, assigning an identity if it has none yet.
    /// Returns the id the category is stored under.
    pub fn add_category(&self, mut category: Category) -> CategoryId {
        let id = if category.id().is_assigned() {
            category.id()
        } else {
            let id = CategoryId::new(self.next_category_id.fetch_add(1, Ordering::Relaxed) + 1);
            category.assign_id(id);
            id
        };
        self.categories.insert(id, category);
        id
    }

    /// Number of stored tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Clear all stored data (for testing)
    pub fn clear(&self) {
        self.tasks.clear();
        self.categories.clear();
    }
}

impl TaskRepository for InMemoryRepository {
    fn insert_tasks(&self, tasks: Vec<Task>) -> DomainResult<()> {
        for mut task in tasks {
            if task.id().is_assigned() {
                if self.tasks.contains_key(&task.id()) {
                    return Err(DomainError::storage(format!(
                        "task {} is already tracked",
                        task.id()
                    )));
                }
            } else {
                let id = TaskId::new(self.next_task_id.fetch_add(1, Ordering::Relaxed) + 1);
                task.assign_id(id);
            }
            self.tasks.insert(task.id(), task);
        }
        Ok(())
    }

    fn update_tasks(&self, tasks: Vec<Task>) -> DomainResult<()> {
        for task in tasks {
            if !task.id().is_assigned() || !self.tasks.contains_key(&task.id()) {
                return Err(DomainError::TaskNotFound(task.id().to_string()));
            }
            self.tasks.insert(task.id(), task);
        }
        Ok(())
    }

    fn tasks_matching(&self, predicate: &dyn Fn(&Task) -> bool) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn category_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.categories.get(&id).map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TaskStatus, Title};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(title: &str) -> Task {
        Task::new(
            Title::new(title).unwrap(),
            Category::new("Dummy").unwrap(),
            date(2022, 12, 31),
        )
    }

    #[test]
    fn test_insert_assigns_distinct_ids() {
        let repo = InMemoryRepository::new();
        repo.insert_tasks(vec![task("a"), task("b")]).unwrap();

        let stored = repo.tasks_matching(&|_: &Task| true);
        assert_eq!(stored.len(), 2);
        assert!(stored.iter().all(|t| t.id().is_assigned()));
        assert_ne!(stored[0].id(), stored[1].id());
    }

    #[test]
    fn test_insert_rejects_already_tracked_id() {
        let repo = InMemoryRepository::new();
        repo.insert_tasks(vec![task("a")]).unwrap();
        let stored = repo.tasks_matching(&|_: &Task| true).remove(0);

        let result = repo.insert_tasks(vec![stored]);
        assert!(matches!(result, Err(DomainError::Storage(_))));
    }

    #[test]
    fn test_update_rejects_untracked_task() {
        let repo = InMemoryRepository::new();

        let mut unknown = task("ghost");
        unknown.assign_id(TaskId::new(99));
        assert!(matches!(
            repo.update_tasks(vec![unknown]),
            Err(DomainError::TaskNotFound(_))
        ));

        let unassigned = task("new");
        assert!(repo.update_tasks(vec![unassigned]).is_err());
    }

    #[test]
    fn test_update_replaces_tracked_task() {
        let repo = InMemoryRepository::new();
        repo.insert_tasks(vec![task("a")]).unwrap();

        let mut stored = repo.tasks_matching(&|_: &Task| true).remove(0);
        assert!(stored.refresh_status(date(2023, 6, 1)));
        repo.update_tasks(vec![stored.clone()]).unwrap();

        let reread = repo.tasks_matching(&|t: &Task| t.id() == stored.id());
        assert_eq!(reread[0].status(), TaskStatus::Overdue);
    }

    #[test]
    fn test_tasks_matching_filters_by_predicate() {
        let repo = InMemoryRepository::new();
        repo.insert_tasks(vec![task("keep"), task("drop")]).unwrap();

        let kept = repo.tasks_matching(&|t: &Task| t.title().as_str() == "keep");
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title().as_str(), "keep");
    }

    #[test]
    fn test_category_lookup() {
        let repo = InMemoryRepository::new();
        let id = repo.add_category(Category::new("Estudo").unwrap());
        assert!(id.is_assigned());

        let found = repo.category_by_id(id).unwrap();
        assert_eq!(found.unwrap().name(), "Estudo");

        let missing = repo.category_by_id(CategoryId::new(999)).unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_add_category_keeps_existing_id() {
        let repo = InMemoryRepository::new();
        let id = repo.add_category(Category::with_id(CategoryId::new(20), "Nova Categoria").unwrap());
        assert_eq!(id.raw(), 20);
    }

    #[test]
    fn test_clear_and_count() {
        let repo = InMemoryRepository::new();
        repo.insert_tasks(vec![task("a")]).unwrap();
        assert_eq!(repo.task_count(), 1);

        repo.clear();
        assert_eq!(repo.task_count(), 0);
    }
}
