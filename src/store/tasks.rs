use std::path::PathBuf;

use uuid::Uuid;

use crate::core::task::{Priority, Task};
use crate::message::TaskFilter;

/// Owns the task collection and writes it back after every mutation.
pub struct TaskStore {
    tasks: Vec<Task>,
    path: PathBuf,
}

impl TaskStore {
    pub fn load(path: PathBuf) -> Self {
        let tasks = super::load_collection(&path);
        Self { tasks, path }
    }

    /// Add a task at the front of the list. Whitespace-only text is a no-op.
    pub fn add(&mut self, text: &str, priority: Priority) -> Option<Uuid> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let task = Task::new(text, priority);
        let id = task.id;
        self.tasks.insert(0, task);
        self.persist();
        Some(id)
    }

    pub fn toggle(&mut self, id: Uuid) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
        }
        self.persist();
    }

    pub fn delete(&mut self, id: Uuid) {
        self.tasks.retain(|t| t.id != id);
        self.persist();
    }

    pub fn clear_completed(&mut self) {
        self.tasks.retain(|t| !t.completed);
        self.persist();
    }

    pub fn clear_all(&mut self) {
        self.tasks.clear();
        self.persist();
    }

    /// Store-ordered view for the given filter.
    pub fn filtered(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| match filter {
                TaskFilter::All => true,
                TaskFilter::Active => !t.completed,
                TaskFilter::Completed => t.completed,
            })
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn persist(&self) {
        super::save_collection(&self.path, &self.tasks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn store() -> (tempfile::TempDir, TaskStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::load(dir.path().join("tasks.json"));
        (dir, store)
    }

    #[test]
    fn add_rejects_whitespace_text() {
        let (_dir, mut store) = store();
        assert!(store.add("", Priority::Medium).is_none());
        assert!(store.add("   ", Priority::Medium).is_none());
        assert!(store.add("Write report", Priority::Medium).is_some());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn new_tasks_are_prepended() {
        let (_dir, mut store) = store();
        store.add("first", Priority::Low).unwrap();
        store.add("second", Priority::Low).unwrap();
        assert_eq!(store.tasks()[0].text, "second");
        assert_eq!(store.tasks()[1].text, "first");
    }

    #[test]
    fn toggle_twice_restores_state() {
        let (_dir, mut store) = store();
        let id = store.add("Buy milk", Priority::High).unwrap();
        store.toggle(id);
        assert!(store.tasks()[0].completed);
        store.toggle(id);
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let (_dir, mut store) = store();
        store.add("Buy milk", Priority::High).unwrap();
        store.toggle(Uuid::new_v4());
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn delete_is_idempotent() {
        let (_dir, mut store) = store();
        let id = store.add("Buy milk", Priority::High).unwrap();
        store.delete(id);
        assert!(store.is_empty());
        store.delete(id);
        assert!(store.is_empty());
    }

    #[test]
    fn filters_partition_the_collection() {
        let (_dir, mut store) = store();
        let a = store.add("one", Priority::Low).unwrap();
        store.add("two", Priority::Medium).unwrap();
        store.add("three", Priority::High).unwrap();
        store.toggle(a);

        let all: HashSet<Uuid> = store.filtered(TaskFilter::All).iter().map(|t| t.id).collect();
        let active: HashSet<Uuid> = store
            .filtered(TaskFilter::Active)
            .iter()
            .map(|t| t.id)
            .collect();
        let completed: HashSet<Uuid> = store
            .filtered(TaskFilter::Completed)
            .iter()
            .map(|t| t.id)
            .collect();

        assert_eq!(active.union(&completed).copied().collect::<HashSet<_>>(), all);
        assert!(active.is_disjoint(&completed));
    }

    #[test]
    fn counts_track_completion() {
        let (_dir, mut store) = store();
        let id = store.add("Buy milk", Priority::High).unwrap();
        assert_eq!(store.active_count(), 1);
        assert_eq!(store.completed_count(), 0);

        store.toggle(id);
        assert_eq!(store.active_count(), 0);
        assert_eq!(store.completed_count(), 1);

        store.clear_completed();
        assert!(store.is_empty());
    }

    #[test]
    fn clear_all_empties_the_store() {
        let (_dir, mut store) = store();
        store.add("one", Priority::Low).unwrap();
        store.add("two", Priority::High).unwrap();
        store.clear_all();
        assert!(store.is_empty());
    }

    #[test]
    fn reload_roundtrips_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");

        let mut store = TaskStore::load(path.clone());
        let id = store.add("Buy milk", Priority::High).unwrap();
        store.add("Walk dog", Priority::Low).unwrap();
        store.toggle(id);

        let reloaded = TaskStore::load(path);
        assert_eq!(reloaded.len(), 2);
        let milk = reloaded.tasks().iter().find(|t| t.id == id).unwrap();
        assert_eq!(milk.text, "Buy milk");
        assert_eq!(milk.priority, Priority::High);
        assert!(milk.completed);
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, "[{\"id\": 12}").unwrap();
        let store = TaskStore::load(path);
        assert!(store.is_empty());
    }
}
