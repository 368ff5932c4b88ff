//! In-memory task store and display helpers.
//!
//! This module provides the `TaskStore` struct owning the session's task
//! collection, along with the formatting helpers the console screens use to
//! render status and difficulty fields. The store lives exactly as long as
//! the process; there is no persistence.

use chrono::Local;

use crate::fields::{Difficulty, Status};
use crate::task::Task;

/// In-memory store owning the session's task collection.
///
/// Tasks keep their insertion order. Ids are assigned from a monotonically
/// increasing counter and never reused within a session, so a derived view
/// (filtered list, search results) can hand a selection back to the store
/// without positional bookkeeping.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        TaskStore {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new task and return its id.
    ///
    /// Creation forces status to Pending and difficulty to Easy regardless
    /// of context, and stamps the creation date from the local clock.
    pub fn add(&mut self, title: &str, description: &str, due: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            status: Status::Pending,
            difficulty: Difficulty::Easy,
            due: due.to_string(),
            created: today_local(),
        });
        id
    }

    /// Get a task by id.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Get a mutable reference to a task by id.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Remove the task with the given id. Returns whether a task was removed.
    /// Removal is immediate; later tasks shift down one position.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() < before
    }

    /// Number of tasks in the store.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate over all tasks in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Tasks whose status matches the filter, or all tasks when no filter is
    /// given, in insertion order.
    pub fn filter(&self, status: Option<Status>) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| status.map_or(true, |s| t.status == s))
            .collect()
    }

    /// Case-insensitive substring search over titles, in insertion order.
    pub fn search(&self, term: &str) -> Vec<&Task> {
        let needle = term.to_lowercase();
        self.tasks
            .iter()
            .filter(|t| t.title.to_lowercase().contains(&needle))
            .collect()
    }
}

/// Display label for a status.
pub fn format_status(status: Status) -> &'static str {
    match status {
        Status::Pending => "Pendiente",
        Status::InProgress => "En curso",
        Status::Done => "Terminada",
        Status::Cancelled => "Cancelada",
    }
}

/// Three-character difficulty marker.
pub fn format_difficulty(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "+--",
        Difficulty::Medium => "++-",
        Difficulty::Hard => "+++",
    }
}

/// Current local date in the day/month/year form the console displays,
/// without zero padding (es-AR convention, e.g. `6/8/2026`).
pub fn today_local() -> String {
    Local::now().format("%-d/%-m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_stamps_defaults() {
        let mut store = TaskStore::new();
        let id = store.add("Write report", "draft v1", "01/12/2025");
        let task = store.get(id).unwrap();
        assert_eq!(task.status, Status::Pending);
        assert_eq!(task.difficulty, Difficulty::Easy);
        assert_eq!(format_difficulty(task.difficulty), "+--");
        assert_eq!(task.title, "Write report");
        assert_eq!(task.due, "01/12/2025");
        assert!(task.created.contains('/'));
    }

    #[test]
    fn test_len_tracks_adds_and_removes() {
        let mut store = TaskStore::new();
        let a = store.add("a", "", "");
        let b = store.add("b", "", "");
        store.add("c", "", "");
        assert_eq!(store.len(), 3);
        assert!(store.remove(b));
        assert_eq!(store.len(), 2);
        // Removing again is a no-op.
        assert!(!store.remove(b));
        assert!(store.remove(a));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut store = TaskStore::new();
        let a = store.add("a", "", "");
        store.remove(a);
        let b = store.add("b", "", "");
        assert_ne!(a, b);
    }

    #[test]
    fn test_remove_shifts_later_tasks_down() {
        let mut store = TaskStore::new();
        store.add("first", "", "");
        let second = store.add("second", "", "");
        store.add("third", "", "");
        store.remove(second);
        let titles: Vec<&str> = store.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "third"]);
    }

    #[test]
    fn test_filter_by_status_preserves_order() {
        let mut store = TaskStore::new();
        store.add("Alpha", "", "");
        let beta = store.add("Beta", "", "");
        store.add("Gamma", "", "");
        store.get_mut(beta).unwrap().status = Status::Done;

        let done: Vec<&str> = store
            .filter(Some(Status::Done))
            .iter()
            .map(|t| t.title.as_str())
            .collect();
        assert_eq!(done, vec!["Beta"]);

        let all: Vec<&str> = store.filter(None).iter().map(|t| t.title.as_str()).collect();
        assert_eq!(all, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring_on_title() {
        let mut store = TaskStore::new();
        store.add("Buy milk", "milk is in the description too", "");
        store.add("Alpha", "", "");
        store.add("Beta", "", "");

        let milk: Vec<&str> = store.search("MILK").iter().map(|t| t.title.as_str()).collect();
        assert_eq!(milk, vec!["Buy milk"]);
        let buy: Vec<&str> = store.search("buy").iter().map(|t| t.title.as_str()).collect();
        assert_eq!(buy, vec!["Buy milk"]);

        // Substring match applies to titles only, never descriptions.
        let a: Vec<&str> = store.search("a").iter().map(|t| t.title.as_str()).collect();
        assert_eq!(a, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn test_format_status_labels() {
        assert_eq!(format_status(Status::Pending), "Pendiente");
        assert_eq!(format_status(Status::InProgress), "En curso");
        assert_eq!(format_status(Status::Done), "Terminada");
        assert_eq!(format_status(Status::Cancelled), "Cancelada");
    }
}
