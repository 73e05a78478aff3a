//! In-memory task list.
//!
//! Tasks live only as long as the process.

use chrono::{DateTime, Local};

/// A task entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Identifier, unique within the process
    pub id: u64,
    /// Trimmed, non-empty text
    pub text: String,
    /// Completion checkbox
    pub done: bool,
    /// When the task was added
    pub added_at: DateTime<Local>,
}

/// Ordered list of tasks, oldest first.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task. Blank text is ignored and yields `None`.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            text: text.to_string(),
            done: false,
            added_at: Local::now(),
        });
        Some(id)
    }

    /// Flip the checkbox of a task. Returns false if there is no such task.
    pub fn toggle(&mut self, id: u64) -> bool {
        self.tasks.iter_mut().find(|t| t.id == id).is_some_and(|task| {
            task.done = !task.done;
            true
        })
    }

    /// Delete a task. Returns false if there is no such task.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Task at a display position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_text() {
        let mut list = TaskList::new();
        let id = list.add("  write report \n").unwrap();

        let task = list.get(0).unwrap();
        assert_eq!(task.id, id);
        assert_eq!(task.text, "write report");
        assert!(!task.done);
    }

    #[test]
    fn test_add_ignores_blank() {
        let mut list = TaskList::new();
        assert!(list.add("").is_none());
        assert!(list.add("   ").is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_order_is_kept() {
        let mut list = TaskList::new();
        list.add("one");
        list.add("two");
        list.add("three");

        let texts: Vec<_> = list.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["one", "two", "three"]);
    }

    #[test]
    fn test_toggle_and_remove() {
        let mut list = TaskList::new();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();

        assert!(list.toggle(a));
        assert_eq!(list.completed_count(), 1);
        assert!(list.toggle(a));
        assert_eq!(list.completed_count(), 0);

        assert!(list.remove(a));
        assert!(!list.remove(a));
        assert!(!list.toggle(a));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().id, b);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut list = TaskList::new();
        let a = list.add("a").unwrap();
        list.remove(a);
        let b = list.add("b").unwrap();
        assert_ne!(a, b);
    }
}
