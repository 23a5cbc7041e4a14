use super::task::Task;
use crate::api::RawUser;
use chrono::{DateTime, Local};

/// A user and the tasks attached to it.
///
/// Tasks live in the task manager's arena; a user only keeps the arena
/// indices of its tasks, in attachment order.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: u32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
    task_indices: Vec<usize>,
}

impl User {
    pub fn new(id: u32, name: Option<&str>, email: Option<&str>, username: Option<&str>) -> Self {
        User {
            id,
            name: name.map(str::to_string),
            email: email.map(str::to_string),
            username: username.map(str::to_string),
            task_indices: Vec::new(),
        }
    }

    pub fn from_raw(raw: &RawUser) -> Self {
        User {
            id: raw.id,
            name: raw.name.clone(),
            email: raw.email.clone(),
            username: raw.username.clone(),
            task_indices: Vec::new(),
        }
    }

    pub fn add_task(&mut self, index: usize) {
        self.task_indices.push(index);
    }

    pub fn task_indices(&self) -> &[usize] {
        &self.task_indices
    }

    pub fn tasks<'a>(&'a self, arena: &'a [Task]) -> impl Iterator<Item = &'a Task> + 'a {
        self.task_indices.iter().filter_map(move |&index| arena.get(index))
    }

    /// Percentage of completed tasks, rounded half away from zero. Zero without tasks.
    pub fn completion_rate(&self, arena: &[Task]) -> u32 {
        let total = self.tasks(arena).count();
        if total == 0 {
            return 0;
        }
        let completed = self.tasks(arena).filter(|task| task.completed).count();
        (completed as f64 * 100.0 / total as f64).round() as u32
    }

    pub fn tasks_by_status<'a>(&'a self, arena: &'a [Task], status: &str, now: DateTime<Local>) -> Vec<&'a Task> {
        self.tasks(arena).filter(|task| task.status(now).starts_with(status)).collect()
    }

    pub fn label(&self) -> String {
        let name = self.name.as_deref().unwrap_or("Unknown");
        match &self.username {
            Some(username) => format!("{} (@{})", name, username),
            None => format!("{} (@user{})", name, self.id),
        }
    }
}
