use crate::api::RawTodo;
use chrono::{DateTime, Duration, Local};

/// Priority label given to priority tasks when none is supplied.
pub const DEFAULT_PRIORITY: &str = "medium";

/// Days after creation at which an incomplete plain task turns overdue.
pub const OVERDUE_AFTER_DAYS: i64 = 7;

pub const STATUS_COMPLETED: &str = "Completed";
pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_OVERDUE: &str = "Overdue";

#[derive(Debug, Clone, PartialEq)]
pub enum TaskKind {
    Plain,
    Priority {
        priority: String,
        due_date: Option<DateTime<Local>>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub completed: bool,
    pub user_id: u32,
    pub created_at: DateTime<Local>,
    pub kind: TaskKind,
}

impl Task {
    pub fn new(id: u32, title: &str, completed: bool, user_id: u32, created_at: DateTime<Local>) -> Self {
        Task {
            id,
            title: title.to_string(),
            completed,
            user_id,
            created_at,
            kind: TaskKind::Plain,
        }
    }

    pub fn from_raw(raw: &RawTodo, created_at: DateTime<Local>) -> Self {
        Task {
            id: raw.id,
            title: raw.title.clone(),
            completed: raw.completed,
            user_id: raw.user_id,
            created_at,
            kind: TaskKind::Plain,
        }
    }

    /// Turns the task into a priority task. `None` falls back to [`DEFAULT_PRIORITY`].
    pub fn with_priority(mut self, priority: Option<&str>, due_date: Option<DateTime<Local>>) -> Self {
        self.kind = TaskKind::Priority {
            priority: priority.unwrap_or(DEFAULT_PRIORITY).to_string(),
            due_date,
        };
        self
    }

    pub fn is_priority(&self) -> bool {
        matches!(self.kind, TaskKind::Priority { .. })
    }

    pub fn priority(&self) -> Option<&str> {
        match &self.kind {
            TaskKind::Priority { priority, .. } => Some(priority),
            TaskKind::Plain => None,
        }
    }

    pub fn due_date(&self) -> Option<DateTime<Local>> {
        match &self.kind {
            TaskKind::Priority { due_date, .. } => *due_date,
            TaskKind::Plain => None,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// A due date, when present, replaces the seven day rule.
    pub fn is_overdue(&self, now: DateTime<Local>) -> bool {
        if self.completed {
            return false;
        }
        match self.due_date() {
            Some(due_date) => now > due_date,
            None => now - self.created_at > Duration::days(OVERDUE_AFTER_DAYS),
        }
    }

    pub fn base_status(&self) -> &'static str {
        if self.completed {
            STATUS_COMPLETED
        } else {
            STATUS_PENDING
        }
    }

    /// `Completed`/`Pending`, or for priority tasks e.g. `Pending [high] (Overdue)`.
    pub fn status(&self, now: DateTime<Local>) -> String {
        match &self.kind {
            TaskKind::Plain => self.base_status().to_string(),
            TaskKind::Priority { priority, .. } => {
                let overdue = if self.is_overdue(now) { " (Overdue)" } else { "" };
                format!("{} [{}]{}", self.base_status(), priority, overdue)
            }
        }
    }

    /// Status shown in listings: plain tasks read `Overdue` instead of `Pending` once late.
    pub fn label(&self, now: DateTime<Local>) -> String {
        match self.kind {
            TaskKind::Priority { .. } => self.status(now),
            TaskKind::Plain if self.completed => STATUS_COMPLETED.to_string(),
            TaskKind::Plain if self.is_overdue(now) => STATUS_OVERDUE.to_string(),
            TaskKind::Plain => STATUS_PENDING.to_string(),
        }
    }

    pub fn to_line(&self, now: DateTime<Local>) -> String {
        format!("#{} [User {}] {} — {}", self.id, self.user_id, self.label(now), self.title)
    }
}
