use super::manager::LeaderboardRow;
use super::messages::Message;
use super::processor::Statistics;
use super::task::Task;
use crate::{msg_info, msg_print};
use chrono::{DateTime, Local};
use prettytable::{row, Table};
use std::collections::BTreeSet;

pub struct View {}

impl View {
    pub fn tasks_table(tasks: &[&Task], limit: usize, now: DateTime<Local>) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "USER", "STATUS", "DUE", "TITLE"]);
        for task in tasks.iter().take(limit) {
            let due = task.due_date().map(|due| due.format("%Y-%m-%d").to_string()).unwrap_or_default();
            table.add_row(row![task.id, task.user_id, task.label(now), due, task.title]);
        }

        table
    }

    /// Prints at most `limit` tasks, then a notice for the rest.
    pub fn tasks(tasks: &[&Task], limit: usize, now: DateTime<Local>) {
        if tasks.is_empty() {
            msg_print!(Message::NoTasksFound, true);
            return;
        }

        Self::tasks_table(tasks, limit, now).printstd();

        if tasks.len() > limit {
            msg_info!(Message::MoreTasks(tasks.len() - limit));
        }
    }

    pub fn statistics_table(stats: &Statistics) -> Table {
        let mut table = Table::new();

        table.add_row(row!["TOTAL", "COMPLETED", "PENDING", "OVERDUE", "UNIQUE USERS"]);
        table.add_row(row![
            stats.total_tasks,
            stats.completed_tasks,
            stats.pending_tasks,
            stats.overdue_tasks,
            stats.unique_users
        ]);

        table
    }

    pub fn statistics(stats: &Statistics) {
        Self::statistics_table(stats).printstd();
    }

    pub fn leaderboard_table(rows: &[LeaderboardRow]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["#", "USER", "NAME", "COMPLETION"]);
        for (place, entry) in rows.iter().enumerate() {
            let username = entry.username.clone().unwrap_or_else(|| format!("user{}", entry.id));
            table.add_row(row![
                place + 1,
                format!("#{}", entry.id),
                format!("{} (@{})", entry.name.as_deref().unwrap_or("Unknown"), username),
                format!("{}%", entry.completion_rate)
            ]);
        }

        table
    }

    pub fn leaderboard(rows: &[LeaderboardRow]) {
        if rows.is_empty() {
            msg_print!(Message::NoUsers, true);
            return;
        }
        Self::leaderboard_table(rows).printstd();
    }

    /// Sorted tags joined with commas.
    pub fn tags_line(tags: &BTreeSet<String>) -> String {
        tags.iter().map(String::as_str).collect::<Vec<_>>().join(",")
    }

    pub fn tags(tags: &BTreeSet<String>) {
        if tags.is_empty() {
            msg_print!(Message::NoTagsDetected, true);
            return;
        }
        msg_print!(Self::tags_line(tags));
    }
}
