//! Display implementation for taskdeck messages.
//!
//! All user-facing text is defined here, in one match, so wording stays
//! consistent between the one-shot subcommands and the interactive menu.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === MENU MESSAGES ===
            Message::MenuTitle => "=== Task Manager ===".to_string(),
            Message::MenuListAll => "List all tasks".to_string(),
            Message::MenuByUser => "List tasks by user".to_string(),
            Message::MenuStatistics => "Show statistics".to_string(),
            Message::MenuCompleted => "Filter tasks (completed)".to_string(),
            Message::MenuPending => "Filter tasks (pending)".to_string(),
            Message::MenuSearch => "Search tasks by keyword".to_string(),
            Message::MenuLeaderboard => "Show leaderboard (by completion %)".to_string(),
            Message::MenuToggle => "Toggle a task's completion".to_string(),
            Message::MenuTags => "Show unique tags".to_string(),
            Message::MenuReload => "Reload data (bypass cache)".to_string(),
            Message::MenuQuit => "Quit".to_string(),
            Message::PressEnterToReturn => "Press Enter to return to the menu".to_string(),
            Message::Goodbye => "Goodbye".to_string(),

            // === TASK LISTING MESSAGES ===
            Message::AllTasksHeader => "All tasks".to_string(),
            Message::CompletedTasksHeader => "Completed tasks".to_string(),
            Message::PendingTasksHeader => "Pending tasks".to_string(),
            Message::UserTasksHeader(label) => format!("User: {}", label),
            Message::RemoteTasksHeader(user_id) => format!("Tasks of user {} (fetched directly)", user_id),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::MoreTasks(count) => format!("... and {} more", count),
            Message::SearchResults { count, keywords } => format!("Found {} result(s) for: {}", count, keywords),
            Message::TaskToggled(line) => format!("Toggled: {}", line),

            // === AGGREGATE MESSAGES ===
            Message::StatisticsHeader => "Statistics".to_string(),
            Message::LeaderboardHeader => "Leaderboard (completion %)".to_string(),
            Message::NoUsers => "No users.".to_string(),
            Message::TagsHeader => "Unique tags".to_string(),
            Message::NoTagsDetected => "No tags detected.".to_string(),

            // === LOADING MESSAGES ===
            Message::LoadingData => "Loading users and todos...".to_string(),
            Message::DataLoaded { users, tasks } => format!("Loaded {} users and {} tasks", users, tasks),
            Message::DataReloaded => "Data reloaded from the API".to_string(),
            Message::LoadFailed(error) => format!("Failed to load data: {}", error),
            Message::ActionFailed(error) => format!("Error: {}", error),
            Message::Fatal(error) => format!("Fatal: {}", error),
            Message::InvalidUserId(input) => format!("'{}' is not a valid user id", input),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleApi => "API settings".to_string(),
            Message::ConfigModuleView => "Output settings".to_string(),

            // === PROMPTS ===
            Message::PromptSelectOption => "Select an option".to_string(),
            Message::PromptUserId => "Enter user id (1-10)".to_string(),
            Message::PromptKeywords => "Enter keyword(s) separated by spaces".to_string(),
            Message::PromptTaskId => "Enter task id to toggle".to_string(),
            Message::PromptApiUrl => "Enter the API URL".to_string(),
            Message::PromptTimeout => "Request timeout in seconds".to_string(),
            Message::PromptUseCache => "Cache API responses during a session?".to_string(),
            Message::PromptListLimit => "Maximum number of tasks per listing".to_string(),
        };
        write!(f, "{}", text)
    }
}
