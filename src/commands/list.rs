use super::{GlobalArgs, Session};
use crate::libs::{messages::Message, view::View};
use crate::msg_print;
use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    All,
    Completed,
    Pending,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(short, long, value_enum, default_value_t = StatusFilter::All, help = "Which tasks to list")]
    status: StatusFilter,
    #[arg(short, long, help = "Maximum number of tasks to print")]
    limit: Option<usize>,
}

impl ListArgs {
    pub fn with_status(status: StatusFilter) -> Self {
        Self { status, limit: None }
    }
}

pub async fn cmd(list_args: ListArgs, global: GlobalArgs) -> Result<()> {
    let session = Session::open(global).await?;
    let limit = list_args.limit.unwrap_or(session.config.list_limit);
    show(&session, list_args.status, limit)
}

/// Prints the tasks matching `status`, shared with the interactive menu.
pub fn show(session: &Session, status: StatusFilter, limit: usize) -> Result<()> {
    let manager = &session.manager;
    let (header, tasks) = match status {
        StatusFilter::All => (Message::AllTasksHeader, manager.all_tasks()?.iter().collect::<Vec<_>>()),
        StatusFilter::Completed => (Message::CompletedTasksHeader, manager.completed_tasks()?),
        StatusFilter::Pending => (Message::PendingTasksHeader, manager.pending_tasks()?),
    };

    msg_print!(header, true);
    View::tasks(&tasks, limit, manager.now());
    Ok(())
}
