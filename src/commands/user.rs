use super::{GlobalArgs, Session};
use crate::api::Fetch;
use crate::libs::{messages::Message, processor::IdInput, processor::to_task_instances, view::View};
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UserArgs {
    #[arg(required = true, help = "User id")]
    user_id: String,
    #[arg(long, help = "Fetch only this user's todos straight from the API")]
    remote: bool,
}

pub async fn cmd(user_args: UserArgs, global: GlobalArgs) -> Result<()> {
    if user_args.remote {
        return remote(&user_args.user_id, global).await;
    }

    let session = Session::open(global).await?;
    show(&session, &user_args.user_id)
}

/// Prints the user label and the user's tasks, shared with the interactive menu.
pub fn show(session: &Session, user_id: &str) -> Result<()> {
    let manager = &session.manager;
    msg_print!(Message::UserTasksHeader(manager.get_user_label(user_id)), true);
    View::tasks(&manager.tasks_by_user(user_id)?, session.config.list_limit, manager.now());
    Ok(())
}

async fn remote(user_id: &str, global: GlobalArgs) -> Result<()> {
    let Some(id) = user_id.to_id() else {
        anyhow::bail!("{}", Message::InvalidUserId(user_id.to_string()));
    };

    let session = Session::connect(global)?;
    let manager = &session.manager;
    let todos = manager.api().fetch_user_todos(id, session.fetch_options()).await?;
    let tasks = to_task_instances(&todos, true, manager.clock());

    msg_print!(Message::RemoteTasksHeader(id), true);
    View::tasks(&tasks.iter().collect::<Vec<_>>(), session.config.list_limit, manager.now());
    Ok(())
}
