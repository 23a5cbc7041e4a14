//! Toggles the completion flag of a task.
//!
//! Toggles are held in memory only; from the command line the changed task
//! is printed and forgotten, inside the menu it stays toggled for the session.

use super::{GlobalArgs, Session};
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    #[arg(required = true, help = "Task id")]
    task_id: String,
}

pub async fn cmd(toggle_args: ToggleArgs, global: GlobalArgs) -> Result<()> {
    let mut session = Session::open(global).await?;
    apply(&mut session, &toggle_args.task_id)
}

pub fn apply(session: &mut Session, task_id: &str) -> Result<()> {
    let now = session.manager.now();
    let task = session.manager.toggle_task(task_id)?;
    msg_success!(Message::TaskToggled(task.to_line(now)));
    Ok(())
}
