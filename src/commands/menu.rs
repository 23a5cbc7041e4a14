//! Interactive menu over the loaded data.
//!
//! Loads once, then loops over a selection prompt until the user quits. A
//! failing action prints its error and returns to the menu; only a failed
//! initial load or a broken terminal ends the loop early.

use super::{leaderboard, list, search, stats, tags, toggle, user, GlobalArgs, Session};
use crate::api::FetchOptions;
use crate::libs::messages::Message;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    ListAll,
    ByUser,
    Statistics,
    Completed,
    Pending,
    Search,
    Leaderboard,
    Toggle,
    Tags,
    Reload,
    Quit,
}

const ACTIONS: [MenuAction; 11] = [
    MenuAction::ListAll,
    MenuAction::ByUser,
    MenuAction::Statistics,
    MenuAction::Completed,
    MenuAction::Pending,
    MenuAction::Search,
    MenuAction::Leaderboard,
    MenuAction::Toggle,
    MenuAction::Tags,
    MenuAction::Reload,
    MenuAction::Quit,
];

impl MenuAction {
    fn message(self) -> Message {
        match self {
            MenuAction::ListAll => Message::MenuListAll,
            MenuAction::ByUser => Message::MenuByUser,
            MenuAction::Statistics => Message::MenuStatistics,
            MenuAction::Completed => Message::MenuCompleted,
            MenuAction::Pending => Message::MenuPending,
            MenuAction::Search => Message::MenuSearch,
            MenuAction::Leaderboard => Message::MenuLeaderboard,
            MenuAction::Toggle => Message::MenuToggle,
            MenuAction::Tags => Message::MenuTags,
            MenuAction::Reload => Message::MenuReload,
            MenuAction::Quit => Message::MenuQuit,
        }
    }
}

pub async fn cmd(global: GlobalArgs) -> Result<()> {
    msg_print!(Message::LoadingData);
    let mut session = Session::open(global)
        .await
        .map_err(|err| anyhow::anyhow!("{}", Message::LoadFailed(err.to_string())))?;

    let items: Vec<String> = ACTIONS.iter().map(|action| action.message().to_string()).collect();

    loop {
        msg_print!(Message::MenuTitle, true);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectOption.to_string())
            .items(&items)
            .default(0)
            .interact()?;

        let action = ACTIONS[selection];
        if action == MenuAction::Quit {
            break;
        }

        if let Err(err) = run(&mut session, action).await {
            msg_error!(Message::ActionFailed(err.to_string()), true);
        }

        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PressEnterToReturn.to_string())
            .allow_empty(true)
            .interact_text()?;
    }

    msg_print!(Message::Goodbye, true);
    Ok(())
}

async fn run(session: &mut Session, action: MenuAction) -> Result<()> {
    let limit = session.config.list_limit;
    match action {
        MenuAction::ListAll => list::show(session, list::StatusFilter::All, limit),
        MenuAction::Completed => list::show(session, list::StatusFilter::Completed, limit),
        MenuAction::Pending => list::show(session, list::StatusFilter::Pending, limit),
        MenuAction::ByUser => {
            let user_id: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptUserId.to_string())
                .interact_text()?;
            user::show(session, &user_id)
        }
        MenuAction::Statistics => stats::show(session),
        MenuAction::Search => {
            let query: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptKeywords.to_string())
                .allow_empty(true)
                .interact_text()?;
            let keywords: Vec<String> = query.split_whitespace().map(str::to_string).collect();
            search::show(session, &keywords)
        }
        MenuAction::Leaderboard => leaderboard::show(session),
        MenuAction::Toggle => {
            let task_id: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskId.to_string())
                .interact_text()?;
            toggle::apply(session, &task_id)
        }
        MenuAction::Tags => tags::show(session),
        MenuAction::Reload => {
            session.manager.load(FetchOptions::bypass_cache()).await?;
            msg_success!(Message::DataReloaded);
            Ok(())
        }
        MenuAction::Quit => Ok(()),
    }
}
