use super::{GlobalArgs, Session};
use crate::libs::{messages::Message, view::View};
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(help = "Keywords every title must contain")]
    keywords: Vec<String>,
}

pub async fn cmd(search_args: SearchArgs, global: GlobalArgs) -> Result<()> {
    let session = Session::open(global).await?;
    show(&session, &search_args.keywords)
}

/// Prints the search results, shared with the interactive menu.
pub fn show(session: &Session, keywords: &[String]) -> Result<()> {
    let manager = &session.manager;
    let results = manager.search(keywords)?;

    msg_print!(
        Message::SearchResults {
            count: results.len(),
            keywords: keywords.join(","),
        },
        true
    );
    View::tasks(&results, session.config.list_limit, manager.now());
    Ok(())
}
