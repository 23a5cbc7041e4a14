use super::{GlobalArgs, Session};
use crate::libs::{messages::Message, view::View};
use crate::msg_print;
use anyhow::Result;

pub async fn cmd(global: GlobalArgs) -> Result<()> {
    let session = Session::open(global).await?;
    show(&session)
}

pub fn show(session: &Session) -> Result<()> {
    msg_print!(Message::TagsHeader, true);
    View::tags(&session.manager.tags()?);
    Ok(())
}
