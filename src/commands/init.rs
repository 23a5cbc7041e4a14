//! Application configuration initialization command.
//!
//! Runs an interactive wizard over the API and output settings, pre-filled
//! with the current values, and saves the result.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write the default configuration without prompting
    #[arg(short, long)]
    reset: bool,
}

/// Executes the initialization command.
///
/// # Returns
///
/// Returns `Ok(())` once the configuration is saved, or an error if prompting
/// or writing the file fails.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = if init_args.reset { Config::default() } else { Config::init()? };
    config.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
