pub mod init;
pub mod leaderboard;
pub mod list;
pub mod menu;
pub mod search;
pub mod stats;
pub mod tags;
pub mod toggle;
pub mod user;

use crate::api::{FetchOptions, JsonPlaceholder, ResponseCache};
use crate::libs::config::Config;
use crate::libs::manager::TaskManager;
use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Interactive menu")]
    Menu,
    #[command(about = "List tasks")]
    List(list::ListArgs),
    #[command(about = "List completed tasks")]
    Completed,
    #[command(about = "List pending tasks")]
    Pending,
    #[command(about = "List the tasks of one user", arg_required_else_help = true)]
    User(user::UserArgs),
    #[command(about = "Search task titles by keywords")]
    Search(search::SearchArgs),
    #[command(about = "Show task statistics")]
    Stats,
    #[command(about = "Rank users by completion rate")]
    Leaderboard,
    #[command(about = "Toggle the completion of a task", arg_required_else_help = true)]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Show unique tags extracted from task titles")]
    Tags,
}

/// Options shared by every data command.
#[derive(Debug, Clone, Copy, Args)]
pub struct GlobalArgs {
    #[arg(long, global = true, help = "Bypass the response cache")]
    pub no_cache: bool,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let global = cli.global;
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Menu => menu::cmd(global).await,
            Commands::List(args) => list::cmd(args, global).await,
            Commands::Completed => list::cmd(list::ListArgs::with_status(list::StatusFilter::Completed), global).await,
            Commands::Pending => list::cmd(list::ListArgs::with_status(list::StatusFilter::Pending), global).await,
            Commands::User(args) => user::cmd(args, global).await,
            Commands::Search(args) => search::cmd(args, global).await,
            Commands::Stats => stats::cmd(global).await,
            Commands::Leaderboard => leaderboard::cmd(global).await,
            Commands::Toggle(args) => toggle::cmd(args, global).await,
            Commands::Tags => tags::cmd(global).await,
        }
    }
}

/// Session state shared by the data commands.
pub struct Session {
    pub config: Config,
    pub manager: TaskManager<JsonPlaceholder>,
}

impl Session {
    /// Builds the API client from the configuration without loading anything.
    pub fn connect(global: GlobalArgs) -> Result<Self> {
        let mut config = Config::read()?;
        if global.no_cache {
            config.use_cache = false;
        }
        msg_debug!(format!("using API at {}", config.api_url));

        let api = JsonPlaceholder::from_config(&config, ResponseCache::new())?;
        Ok(Self {
            config,
            manager: TaskManager::new(api),
        })
    }

    /// Connects and loads users and todos.
    pub async fn open(global: GlobalArgs) -> Result<Self> {
        let mut session = Self::connect(global)?;
        session.load().await?;
        Ok(session)
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            use_cache: self.config.use_cache,
        }
    }

    pub async fn load(&mut self) -> Result<()> {
        let options = self.fetch_options();
        self.manager.load(options).await?;
        msg_debug!(Message::DataLoaded {
            users: self.manager.users()?.len(),
            tasks: self.manager.all_tasks()?.len(),
        });
        Ok(())
    }
}
