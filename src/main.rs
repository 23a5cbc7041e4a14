use taskdeck::commands::Cli;
use taskdeck::libs::messages::{macros::is_debug_mode, Message};
use taskdeck::msg_error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taskdeck=debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    if let Err(err) = Cli::menu().await {
        msg_error!(Message::Fatal(err.to_string()));
        std::process::exit(1);
    }
}
