//! # Taskdeck - terminal browser for remote todo lists
//!
//! Fetches users and todos from a JSONPlaceholder-style REST API, wraps them
//! in tasks and users, and answers queries over them from the terminal.
//!
//! ## Features
//!
//! - **Loading**: Users and todos are fetched concurrently and cached per session
//! - **Priority Tasks**: Every tenth todo becomes a high priority task with a due date
//! - **Queries**: Filter by status or user, keyword search, unique tags
//! - **Aggregates**: Statistics and a completion-rate leaderboard
//! - **Interactive Menu**: A prompt-driven loop over all of the above
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod error;
pub mod libs;

pub use error::{Error, Result};
