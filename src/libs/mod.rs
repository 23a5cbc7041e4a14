//! Core library modules for the taskdeck application.
//!
//! ## Features
//!
//! - **Domain**: Tasks with a plain or priority kind, users, an injectable clock
//! - **Queries**: Status/user filters, keyword search, grouping, tags, statistics
//! - **Orchestration**: The task manager that loads data and guards queries
//! - **Infrastructure**: Configuration, data storage paths, messaging
//! - **User Interface**: Console table rendering
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Local;
//! use taskdeck::libs::processor::search_tasks;
//! use taskdeck::libs::task::Task;
//!
//! let tasks = vec![Task::new(1, "Write the release notes", false, 1, Local::now())];
//! assert_eq!(search_tasks(&tasks, &["release"]).len(), 1);
//! ```

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod manager;
pub mod messages;
pub mod processor;
pub mod task;
pub mod user;
pub mod view;
