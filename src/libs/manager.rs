//! Task manager: loads users and todos once and answers queries over them.
//!
//! The manager starts unloaded. A successful [`TaskManager::load`] fills the
//! task arena and the user list and flips it to loaded; every query checks
//! that flag first and fails with [`Error::NotLoaded`] before it.
//!
//! ## Storage Layout
//!
//! Tasks live in a single `Vec<Task>` in the order the API returned them.
//! Each [`User`] holds the indices of its tasks in that vector, so toggling a
//! task is visible through the owning user's completion rate.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::api::{FetchOptions, JsonPlaceholder, ResponseCache};
//! use taskdeck::libs::manager::TaskManager;
//!
//! # async fn run() -> taskdeck::error::Result<()> {
//! let api = JsonPlaceholder::new("https://jsonplaceholder.typicode.com", ResponseCache::new());
//! let mut manager = TaskManager::new(api);
//! manager.load(FetchOptions::default()).await?;
//! let stats = manager.statistics()?;
//! # Ok(())
//! # }
//! ```

use super::clock::{Clock, SystemClock};
use super::processor::{self, IdInput, Statistics};
use super::task::{Task, STATUS_COMPLETED, STATUS_PENDING};
use super::user::User;
use crate::api::{Fetch, FetchOptions};
use crate::error::{Error, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt::Display;
use std::sync::Arc;

/// One row of the completion leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardRow {
    pub id: u32,
    pub name: Option<String>,
    pub username: Option<String>,
    pub completion_rate: u32,
}

pub struct TaskManager<F: Fetch> {
    api: F,
    clock: Arc<dyn Clock>,
    users: Vec<User>,
    tasks: Vec<Task>,
    loaded: bool,
}

impl<F: Fetch> TaskManager<F> {
    pub fn new(api: F) -> Self {
        Self::with_clock(api, Arc::new(SystemClock))
    }

    pub fn with_clock(api: F, clock: Arc<dyn Clock>) -> Self {
        Self {
            api,
            clock,
            users: Vec::new(),
            tasks: Vec::new(),
            loaded: false,
        }
    }

    pub fn api(&self) -> &F {
        &self.api
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn now(&self) -> DateTime<Local> {
        self.clock.now()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Fetches users and todos concurrently and replaces the held data.
    ///
    /// Both requests must succeed; on failure nothing is committed and the
    /// manager keeps its previous state.
    pub async fn load(&mut self, options: FetchOptions) -> Result<()> {
        tracing::debug!(use_cache = options.use_cache, "loading users and todos");

        let (users_raw, todos_raw) = tokio::try_join!(self.api.fetch_users(options), self.api.fetch_todos(options))
            .map_err(|err| {
                tracing::warn!(error = %err, "load failed");
                Error::LoadFailed(err)
            })?;

        let tasks = processor::to_task_instances(&todos_raw, true, self.clock.as_ref());
        let mut users: Vec<User> = users_raw.iter().map(User::from_raw).collect();

        let mut owned: HashMap<u32, Vec<usize>> = HashMap::new();
        for (index, task) in tasks.iter().enumerate() {
            owned.entry(task.user_id).or_default().push(index);
        }
        for user in users.iter_mut() {
            owned.get(&user.id).into_iter().flatten().for_each(|&index| user.add_task(index));
        }

        tracing::info!(users = users.len(), tasks = tasks.len(), "data loaded");

        self.users = users;
        self.tasks = tasks;
        self.loaded = true;
        Ok(())
    }

    fn ensure_loaded(&self) -> Result<()> {
        if self.loaded {
            Ok(())
        } else {
            Err(Error::NotLoaded)
        }
    }

    pub fn all_tasks(&self) -> Result<&[Task]> {
        self.ensure_loaded()?;
        Ok(&self.tasks)
    }

    pub fn users(&self) -> Result<&[User]> {
        self.ensure_loaded()?;
        Ok(&self.users)
    }

    pub fn tasks_by_user<K: IdInput + ?Sized>(&self, user_id: &K) -> Result<Vec<&Task>> {
        self.ensure_loaded()?;
        Ok(processor::filter_by_user(&self.tasks, user_id))
    }

    pub fn completed_tasks(&self) -> Result<Vec<&Task>> {
        self.ensure_loaded()?;
        Ok(processor::filter_by_status(&self.tasks, STATUS_COMPLETED, self.now()))
    }

    pub fn pending_tasks(&self) -> Result<Vec<&Task>> {
        self.ensure_loaded()?;
        Ok(processor::filter_by_status(&self.tasks, STATUS_PENDING, self.now()))
    }

    pub fn statistics(&self) -> Result<Statistics> {
        self.ensure_loaded()?;
        Ok(processor::calculate_statistics(&self.tasks, self.now()))
    }

    pub fn search<K: Display>(&self, keywords: &[K]) -> Result<Vec<&Task>> {
        self.ensure_loaded()?;
        Ok(processor::search_tasks(&self.tasks, keywords))
    }

    pub fn tags(&self) -> Result<BTreeSet<String>> {
        self.ensure_loaded()?;
        Ok(processor::unique_tags(Some(self.tasks.as_slice())))
    }

    /// Users ordered by completion rate, highest first. Ties keep load order.
    pub fn users_leaderboard(&self) -> Result<Vec<LeaderboardRow>> {
        self.ensure_loaded()?;

        let mut rows: Vec<LeaderboardRow> = self
            .users
            .iter()
            .map(|user| LeaderboardRow {
                id: user.id,
                name: user.name.clone(),
                username: user.username.clone(),
                completion_rate: user.completion_rate(&self.tasks),
            })
            .collect();

        // sort_by is stable
        rows.sort_by(|a, b| b.completion_rate.cmp(&a.completion_rate));
        Ok(rows)
    }

    /// Label of the matching user, or `User <user_id>` when none is loaded.
    pub fn get_user_label<K: IdInput + ?Sized>(&self, user_id: &K) -> String {
        let id = user_id.to_id();
        self.users
            .iter()
            .find(|user| Some(user.id) == id)
            .map(User::label)
            .unwrap_or_else(|| format!("User {}", user_id))
    }

    /// Flips the completion flag of a task in place and returns it.
    pub fn toggle_task<K: IdInput + ?Sized>(&mut self, task_id: &K) -> Result<&Task> {
        self.ensure_loaded()?;

        let id = task_id.to_id();
        let task = self
            .tasks
            .iter_mut()
            .find(|task| Some(task.id) == id)
            .ok_or_else(|| Error::TaskNotFound(task_id.to_string()))?;

        task.toggle();
        tracing::info!(id = task.id, completed = task.completed, "task toggled");
        Ok(task)
    }
}
