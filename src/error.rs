//! Error types for the task manager.
//!
//! - `NotLoaded`: a query ran before `load()` succeeded
//! - `TaskNotFound`: toggle of an id that is not in the loaded set
//! - `LoadFailed`: the fetch collaborator failed while loading

use crate::api::ApiError;
use thiserror::Error;

/// Main error type for task manager operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Data not loaded. Call load() first")]
    NotLoaded,

    #[error("Task #{0} not found")]
    TaskNotFound(String),

    #[error("Load failed: {0}")]
    LoadFailed(#[from] ApiError),
}

pub type Result<T> = std::result::Result<T, Error>;
