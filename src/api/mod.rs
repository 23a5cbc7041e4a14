//! REST client modules for the todo data source.
//!
//! Defines the [`Fetch`] seam the task manager loads through, the raw record
//! shapes returned by the service, and the errors a fetch can end in. The
//! concrete client for JSONPlaceholder-style services lives in
//! [`placeholder`], its response cache in [`cache`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::api::{Fetch, FetchOptions, JsonPlaceholder, ResponseCache};
//!
//! # async fn run() -> Result<(), taskdeck::api::ApiError> {
//! let client = JsonPlaceholder::new("https://jsonplaceholder.typicode.com", ResponseCache::new());
//! let users = client.fetch_users(FetchOptions::default()).await?;
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

pub mod cache;
pub mod placeholder;

pub use cache::ResponseCache;
pub use placeholder::JsonPlaceholder;

/// Per-request options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Serve from and store into the response cache.
    pub use_cache: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        FetchOptions { use_cache: true }
    }
}

impl FetchOptions {
    pub fn bypass_cache() -> Self {
        FetchOptions { use_cache: false }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error fetching {path}: {source}")]
    Network {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} while fetching {path}")]
    Status { path: String, status: u16 },

    #[error("Invalid JSON for {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Data source for users and todos.
///
/// Implemented by [`JsonPlaceholder`] for the real service and by in-memory
/// fakes in tests.
#[allow(async_fn_in_trait)]
pub trait Fetch {
    /// Fetches every user.
    async fn fetch_users(&self, options: FetchOptions) -> Result<Vec<RawUser>, ApiError>;

    /// Fetches every todo.
    async fn fetch_todos(&self, options: FetchOptions) -> Result<Vec<RawTodo>, ApiError>;

    /// Fetches the todos of one user.
    async fn fetch_user_todos(&self, user_id: u32, options: FetchOptions) -> Result<Vec<RawTodo>, ApiError>;
}

/// Todo record as served by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawTodo {
    pub id: u32,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "truthy")]
    pub completed: bool,
    #[serde(rename = "userId")]
    pub user_id: u32,
}

/// User record as served by the API. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawUser {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Any JSON value as text; `null` becomes the empty string.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_text(&Value::deserialize(deserializer)?))
}

/// Loose stringification: whole numbers drop their fraction, arrays are
/// comma-joined element by element and objects collapse to `[object Object]`.
fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::String(text) => text.clone(),
        Value::Number(number) if number.is_i64() || number.is_u64() => number.to_string(),
        Value::Number(number) => match number.as_f64() {
            Some(float) if float == 0.0 => "0".to_string(),
            Some(float) => float.to_string(),
            None => number.to_string(),
        },
        Value::Array(items) => items.iter().map(value_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Any JSON value as a flag, following the usual truthiness rules.
fn truthy<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}
