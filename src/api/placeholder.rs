//! Client for JSONPlaceholder-style REST services.
//!
//! Talks to any service exposing `GET /users`, `GET /todos` and
//! `GET /todos?userId=<id>` with JSON bodies, the public
//! `jsonplaceholder.typicode.com` instance being the default.
//!
//! ## Features
//!
//! - **Response Cache**: Decoded bodies are kept per request path in a shared [`ResponseCache`]
//! - **Cache Bypass**: [`FetchOptions::bypass_cache`] skips both cache lookup and cache store
//! - **Error Mapping**: Transport, status and decoding failures map to [`ApiError`] variants
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::api::{Fetch, FetchOptions, JsonPlaceholder, ResponseCache};
//!
//! # async fn run() -> Result<(), taskdeck::api::ApiError> {
//! let client = JsonPlaceholder::new("https://jsonplaceholder.typicode.com", ResponseCache::new());
//! let todos = client.fetch_user_todos(3, FetchOptions::default()).await?;
//! # Ok(())
//! # }
//! ```

use super::{ApiError, Fetch, FetchOptions, RawTodo, RawUser, ResponseCache};
use crate::libs::config::Config;
use anyhow::Result;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

const USERS_PATH: &str = "users";
const TODOS_PATH: &str = "todos";

#[derive(Debug, Clone)]
pub struct JsonPlaceholder {
    /// HTTP client with connection pooling
    client: Client,
    /// Service root without a trailing slash
    base_url: String,
    cache: ResponseCache,
}

impl JsonPlaceholder {
    /// Creates a client with default HTTP settings.
    pub fn new(base_url: &str, cache: ResponseCache) -> Self {
        Self::with_client(Client::new(), base_url, cache)
    }

    pub fn with_client(client: Client, base_url: &str, cache: ResponseCache) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache,
        }
    }

    /// Creates a client for the configured service, applying the request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &Config, cache: ResponseCache) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        Ok(Self::with_client(client, &config.api_url, cache))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, options: FetchOptions) -> Result<T, ApiError> {
        if options.use_cache {
            if let Some(value) = self.cache.get(path) {
                tracing::debug!(path, "cache hit");
                return decode(path, value);
            }
        }

        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(%url, use_cache = options.use_cache, "fetching");

        let network = |source| ApiError::Network {
            path: path.to_string(),
            source,
        };

        let response = self.client.get(&url).send().await.map_err(network)?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(path, status = status.as_u16(), "request failed");
            return Err(ApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(network)?;
        let value: Value = serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })?;
        let data = decode(path, value.clone())?;

        if options.use_cache {
            self.cache.set(path, value);
        }

        Ok(data)
    }
}

fn decode<T: DeserializeOwned>(path: &str, value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|source| ApiError::Decode {
        path: path.to_string(),
        source,
    })
}

impl Fetch for JsonPlaceholder {
    async fn fetch_users(&self, options: FetchOptions) -> Result<Vec<RawUser>, ApiError> {
        self.get_json(USERS_PATH, options).await
    }

    async fn fetch_todos(&self, options: FetchOptions) -> Result<Vec<RawTodo>, ApiError> {
        self.get_json(TODOS_PATH, options).await
    }

    async fn fetch_user_todos(&self, user_id: u32, options: FetchOptions) -> Result<Vec<RawTodo>, ApiError> {
        self.get_json(&format!("{}?userId={}", TODOS_PATH, user_id), options).await
    }
}
