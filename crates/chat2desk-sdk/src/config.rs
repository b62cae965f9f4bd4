// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Configuration for the Chat2Desk client.

use std::env;
use std::fmt;
use std::time::Duration;

use chat2desk_http::ExecutorConfig;
use tokio_util::sync::CancellationToken;

use crate::endpoints::{Endpoints, ResourcePaths};
use crate::error::{Result, SdkError};
use crate::validator::SentinelTable;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.chat2desk.com/v1";

/// Configuration for the Chat2DeskClient.
#[derive(Clone)]
pub struct SdkConfig {
    /// API token, sent verbatim in the `Authorization` header.
    pub token: String,
    /// API root (default: "https://api.chat2desk.com/v1").
    pub base_url: String,
    /// Resource paths relative to `base_url`.
    pub resource_paths: ResourcePaths,
    /// Total time allowed for one request. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    /// Time allowed to establish a connection.
    pub connect_timeout: Option<Duration>,
    /// Cancels every in-flight and future request once triggered.
    pub cancellation: Option<CancellationToken>,
    /// Sentinel phrases used to classify responses.
    pub sentinels: SentinelTable,
}

impl SdkConfig {
    /// Create a new configuration with the given token and default values.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            resource_paths: ResourcePaths::default(),
            request_timeout: None,
            connect_timeout: None,
            cancellation: None,
            sentinels: SentinelTable::default(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Required Environment Variables
    /// - `CHAT2DESK_TOKEN` - API token
    ///
    /// # Optional Environment Variables
    /// - `CHAT2DESK_BASE_URL` - API root (default: "https://api.chat2desk.com/v1")
    /// - `CHAT2DESK_REQUEST_TIMEOUT_MS` - Request timeout (default: none)
    /// - `CHAT2DESK_CONNECT_TIMEOUT_MS` - Connection timeout (default: none)
    pub fn from_env() -> Result<Self> {
        let token = env::var("CHAT2DESK_TOKEN")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| SdkError::Config("CHAT2DESK_TOKEN is required".to_string()))?;

        let base_url =
            env::var("CHAT2DESK_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let request_timeout = duration_from_env("CHAT2DESK_REQUEST_TIMEOUT_MS")?;
        let connect_timeout = duration_from_env("CHAT2DESK_CONNECT_TIMEOUT_MS")?;

        Ok(Self {
            base_url,
            request_timeout,
            connect_timeout,
            ..Self::new(token)
        })
    }

    /// Set the API root, e.g. a sandbox or mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override resource paths.
    pub fn with_resource_paths(mut self, paths: ResourcePaths) -> Self {
        self.resource_paths = paths;
        self
    }

    /// Set the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Set the connection timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Attach a cancellation token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Replace the sentinel table.
    pub fn with_sentinels(mut self, sentinels: SentinelTable) -> Self {
        self.sentinels = sentinels;
        self
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.base_url.clone(), self.resource_paths.clone())
    }

    pub fn executor_config(&self) -> ExecutorConfig {
        ExecutorConfig {
            request_timeout: self.request_timeout,
            connect_timeout: self.connect_timeout,
        }
    }
}

impl fmt::Debug for SdkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SdkConfig")
            .field("token", &"***")
            .field("base_url", &self.base_url)
            .field("resource_paths", &self.resource_paths)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("cancellation", &self.cancellation.is_some())
            .field("sentinels", &self.sentinels.entries().len())
            .finish()
    }
}

fn duration_from_env(name: &str) -> Result<Option<Duration>> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(|ms| Some(Duration::from_millis(ms)))
            .map_err(|e| SdkError::Config(format!("invalid {}: {}", name, e))),
        Err(_) => Ok(None),
    }
}
