// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Executors perform a single HTTP exchange.
//!
//! The [`HttpExecutor`] trait is the seam between request assembly and the
//! network. [`ReqwestExecutor`] is the production implementation; tests and
//! alternate HTTP stacks plug in their own.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::{Result, TransportError};
use crate::request::{Method, RequestDescriptor};

/// Performs one HTTP exchange and returns the parsed response body.
///
/// Implementations must resolve with the body for every completed exchange,
/// whatever the status code, and fail only when no exchange completed.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    async fn execute(&self, request: RequestDescriptor) -> Result<Value>;
}

/// Network settings for [`ReqwestExecutor`].
#[derive(Debug, Clone, Default)]
pub struct ExecutorConfig {
    /// Total time allowed for one exchange. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
    /// Time allowed to establish the connection.
    pub connect_timeout: Option<Duration>,
}

impl ExecutorConfig {
    pub fn new() -> Self {
        Self::default()
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
}

/// reqwest-backed executor.
#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    client: reqwest::Client,
    cancellation: Option<CancellationToken>,
}

impl ReqwestExecutor {
    pub fn new(config: &ExecutorConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            cancellation: None,
        })
    }

    /// Abort in-flight and future requests once `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    async fn exchange(&self, request: RequestDescriptor) -> Result<Value> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method()), request.url());
        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body() {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            debug!(
                method = %request.method(),
                url = %request.url(),
                status = status.as_u16(),
                "Request completed"
            );
        } else {
            warn!(
                method = %request.method(),
                url = %request.url(),
                status = status.as_u16(),
                "Request completed with non-success status"
            );
        }

        Ok(parse_body(&text))
    }
}

#[async_trait]
impl HttpExecutor for ReqwestExecutor {
    async fn execute(&self, request: RequestDescriptor) -> Result<Value> {
        match &self.cancellation {
            Some(token) => {
                tokio::select! {
                    biased;

                    _ = token.cancelled() => {
                        debug!(url = %request.url(), "Request cancelled");
                        Err(TransportError::Cancelled)
                    }

                    result = self.exchange(request.clone()) => result,
                }
            }
            None => self.exchange(request).await,
        }
    }
}

/// Decode a response body.
///
/// Valid JSON is returned as parsed; any other text comes back as a JSON
/// string holding the raw text; an empty body is `null`.
pub fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}
