// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Authenticated JSON transport.

use std::fmt;
use std::sync::Arc;

use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::credential::Credential;
use crate::error::{Result, TransportError};
use crate::executor::{ExecutorConfig, HttpExecutor, ReqwestExecutor};
use crate::request::{Method, RequestDescriptor};

/// Sends requests carrying a fixed credential.
///
/// Stateless apart from the credential; cloning is cheap and clones share
/// the same executor. An attached cancellation token applies whatever the
/// executor is.
#[derive(Clone)]
pub struct Transport {
    credential: Credential,
    executor: Arc<dyn HttpExecutor>,
    cancellation: Option<CancellationToken>,
}

impl Transport {
    /// Create a transport over an arbitrary executor.
    pub fn new(credential: Credential, executor: Arc<dyn HttpExecutor>) -> Self {
        Self {
            credential,
            executor,
            cancellation: None,
        }
    }

    /// Create a transport over a fresh [`ReqwestExecutor`].
    pub fn reqwest(credential: Credential, config: &ExecutorConfig) -> Result<Self> {
        let executor = ReqwestExecutor::new(config)?;
        Ok(Self::new(credential, Arc::new(executor)))
    }

    /// Fail every in-flight and future request with
    /// [`TransportError::Cancelled`] once `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub async fn get(&self, url: &str) -> Result<Value> {
        self.send(Method::Get, url, None).await
    }

    pub async fn post(&self, url: &str, body: Value) -> Result<Value> {
        self.send(Method::Post, url, Some(body)).await
    }

    pub async fn put(&self, url: &str, body: Value) -> Result<Value> {
        self.send(Method::Put, url, Some(body)).await
    }

    /// Send a DELETE. Without an explicit body an empty JSON object is sent.
    pub async fn delete(&self, url: &str, body: Option<Value>) -> Result<Value> {
        let body = body.unwrap_or_else(|| json!({}));
        self.send(Method::Delete, url, Some(body)).await
    }

    /// Build the request descriptor and hand it to the executor.
    pub async fn send(&self, method: Method, url: &str, body: Option<Value>) -> Result<Value> {
        let request = RequestDescriptor::new(method, url, &self.credential, body);
        let Some(token) = &self.cancellation else {
            return self.executor.execute(request).await;
        };

        if token.is_cancelled() {
            debug!(%method, url, "Request not sent, transport cancelled");
            return Err(TransportError::Cancelled);
        }

        tokio::select! {
            biased;

            _ = token.cancelled() => {
                debug!(%method, url, "Request cancelled");
                Err(TransportError::Cancelled)
            }

            result = self.executor.execute(request) => result,
        }
    }
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("credential", &self.credential)
            .field("cancellable", &self.cancellation.is_some())
            .finish_non_exhaustive()
    }
}
