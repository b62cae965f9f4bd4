// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Chat2DeskClient: one method per remote API capability.

use std::sync::Arc;

use chat2desk_http::{Credential, HttpExecutor, ReqwestExecutor, Transport};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, instrument, warn};

use crate::config::SdkConfig;
use crate::endpoints::{Endpoints, Query, Resource};
use crate::error::{Result, SdkError};
use crate::operation::Operation;
use crate::types::{
    CreateClientOptions, Pagination, SendMessageOptions, WebHookOptions, inbox_body,
};
use crate::validator::SentinelTable;

/// High-level client for the Chat2Desk REST API.
///
/// Every operation is a single request/response exchange. Required
/// parameters are checked before anything is sent, the response is checked
/// for error sentinels, and any failure is wrapped with the operation name.
/// Responses are returned as opaque JSON.
///
/// The client holds no mutable state and can be shared across tasks.
#[derive(Debug, Clone)]
pub struct Chat2DeskClient {
    transport: Transport,
    endpoints: Endpoints,
    sentinels: SentinelTable,
}

/// A fully assembled call, ready for dispatch.
enum Call {
    Get(String),
    Post(String, Value),
    Put(String, Value),
    Delete(String),
}

impl Call {
    fn url(&self) -> &str {
        match self {
            Call::Get(url) | Call::Post(url, _) | Call::Put(url, _) | Call::Delete(url) => url,
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            Call::Get(_) => "GET",
            Call::Post(..) => "POST",
            Call::Put(..) => "PUT",
            Call::Delete(_) => "DELETE",
        }
    }
}

impl Chat2DeskClient {
    /// Create a client over the default reqwest executor.
    pub fn new(config: SdkConfig) -> Result<Self> {
        let executor = ReqwestExecutor::new(&config.executor_config())?;
        Self::assemble(config, Arc::new(executor))
    }

    /// Create a client over a caller-supplied executor.
    ///
    /// The cancellation token in `config` is honored. Timeouts belong to the
    /// executor, so a config carrying them is rejected here.
    pub fn with_executor(config: SdkConfig, executor: Arc<dyn HttpExecutor>) -> Result<Self> {
        if config.request_timeout.is_some() || config.connect_timeout.is_some() {
            return Err(SdkError::Config(
                "timeouts must be configured on the custom executor".to_string(),
            ));
        }
        Self::assemble(config, executor)
    }

    fn assemble(config: SdkConfig, executor: Arc<dyn HttpExecutor>) -> Result<Self> {
        let credential = Credential::new(config.token.as_str())
            .map_err(|_| SdkError::Config("token is required".to_string()))?;

        let mut transport = Transport::new(credential, executor);
        if let Some(token) = config.cancellation.clone() {
            transport = transport.with_cancellation(token);
        }

        Ok(Self {
            transport,
            endpoints: config.endpoints(),
            sentinels: config.sentinels,
        })
    }

    /// Create a client from environment variables.
    ///
    /// See [`SdkConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(SdkConfig::from_env()?)
    }

    /// Create a client with default settings for the given token.
    pub fn with_token(token: impl Into<String>) -> Result<Self> {
        Self::new(SdkConfig::new(token))
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn sentinels(&self) -> &SentinelTable {
        &self.sentinels
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Build, dispatch and validate one call, labelling failures with
    /// `operation`.
    async fn execute<F>(&self, operation: Operation, build: F) -> Result<Value>
    where
        F: FnOnce(&Endpoints) -> Result<Call>,
    {
        let call = match build(&self.endpoints) {
            Ok(call) => call,
            Err(err) => return Err(fail(operation, err)),
        };

        debug!(%operation, method = call.verb(), url = call.url(), "Dispatching request");

        self.dispatch(call)
            .await
            .and_then(|body| self.sentinels.validate(body))
            .map_err(|err| fail(operation, err))
    }

    /// Paginated GET: filters first, then `offset` and `limit`.
    async fn list<F>(
        &self,
        operation: Operation,
        resource: Resource,
        page: Pagination,
        filters: F,
    ) -> Result<Value>
    where
        F: FnOnce(Query) -> Result<Query>,
    {
        debug_assert!(operation.is_paginated(), "{} is not paginated", operation);
        self.execute(operation, |urls| {
            let query = filters(Query::new())?.page(page);
            Ok(Call::Get(urls.query(resource, &query)))
        })
        .await
    }

    async fn dispatch(&self, call: Call) -> Result<Value> {
        let body = match call {
            Call::Get(url) => self.transport.get(&url).await?,
            Call::Post(url, body) => self.transport.post(&url, body).await?,
            Call::Put(url, body) => self.transport.put(&url, body).await?,
            Call::Delete(url) => self.transport.delete(&url, None).await?,
        };
        Ok(body)
    }

    // =========================================================================
    // Messages
    // =========================================================================

    /// Get a single message.
    #[instrument(skip(self))]
    pub async fn get_message(&self, id: u64) -> Result<Value> {
        self.execute(Operation::GetMessage, |urls| {
            let id = require_id("id", id)?;
            Ok(Call::Get(urls.entity(Resource::Messages, id)))
        })
        .await
    }

    /// List messages.
    #[instrument(skip(self))]
    pub async fn get_messages(&self, page: Pagination) -> Result<Value> {
        self.list(Operation::GetMessages, Resource::Messages, page, Ok).await
    }

    /// List messages of one dialog.
    #[instrument(skip(self))]
    pub async fn get_messages_by_dialog(&self, dialog_id: u64, page: Pagination) -> Result<Value> {
        self.list(Operation::GetMessagesByDialog, Resource::Messages, page, |query| {
            Ok(query.param("dialog_id", require_id("dialog_id", dialog_id)?))
        })
        .await
    }

    /// Send a message to a client.
    #[instrument(skip(self, options), fields(client_id = options.client_id))]
    pub async fn send_message(&self, options: SendMessageOptions) -> Result<Value> {
        self.execute(Operation::SendMessage, |urls| {
            require_id("client_id", options.client_id)?;
            Ok(Call::Post(
                urls.collection(Resource::Messages),
                options.to_body(),
            ))
        })
        .await
    }

    /// Inject an inbound message as if the client had sent it.
    #[instrument(skip(self, phone, text))]
    pub async fn inbox_message(&self, phone: &str, text: &str, channel_id: u64) -> Result<Value> {
        self.execute(Operation::InboxMessage, |urls| {
            let phone = require_text("phone", phone)?;
            let text = require_text("body", text)?;
            let channel_id = require_id("channel_id", channel_id)?;
            Ok(Call::Post(
                urls.collection(Resource::Inbox),
                inbox_body(phone, text, channel_id),
            ))
        })
        .await
    }

    // =========================================================================
    // Channels
    // =========================================================================

    /// List channels, optionally filtered by phone.
    #[instrument(skip(self, phone))]
    pub async fn get_channels(&self, phone: Option<&str>, page: Pagination) -> Result<Value> {
        self.list(Operation::GetChannels, Resource::Channels, page, |query| {
            Ok(query.optional_param("phone", phone))
        })
        .await
    }

    // =========================================================================
    // Clients
    // =========================================================================

    /// Get a single client.
    #[instrument(skip(self))]
    pub async fn get_client(&self, id: u64) -> Result<Value> {
        self.execute(Operation::GetClient, |urls| {
            let id = require_id("id", id)?;
            Ok(Call::Get(urls.entity(Resource::Clients, id)))
        })
        .await
    }

    /// Look a client up by phone number.
    #[instrument(skip(self, phone))]
    pub async fn get_client_by_phone(&self, phone: &str) -> Result<Value> {
        self.execute(Operation::GetClientByPhone, |urls| {
            let phone = require_text("phone", phone)?;
            let query = Query::new().param("phone", phone);
            Ok(Call::Get(urls.query(Resource::Clients, &query)))
        })
        .await
    }

    /// List clients.
    #[instrument(skip(self))]
    pub async fn get_clients(&self, page: Pagination) -> Result<Value> {
        self.list(Operation::GetClients, Resource::Clients, page, Ok).await
    }

    /// Update a client with an arbitrary body. A body that serializes to
    /// `null` is sent as `{}`.
    #[instrument(skip(self, data))]
    pub async fn update_client<T>(&self, id: u64, data: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        self.execute(Operation::UpdateClient, |urls| {
            let id = require_id("id", id)?;
            let body = match serde_json::to_value(data)? {
                Value::Null => json!({}),
                body => body,
            };
            Ok(Call::Put(urls.entity(Resource::Clients, id), body))
        })
        .await
    }

    /// Create a client.
    #[instrument(skip(self, options))]
    pub async fn create_client(&self, options: CreateClientOptions) -> Result<Value> {
        self.execute(Operation::CreateClient, |urls| {
            require_text("phone", &options.phone)?;
            Ok(Call::Post(
                urls.collection(Resource::Clients),
                options.to_body(),
            ))
        })
        .await
    }

    // =========================================================================
    // Dialogs
    // =========================================================================

    /// Get a single dialog.
    #[instrument(skip(self))]
    pub async fn get_dialog(&self, id: u64) -> Result<Value> {
        self.execute(Operation::GetDialog, |urls| {
            let id = require_id("id", id)?;
            Ok(Call::Get(urls.entity(Resource::Dialogs, id)))
        })
        .await
    }

    /// List dialogs.
    #[instrument(skip(self))]
    pub async fn get_dialogs(&self, page: Pagination) -> Result<Value> {
        self.list(Operation::GetDialogs, Resource::Dialogs, page, Ok).await
    }

    // =========================================================================
    // Operators
    // =========================================================================

    /// List operators.
    #[instrument(skip(self))]
    pub async fn get_operators(&self, page: Pagination) -> Result<Value> {
        self.list(Operation::GetOperators, Resource::Operators, page, Ok).await
    }

    // =========================================================================
    // Webhooks
    // =========================================================================

    /// Register a webhook.
    #[instrument(skip(self, options))]
    pub async fn register_webhook(&self, options: WebHookOptions) -> Result<Value> {
        self.execute(Operation::WebHook, |urls| {
            Ok(Call::Post(
                urls.collection(Resource::WebHooks),
                options.to_body(),
            ))
        })
        .await
    }

    /// List registered webhooks.
    #[instrument(skip(self))]
    pub async fn get_webhooks(&self) -> Result<Value> {
        self.execute(Operation::GetWebHook, |urls| {
            Ok(Call::Get(urls.collection(Resource::WebHooks)))
        })
        .await
    }

    /// Delete a webhook.
    #[instrument(skip(self))]
    pub async fn delete_webhook(&self, id: u64) -> Result<Value> {
        self.execute(Operation::DeleteWebHook, |urls| {
            let id = require_id("id", id)?;
            Ok(Call::Delete(urls.entity(Resource::WebHooks, id)))
        })
        .await
    }
}

fn fail(operation: Operation, err: SdkError) -> SdkError {
    warn!(%operation, kind = %err.kind(), error = %err, "Operation failed");
    err.in_operation(operation)
}

fn require_id(name: &str, id: u64) -> Result<u64> {
    if id == 0 {
        return Err(SdkError::Validation(format!("{} is required", name)));
    }
    Ok(id)
}

fn require_text<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(SdkError::Validation(format!("{} is required", name)));
    }
    Ok(value)
}
