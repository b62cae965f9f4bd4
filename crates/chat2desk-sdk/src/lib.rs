// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Chat2Desk SDK
//!
//! Async client for the Chat2Desk REST API: clients, dialogs, channels,
//! messages, operators and webhooks.
//!
//! # Architecture
//!
//! Each client method maps to exactly one remote call and runs the same
//! pipeline:
//! - required parameters are checked; nothing is sent if one is missing
//! - the URL and sparse JSON body are assembled
//! - the request goes out through `chat2desk-http`
//! - the response is scanned for error sentinels the API embeds in
//!   HTTP 200 bodies
//! - any failure is wrapped with the operation name
//!
//! Successful responses are returned as untyped [`serde_json::Value`].
//!
//! # Example
//!
//! ```no_run
//! use chat2desk_sdk::{Chat2DeskClient, Pagination, SendMessageOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads CHAT2DESK_TOKEN (and optional overrides) from the environment
//! let client = Chat2DeskClient::from_env()?;
//!
//! let clients = client.get_clients(Pagination::default()).await?;
//! println!("Clients: {clients}");
//!
//! let options = SendMessageOptions::new(42)
//!     .with_text("Your order has shipped")
//!     .with_transport("telegram");
//! client.send_message(options).await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod endpoints;
mod error;
mod operation;
mod types;
mod validator;

pub use client::Chat2DeskClient;
pub use config::{DEFAULT_BASE_URL, SdkConfig};
pub use endpoints::{Endpoints, Query, Resource, ResourcePaths};
pub use error::{ErrorKind, Result, SdkError};
pub use operation::Operation;
pub use types::{
    CreateClientOptions, DEFAULT_LIMIT, DEFAULT_OFFSET, DEFAULT_TRANSPORT, OUTGOING_MESSAGE_TYPE,
    Pagination, SendMessageOptions, WebHookOptions,
};
pub use validator::{
    AUTH_REQUIRED_SENTINEL, MONTHLY_QUOTA_SENTINEL, PAGE_NOT_FOUND_SENTINEL,
    REQUEST_RATE_SENTINEL, Sentinel, SentinelTable, TOKEN_MISSING_SENTINEL, body_text,
};

pub use chat2desk_http::{
    CancellationToken, Credential, ExecutorConfig, HttpExecutor, Method, RequestDescriptor,
    TransportError,
};
