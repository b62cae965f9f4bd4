// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Chat2Desk HTTP transport.
//!
//! Sends JSON requests authenticated with a raw API token and hands back the
//! parsed response body. This crate knows nothing about the Chat2Desk
//! resource model; `chat2desk-sdk` builds on it.
//!
//! Every completed HTTP exchange resolves with its body, including 4xx/5xx
//! responses. Only failures where no exchange completed (connection refused,
//! DNS, timeout, cancellation) surface as [`TransportError`].
//!
//! # Example
//!
//! ```no_run
//! use chat2desk_http::{Credential, ExecutorConfig, Transport};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credential = Credential::new("my-token")?;
//! let transport = Transport::reqwest(credential, &ExecutorConfig::default())?;
//!
//! let body = transport
//!     .get("https://api.chat2desk.com/v1/clients?offset=0&limit=20")
//!     .await?;
//! println!("{body}");
//! # Ok(())
//! # }
//! ```

mod credential;
mod error;
mod executor;
mod request;
mod transport;

pub use credential::Credential;
pub use error::{Result, TransportError};
pub use executor::{ExecutorConfig, HttpExecutor, ReqwestExecutor, parse_body};
pub use request::{
    CONTENT_TYPE_JSON, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE, Method, RequestDescriptor,
};
pub use transport::Transport;

pub use tokio_util::sync::CancellationToken;
