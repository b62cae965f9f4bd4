// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for chat2desk-http.

use thiserror::Error;

/// Result type using TransportError.
pub type Result<T> = std::result::Result<T, TransportError>;

/// Failures that prevented an HTTP exchange from completing.
///
/// A response with a 4xx/5xx status is NOT a transport error; it resolves
/// like any other response and is left to the caller to interpret.
#[derive(Debug, Error)]
pub enum TransportError {
    /// No credential, or a blank one, was supplied.
    #[error("credential is required")]
    MissingCredential,

    /// The request could not be built (malformed URL or header value).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Network-level failure: connection refused, DNS, TLS, broken body stream.
    #[error("request failed: {0}")]
    Request(String),

    /// The configured request or connect timeout elapsed.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The request was cancelled through its cancellation token.
    #[error("request cancelled")]
    Cancelled,

    /// The request body could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_builder() {
            TransportError::InvalidRequest(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Serialization(err.to_string())
    }
}
