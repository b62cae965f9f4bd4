// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for chat2desk-sdk.

use std::fmt;

use chat2desk_http::TransportError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::operation::Operation;

/// Result type using SdkError.
pub type Result<T> = std::result::Result<T, SdkError>;

/// Category of a failure, independent of the operation it surfaced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Config,
    Validation,
    Transport,
    Serialization,
    Auth,
    RateLimit,
    NotFound,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Validation => "validation",
            Self::Transport => "transport",
            Self::Serialization => "serialization",
            Self::Auth => "auth",
            Self::RateLimit => "rate_limit",
            Self::NotFound => "not_found",
        }
    }

    /// Kinds a response body can be classified as.
    pub fn is_response_kind(&self) -> bool {
        matches!(self, Self::Auth | Self::RateLimit | Self::NotFound)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur when using the SDK.
#[derive(Debug, Error)]
pub enum SdkError {
    /// Configuration error (missing or invalid values).
    #[error("configuration error: {0}")]
    Config(String),

    /// A required parameter was missing; no request was sent.
    #[error("validation error: {0}")]
    Validation(String),

    /// No HTTP exchange completed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A request body could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The service reported a missing or rejected token.
    #[error("authentication error: {0}")]
    Auth(String),

    /// The service reported an exhausted request or monthly quota.
    #[error("rate limit exceeded: {0}")]
    RateLimit(String),

    /// The service reported an unknown page or entity.
    #[error("not found: {0}")]
    NotFound(String),

    /// A failure annotated with the operation it came from.
    #[error("{operation} failed: {source}")]
    Operation {
        operation: Operation,
        #[source]
        source: Box<SdkError>,
    },
}

impl SdkError {
    /// Build the error variant matching `kind`.
    pub fn from_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        match kind {
            ErrorKind::Config => SdkError::Config(message),
            ErrorKind::Validation => SdkError::Validation(message),
            ErrorKind::Transport => SdkError::Transport(TransportError::Request(message)),
            ErrorKind::Serialization => SdkError::Serialization(message),
            ErrorKind::Auth => SdkError::Auth(message),
            ErrorKind::RateLimit => SdkError::RateLimit(message),
            ErrorKind::NotFound => SdkError::NotFound(message),
        }
    }

    /// Kind of the innermost cause.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SdkError::Config(_) => ErrorKind::Config,
            SdkError::Validation(_) => ErrorKind::Validation,
            SdkError::Transport(_) => ErrorKind::Transport,
            SdkError::Serialization(_) => ErrorKind::Serialization,
            SdkError::Auth(_) => ErrorKind::Auth,
            SdkError::RateLimit(_) => ErrorKind::RateLimit,
            SdkError::NotFound(_) => ErrorKind::NotFound,
            SdkError::Operation { source, .. } => source.kind(),
        }
    }

    /// The operation this error was raised from, if it has been wrapped.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            SdkError::Operation { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// The innermost error, with every operation wrapper removed.
    pub fn root_cause(&self) -> &SdkError {
        let mut current = self;
        while let SdkError::Operation { source, .. } = current {
            current = source.as_ref();
        }
        current
    }

    pub(crate) fn in_operation(self, operation: Operation) -> Self {
        SdkError::Operation {
            operation,
            source: Box::new(self),
        }
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        SdkError::Serialization(err.to_string())
    }
}
