// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Response validation.
//!
//! The Chat2Desk API reports several logical failures inside otherwise
//! successful (HTTP 200) responses. A response is classified by looking for
//! known sentinel phrases in its text; the first match in table order decides
//! the error kind.

use std::borrow::Cow;

use serde_json::Value;
use tracing::warn;

use crate::error::{ErrorKind, Result, SdkError};

pub const TOKEN_MISSING_SENTINEL: &str =
    "You have to specify your token. See API manual on info@chat2desk.com";
pub const AUTH_REQUIRED_SENTINEL: &str = "You need to auth";
pub const REQUEST_RATE_SENTINEL: &str = "Number of API requests exceeded";
pub const MONTHLY_QUOTA_SENTINEL: &str = "API calls exceeded API limit per month";
pub const PAGE_NOT_FOUND_SENTINEL: &str = "Page not found";

/// A phrase and the error kind it signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentinel {
    pub text: String,
    pub kind: ErrorKind,
}

impl Sentinel {
    pub fn new(text: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Ordered sentinel lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentinelTable {
    entries: Vec<Sentinel>,
}

impl Default for SentinelTable {
    fn default() -> Self {
        Self {
            entries: vec![
                Sentinel::new(TOKEN_MISSING_SENTINEL, ErrorKind::Auth),
                Sentinel::new(AUTH_REQUIRED_SENTINEL, ErrorKind::Auth),
                Sentinel::new(REQUEST_RATE_SENTINEL, ErrorKind::RateLimit),
                Sentinel::new(MONTHLY_QUOTA_SENTINEL, ErrorKind::RateLimit),
                Sentinel::new(PAGE_NOT_FOUND_SENTINEL, ErrorKind::NotFound),
            ],
        }
    }
}

impl SentinelTable {
    /// A table with no entries; every response passes.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a sentinel. It is checked after every existing entry.
    ///
    /// Only kinds that describe a completed response (`Auth`, `RateLimit`,
    /// `NotFound`) are accepted.
    pub fn with_sentinel(mut self, text: impl Into<String>, kind: ErrorKind) -> Result<Self> {
        if !kind.is_response_kind() {
            return Err(SdkError::Config(format!(
                "{} cannot be used as a sentinel kind",
                kind
            )));
        }
        self.entries.push(Sentinel::new(text, kind));
        Ok(self)
    }

    pub fn entries(&self) -> &[Sentinel] {
        &self.entries
    }

    /// First sentinel contained in the body text, if any.
    pub fn classify(&self, body: &Value) -> Option<&Sentinel> {
        let text = body_text(body);
        self.entries
            .iter()
            .find(|sentinel| text.contains(sentinel.text.as_str()))
    }

    /// Return the body untouched, or the error its sentinel signals.
    ///
    /// The body is dropped on failure.
    pub fn validate(&self, body: Value) -> Result<Value> {
        match self.classify(&body) {
            None => Ok(body),
            Some(sentinel) => {
                warn!(kind = %sentinel.kind, sentinel = %sentinel.text, "Response carries an error sentinel");
                Err(SdkError::from_kind(sentinel.kind, sentinel.text.clone()))
            }
        }
    }
}

/// Text a body is matched against: strings as-is, everything else as JSON.
pub fn body_text(body: &Value) -> Cow<'_, str> {
    match body {
        Value::String(text) => Cow::Borrowed(text.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}
