// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Request descriptors handed to an executor.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::credential::Credential;

pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP verbs used by the Chat2Desk API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully-assembled HTTP request.
///
/// Built fresh for every call and never mutated afterwards. The URL already
/// carries its query string.
#[derive(Clone, PartialEq)]
pub struct RequestDescriptor {
    method: Method,
    url: String,
    headers: BTreeMap<String, String>,
    body: Option<Value>,
}

impl RequestDescriptor {
    /// Build a JSON request authenticated with `credential`.
    pub fn new(
        method: Method,
        url: impl Into<String>,
        credential: &Credential,
        body: Option<Value>,
    ) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(
            HEADER_CONTENT_TYPE.to_string(),
            CONTENT_TYPE_JSON.to_string(),
        );
        headers.insert(
            HEADER_AUTHORIZATION.to_string(),
            credential.expose().to_string(),
        );

        Self {
            method,
            url: url.into(),
            headers,
            body,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }
}

impl fmt::Debug for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: BTreeMap<&str, &str> = self
            .headers
            .iter()
            .map(|(key, value)| {
                if key.eq_ignore_ascii_case(HEADER_AUTHORIZATION) {
                    (key.as_str(), "***")
                } else {
                    (key.as_str(), value.as_str())
                }
            })
            .collect();

        f.debug_struct("RequestDescriptor")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body", &self.body)
            .finish()
    }
}
