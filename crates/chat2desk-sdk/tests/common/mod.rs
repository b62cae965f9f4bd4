// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Shared test doubles.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chat2desk_sdk::{
    Chat2DeskClient, HttpExecutor, RequestDescriptor, SdkConfig, TransportError,
};
use serde_json::{Value, json};

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_BASE_URL: &str = "http://chat2desk.test/v1";

/// Executor that records every request and answers with a fixed body.
pub struct RecordingExecutor {
    response: Value,
    fail: bool,
    requests: Mutex<Vec<RequestDescriptor>>,
}

impl RecordingExecutor {
    pub fn responding(response: Value) -> Arc<Self> {
        Arc::new(Self {
            response,
            fail: false,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn ok() -> Arc<Self> {
        Self::responding(json!({"status": "success"}))
    }

    /// Every call fails as if the connection were refused.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            response: Value::Null,
            fail: true,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last(&self) -> RequestDescriptor {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

#[async_trait]
impl HttpExecutor for RecordingExecutor {
    async fn execute(
        &self,
        request: RequestDescriptor,
    ) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(request);
        if self.fail {
            return Err(TransportError::Request("connection refused".to_string()));
        }
        Ok(self.response.clone())
    }
}

pub fn client_with(executor: Arc<RecordingExecutor>) -> Chat2DeskClient {
    let config = SdkConfig::new(TEST_TOKEN).with_base_url(TEST_BASE_URL);
    Chat2DeskClient::with_executor(config, executor).unwrap()
}

pub fn url(path: &str) -> String {
    format!("{}{}", TEST_BASE_URL, path)
}
