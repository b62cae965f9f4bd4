// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Parameter types for client operations.
//!
//! Optional parameters that are absent, empty or zero are never sent as body
//! keys; the service treats a missing key differently from `null`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Messaging transport used when none is given.
pub const DEFAULT_TRANSPORT: &str = "whatsapp";

/// Discriminator the service expects on outgoing messages.
pub const OUTGOING_MESSAGE_TYPE: &str = "to_client";

pub const DEFAULT_OFFSET: u32 = 0;
pub const DEFAULT_LIMIT: u32 = 20;

// ============================================================================
// Pagination
// ============================================================================

/// `offset`/`limit` window for list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub offset: u32,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    /// Set the offset.
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Set the limit.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

// ============================================================================
// Messages
// ============================================================================

/// Options for sending a message to a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageOptions {
    /// Recipient client ID (required).
    pub client_id: u64,
    /// Message text.
    pub text: String,
    /// Messaging transport (whatsapp, viber, telegram, ...).
    pub transport: String,
    /// Channel to send through.
    pub channel_id: Option<u64>,
    /// Operator the message is sent on behalf of.
    pub operator_id: Option<u64>,
    /// URL of an attachment.
    pub attachment: Option<String>,
    /// URL of a PDF document.
    pub pdf: Option<String>,
    /// Open a dialog with the client.
    pub open_dialog: bool,
}

impl SendMessageOptions {
    /// Create new options with required fields.
    pub fn new(client_id: u64) -> Self {
        Self {
            client_id,
            text: String::new(),
            transport: DEFAULT_TRANSPORT.to_string(),
            channel_id: None,
            operator_id: None,
            attachment: None,
            pdf: None,
            open_dialog: false,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_transport(mut self, transport: impl Into<String>) -> Self {
        self.transport = transport.into();
        self
    }

    pub fn with_channel_id(mut self, channel_id: u64) -> Self {
        self.channel_id = Some(channel_id);
        self
    }

    pub fn with_operator_id(mut self, operator_id: u64) -> Self {
        self.operator_id = Some(operator_id);
        self
    }

    pub fn with_attachment(mut self, url: impl Into<String>) -> Self {
        self.attachment = Some(url.into());
        self
    }

    pub fn with_pdf(mut self, url: impl Into<String>) -> Self {
        self.pdf = Some(url.into());
        self
    }

    pub fn with_open_dialog(mut self, open: bool) -> Self {
        self.open_dialog = open;
        self
    }

    pub(crate) fn to_body(&self) -> Value {
        let mut body = Map::new();
        body.insert("client_id".into(), json!(self.client_id));
        body.insert("text".into(), json!(self.text));
        body.insert("transport".into(), json!(self.transport));
        body.insert("open_dialog".into(), json!(self.open_dialog));
        body.insert("type".into(), json!(OUTGOING_MESSAGE_TYPE));
        insert_text(&mut body, "attachment", self.attachment.as_deref());
        insert_text(&mut body, "pdf", self.pdf.as_deref());
        insert_id(&mut body, "channel_id", self.channel_id);
        insert_id(&mut body, "operator_id", self.operator_id);
        Value::Object(body)
    }
}

// ============================================================================
// Clients
// ============================================================================

/// Options for creating a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateClientOptions {
    /// Client phone number (required).
    pub phone: String,
    /// Messaging transport.
    pub transport: String,
    /// Channel the client belongs to.
    pub channel_id: Option<u64>,
    /// Display name.
    pub nickname: Option<String>,
}

impl CreateClientOptions {
    /// Create new options with required fields.
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            transport: DEFAULT_TRANSPORT.to_string(),
            channel_id: None,
            nickname: None,
        }
    }

    pub fn with_transport(mut self, transport: impl Into<String>) -> Self {
        self.transport = transport.into();
        self
    }

    pub fn with_channel_id(mut self, channel_id: u64) -> Self {
        self.channel_id = Some(channel_id);
        self
    }

    /// Set the nickname.
    ///
    /// The API has always received the channel ID under the `nickname` key
    /// when a nickname is given; that wire behavior is kept as-is.
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub(crate) fn to_body(&self) -> Value {
        let mut body = Map::new();
        body.insert("phone".into(), json!(self.phone));
        body.insert("transport".into(), json!(self.transport));
        insert_id(&mut body, "channel_id", self.channel_id);
        if self.nickname.as_deref().is_some_and(|n| !n.is_empty()) {
            body.insert("nickname".into(), json!(self.channel_id.unwrap_or(0)));
        }
        Value::Object(body)
    }
}

// ============================================================================
// Webhooks
// ============================================================================

/// Options for registering a webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebHookOptions {
    /// Callback URL. Sent as `null` when absent.
    pub url: Option<String>,
    /// Webhook name.
    pub name: Option<String>,
    /// Event names to subscribe to.
    pub events: Vec<String>,
}

impl WebHookOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.events = events.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single event.
    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.events.push(event.into());
        self
    }

    pub(crate) fn to_body(&self) -> Value {
        let mut body = Map::new();
        let url = self.url.as_deref().filter(|u| !u.is_empty());
        body.insert("url".into(), json!(url));
        insert_text(&mut body, "name", self.name.as_deref());
        if !self.events.is_empty() {
            body.insert("events".into(), json!(self.events));
        }
        Value::Object(body)
    }
}

pub(crate) fn inbox_body(phone: &str, text: &str, channel_id: u64) -> Value {
    json!({
        "phone": phone,
        "text": text,
        "channel_id": channel_id,
    })
}

fn insert_text(body: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        body.insert(key.to_string(), json!(value));
    }
}

fn insert_id(body: &mut Map<String, Value>, key: &str, value: Option<u64>) {
    if let Some(value) = value.filter(|v| *v != 0) {
        body.insert(key.to_string(), json!(value));
    }
}
