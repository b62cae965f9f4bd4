// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! URL assembly for Chat2Desk resources.

use serde::{Deserialize, Serialize};

use crate::types::Pagination;

/// Remote resource collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Clients,
    Dialogs,
    Channels,
    Messages,
    Inbox,
    Operators,
    WebHooks,
}

/// Path of each resource relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePaths {
    pub clients: String,
    pub dialogs: String,
    pub channels: String,
    pub messages: String,
    pub inbox: String,
    pub operators: String,
    pub webhooks: String,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            clients: "clients".to_string(),
            dialogs: "dialogs".to_string(),
            channels: "channels".to_string(),
            messages: "messages".to_string(),
            inbox: "messages/inbox".to_string(),
            operators: "operators".to_string(),
            webhooks: "webhooks".to_string(),
        }
    }
}

impl ResourcePaths {
    pub fn path(&self, resource: Resource) -> &str {
        match resource {
            Resource::Clients => &self.clients,
            Resource::Dialogs => &self.dialogs,
            Resource::Channels => &self.channels,
            Resource::Messages => &self.messages,
            Resource::Inbox => &self.inbox,
            Resource::Operators => &self.operators,
            Resource::WebHooks => &self.webhooks,
        }
    }
}

/// Immutable base URL plus resource paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
    paths: ResourcePaths,
}

impl Endpoints {
    pub fn new(base_url: impl Into<String>, paths: ResourcePaths) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, paths }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn paths(&self) -> &ResourcePaths {
        &self.paths
    }

    /// `{base}/{resource}`
    pub fn collection(&self, resource: Resource) -> String {
        format!(
            "{}/{}",
            self.base_url,
            self.paths.path(resource).trim_matches('/')
        )
    }

    /// `{base}/{resource}/{id}`
    pub fn entity(&self, resource: Resource, id: u64) -> String {
        format!("{}/{}", self.collection(resource), id)
    }

    /// `{base}/{resource}?{query}`
    pub fn query(&self, resource: Resource, query: &Query) -> String {
        let collection = self.collection(resource);
        if query.is_empty() {
            collection
        } else {
            format!("{}?{}", collection, query.encode())
        }
    }
}

/// Ordered query-string builder. Values are percent-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    pub fn optional_param(self, key: &'static str, value: Option<&str>) -> Self {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Append `offset` then `limit`.
    pub fn page(self, page: Pagination) -> Self {
        self.param("offset", page.offset).param("limit", page.limit)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new("https://api.chat2desk.com/v1/", ResourcePaths::default())
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        assert_eq!(endpoints().base_url(), "https://api.chat2desk.com/v1");
    }

    #[test]
    fn test_collection_and_entity() {
        let endpoints = endpoints();
        assert_eq!(
            endpoints.collection(Resource::Clients),
            "https://api.chat2desk.com/v1/clients"
        );
        assert_eq!(
            endpoints.collection(Resource::Inbox),
            "https://api.chat2desk.com/v1/messages/inbox"
        );
        assert_eq!(
            endpoints.entity(Resource::Dialogs, 42),
            "https://api.chat2desk.com/v1/dialogs/42"
        );
    }

    #[test]
    fn test_default_page_query() {
        let url = endpoints().query(Resource::Messages, &Query::new().page(Pagination::default()));
        assert_eq!(
            url,
            "https://api.chat2desk.com/v1/messages?offset=0&limit=20"
        );
    }

    #[test]
    fn test_filters_precede_page() {
        let query = Query::new()
            .param("dialog_id", 7)
            .page(Pagination::new(40, 10));
        assert_eq!(query.encode(), "dialog_id=7&offset=40&limit=10");
    }

    #[test]
    fn test_values_are_encoded() {
        let query = Query::new().param("phone", "+7 999");
        assert_eq!(query.encode(), "phone=%2B7%20999");
    }

    #[test]
    fn test_blank_optional_param_skipped() {
        let query = Query::new()
            .optional_param("phone", Some(" "))
            .optional_param("name", None)
            .page(Pagination::default());
        assert_eq!(query.encode(), "offset=0&limit=20");
    }

    #[test]
    fn test_empty_query_has_no_question_mark() {
        assert_eq!(
            endpoints().query(Resource::WebHooks, &Query::new()),
            "https://api.chat2desk.com/v1/webhooks"
        );
    }

    #[test]
    fn test_custom_paths() {
        let paths = ResourcePaths {
            webhooks: "companies/web_hook".to_string(),
            ..ResourcePaths::default()
        };
        let endpoints = Endpoints::new("http://127.0.0.1:9000/v1", paths);
        assert_eq!(
            endpoints.collection(Resource::WebHooks),
            "http://127.0.0.1:9000/v1/companies/web_hook"
        );
    }
}
