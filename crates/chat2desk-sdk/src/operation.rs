// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Names of the remote operations exposed by the client.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One SDK operation, corresponding to exactly one remote capability.
///
/// Used to label errors and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    GetMessage,
    GetMessages,
    GetMessagesByDialog,
    SendMessage,
    InboxMessage,
    GetChannels,
    GetClient,
    GetClientByPhone,
    GetClients,
    UpdateClient,
    CreateClient,
    GetDialog,
    GetDialogs,
    GetOperators,
    WebHook,
    GetWebHook,
    DeleteWebHook,
}

impl Operation {
    /// Every operation, in catalog order.
    pub const ALL: [Operation; 17] = [
        Operation::GetMessage,
        Operation::GetMessages,
        Operation::GetMessagesByDialog,
        Operation::SendMessage,
        Operation::InboxMessage,
        Operation::GetChannels,
        Operation::GetClient,
        Operation::GetClientByPhone,
        Operation::GetClients,
        Operation::UpdateClient,
        Operation::CreateClient,
        Operation::GetDialog,
        Operation::GetDialogs,
        Operation::GetOperators,
        Operation::WebHook,
        Operation::GetWebHook,
        Operation::DeleteWebHook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GetMessage => "GetMessage",
            Self::GetMessages => "GetMessages",
            Self::GetMessagesByDialog => "GetMessagesByDialog",
            Self::SendMessage => "SendMessage",
            Self::InboxMessage => "InboxMessage",
            Self::GetChannels => "GetChannels",
            Self::GetClient => "GetClient",
            Self::GetClientByPhone => "GetClientByPhone",
            Self::GetClients => "GetClients",
            Self::UpdateClient => "UpdateClient",
            Self::CreateClient => "CreateClient",
            Self::GetDialog => "GetDialog",
            Self::GetDialogs => "GetDialogs",
            Self::GetOperators => "GetOperators",
            Self::WebHook => "WebHook",
            Self::GetWebHook => "GetWebHook",
            Self::DeleteWebHook => "DeleteWebHook",
        }
    }

    /// Whether the operation takes `offset`/`limit` parameters.
    pub fn is_paginated(&self) -> bool {
        matches!(
            self,
            Self::GetMessages
                | Self::GetMessagesByDialog
                | Self::GetChannels
                | Self::GetClients
                | Self::GetDialogs
                | Self::GetOperators
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
