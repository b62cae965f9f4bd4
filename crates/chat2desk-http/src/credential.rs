// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Account credential carried on every request.

use std::fmt;

use crate::error::{Result, TransportError};

/// Opaque API token.
///
/// Stored exactly as supplied and sent verbatim in the `Authorization`
/// header. `Debug` output never contains the token.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token, rejecting empty or whitespace-only values.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(TransportError::MissingCredential);
        }
        Ok(Self(token))
    }

    /// The raw token.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
