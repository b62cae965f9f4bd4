// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Tests for SDK error types.

use std::error::Error;

use chat2desk_sdk::{ErrorKind, Operation, SdkError, TransportError};

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_config_error_display() {
    let err = SdkError::Config("CHAT2DESK_TOKEN is required".to_string());
    assert_eq!(
        err.to_string(),
        "configuration error: CHAT2DESK_TOKEN is required"
    );
}

#[test]
fn test_validation_error_display() {
    let err = SdkError::Validation("phone is required".to_string());
    assert_eq!(err.to_string(), "validation error: phone is required");
}

#[test]
fn test_transport_error_display() {
    let err = SdkError::from(TransportError::Cancelled);
    assert!(err.to_string().starts_with("transport error: "));
}

#[test]
fn test_sentinel_error_display() {
    assert_eq!(
        SdkError::Auth("You need to auth".to_string()).to_string(),
        "authentication error: You need to auth"
    );
    assert_eq!(
        SdkError::RateLimit("Number of API requests exceeded".to_string()).to_string(),
        "rate limit exceeded: Number of API requests exceeded"
    );
    assert_eq!(
        SdkError::NotFound("Page not found".to_string()).to_string(),
        "not found: Page not found"
    );
}

#[test]
fn test_operation_error_display() {
    let err = SdkError::Operation {
        operation: Operation::GetClients,
        source: Box::new(SdkError::RateLimit("Number of API requests exceeded".to_string())),
    };
    assert_eq!(
        err.to_string(),
        "GetClients failed: rate limit exceeded: Number of API requests exceeded"
    );
}

// ============================================================================
// Kind and cause
// ============================================================================

#[test]
fn test_from_kind_round_trips_kind() {
    let kinds = [
        ErrorKind::Config,
        ErrorKind::Validation,
        ErrorKind::Transport,
        ErrorKind::Serialization,
        ErrorKind::Auth,
        ErrorKind::RateLimit,
        ErrorKind::NotFound,
    ];
    for kind in kinds {
        assert_eq!(SdkError::from_kind(kind, "x").kind(), kind);
    }
}

#[test]
fn test_wrapped_error_keeps_kind_and_cause() {
    let err = SdkError::Operation {
        operation: Operation::DeleteWebHook,
        source: Box::new(SdkError::NotFound("Page not found".to_string())),
    };

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.operation(), Some(Operation::DeleteWebHook));
    assert!(matches!(err.root_cause(), SdkError::NotFound(_)));
    assert!(err.source().is_some());
}

#[test]
fn test_unwrapped_error_has_no_operation() {
    let err = SdkError::Auth("You need to auth".to_string());
    assert_eq!(err.operation(), None);
    assert!(matches!(err.root_cause(), SdkError::Auth(_)));
}

#[test]
fn test_serde_json_error_converts() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: SdkError = json_err.into();
    assert_eq!(err.kind(), ErrorKind::Serialization);
}

#[test]
fn test_error_kind_names() {
    assert_eq!(ErrorKind::RateLimit.to_string(), "rate_limit");
    assert_eq!(ErrorKind::NotFound.as_str(), "not_found");
}
