// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Tests for response sentinel classification.

use chat2desk_sdk::{
    AUTH_REQUIRED_SENTINEL, ErrorKind, MONTHLY_QUOTA_SENTINEL, PAGE_NOT_FOUND_SENTINEL,
    REQUEST_RATE_SENTINEL, SdkError, SentinelTable, TOKEN_MISSING_SENTINEL,
};
use serde_json::{Value, json};

#[test]
fn test_clean_bodies_pass_unchanged() {
    let table = SentinelTable::default();
    let bodies = [
        json!({"status": "success", "data": [{"id": 1}]}),
        json!([]),
        json!("ok"),
        Value::Null,
        json!(42),
    ];

    for body in bodies {
        assert_eq!(table.validate(body.clone()).unwrap(), body);
    }
}

#[test]
fn test_each_default_sentinel_maps_to_kind() {
    let table = SentinelTable::default();
    let cases = [
        (TOKEN_MISSING_SENTINEL, ErrorKind::Auth),
        (AUTH_REQUIRED_SENTINEL, ErrorKind::Auth),
        (REQUEST_RATE_SENTINEL, ErrorKind::RateLimit),
        (MONTHLY_QUOTA_SENTINEL, ErrorKind::RateLimit),
        (PAGE_NOT_FOUND_SENTINEL, ErrorKind::NotFound),
    ];

    for (text, kind) in cases {
        let err = table
            .validate(json!({"status": "error", "message": text}))
            .unwrap_err();
        assert_eq!(err.kind(), kind, "{}", text);
        assert!(err.to_string().contains(text));
    }
}

#[test]
fn test_plain_text_body_matches() {
    let err = SentinelTable::default()
        .validate(json!("Page not found"))
        .unwrap_err();
    assert!(matches!(err, SdkError::NotFound(_)));
}

#[test]
fn test_substring_match_inside_longer_text() {
    let body = json!({"message": "Error: You need to auth before calling this method"});
    let err = SentinelTable::default().validate(body).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Auth);
}

#[test]
fn test_matching_is_case_sensitive() {
    let body = json!({"message": "page not found"});
    assert!(SentinelTable::default().validate(body).is_ok());
}

#[test]
fn test_table_order_breaks_ties() {
    let body = json!({
        "a": "Number of API requests exceeded",
        "b": "You need to auth",
    });
    let err = SentinelTable::default().validate(body).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Auth);
}
