/*
 * SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

// tests/errors.rs
// Unit tests for error categorization and display text.

use twinlink::errors::TwinLinkError;

#[test]
fn test_connection_error_category() {
    let error = TwinLinkError::connect_error("connection refused");
    assert!(error.is_connect_error());
    assert!(!error.is_subscribe_error());
    assert!(!error.is_parse_error());
    assert!(!error.is_target_error());
    assert_eq!(error.to_string(), "connection error: connection refused");
}

#[test]
fn test_refused_connection_category() {
    let error = TwinLinkError::ConnectionRefused("BadClientId".to_string());
    assert!(error.is_connect_error());
    assert!(error.to_string().contains("refused"));
}

#[test]
fn test_subscribe_error_category() {
    let error = TwinLinkError::subscribe_error("broker rejected topic t1");
    assert!(error.is_subscribe_error());
    assert!(!error.is_connect_error());
    assert_eq!(error.to_string(), "subscribe error: broker rejected topic t1");
}

#[test]
fn test_parse_error_category_and_display() {
    let error = TwinLinkError::PayloadParse {
        payload: "not_a_number".to_string(),
        reason: "invalid float literal".to_string(),
    };
    assert!(error.is_parse_error());
    assert!(!error.is_target_error());
    assert!(error.to_string().contains("not_a_number"));
    assert!(error.to_string().contains("invalid float literal"));
}

#[test]
fn test_target_error_covers_both_resolution_failures() {
    let not_found = TwinLinkError::TargetNotFound("/World/Missing".to_string());
    let stale = TwinLinkError::StaleHandle("#42".to_string());
    assert!(not_found.is_target_error());
    assert!(stale.is_target_error());
    assert!(!not_found.is_config_error());
    assert_eq!(
        not_found.to_string(),
        "target object not found: /World/Missing"
    );
    assert_eq!(stale.to_string(), "stale scene handle for #42");
}

#[test]
fn test_config_error_category() {
    let error = TwinLinkError::InvalidConfig("port must be in range 1-65535".to_string());
    assert!(error.is_config_error());
    assert!(!error.is_connect_error());
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let error = TwinLinkError::from(io);
    match error {
        TwinLinkError::Io(_) => {}
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn test_yaml_error_conversion() {
    let yaml = serde_yaml::from_str::<i32>("{ invalid: yaml: }}}").unwrap_err();
    let error = TwinLinkError::from(yaml);
    match error {
        TwinLinkError::Yaml(_) => {}
        other => panic!("expected Yaml, got {other:?}"),
    }
}
