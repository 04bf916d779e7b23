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

// tests/config.rs
// Unit tests for configuration defaults, YAML loading and validation.

use twinlink::binding::Axis;
use twinlink::config::{BridgeConfig, ConnectionConfig};

#[test]
fn test_connection_defaults() {
    let config = ConnectionConfig::default();
    assert_eq!(config.host, "test.mosquitto.org");
    assert_eq!(config.port, 1883);
    assert_eq!(config.topic, "synctwin/mqtt_demo/forklift/fork_level");
    assert_eq!(config.client_id_prefix, "twinlink");
    config.validate().expect("defaults validate");
}

#[test]
fn test_bridge_defaults() {
    let config = BridgeConfig::default();
    assert_eq!(config.target_path, "/World/Geometry/SM_Forklift_Fork_A01_01");
    assert_eq!(config.axis, Axis::Z);
    config.validate().expect("defaults validate");
}

#[test]
fn test_yaml_with_partial_fields_falls_back_to_defaults() {
    let config = BridgeConfig::from_yaml(
        "connection:\n  host: broker.example.com\n  topic: plant/cell4/lift\naxis: y\n",
    )
    .expect("parses");
    assert_eq!(config.connection.host, "broker.example.com");
    assert_eq!(config.connection.port, 1883);
    assert_eq!(config.connection.topic, "plant/cell4/lift");
    assert_eq!(config.axis, Axis::Y);
    assert_eq!(config.target_path, "/World/Geometry/SM_Forklift_Fork_A01_01");
}

#[test]
fn test_empty_yaml_document_yields_defaults() {
    let config = BridgeConfig::from_yaml("{}").expect("parses");
    assert_eq!(config, BridgeConfig::default());
}

#[test]
fn test_validate_rejects_port_zero() {
    let config = ConnectionConfig {
        port: 0,
        ..ConnectionConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.is_config_error());
}

#[test]
fn test_validate_rejects_empty_host_and_topic() {
    let no_host = ConnectionConfig {
        host: "  ".to_string(),
        ..ConnectionConfig::default()
    };
    assert!(no_host.validate().unwrap_err().is_config_error());

    let no_topic = ConnectionConfig {
        topic: String::new(),
        ..ConnectionConfig::default()
    };
    assert!(no_topic.validate().unwrap_err().is_config_error());
}

#[test]
fn test_validate_rejects_empty_target_path() {
    let config = BridgeConfig {
        target_path: String::new(),
        ..BridgeConfig::default()
    };
    assert!(config.validate().unwrap_err().is_config_error());
}
