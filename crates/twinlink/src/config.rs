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

// src/config.rs
// Bridge configuration: broker connection parameters and the scene
// target binding. Loadable from YAML; every field has a default so a
// bare `{}` document (or Default::default()) yields the demo setup.
//
// A ConnectionConfig is immutable once a connect attempt starts; to
// change any field, disconnect and connect with a new config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::binding::Axis;
use crate::errors::TwinLinkError;

fn default_host() -> String {
    "test.mosquitto.org".to_string()
}

fn default_port() -> u16 {
    1883
}

fn default_topic() -> String {
    "synctwin/mqtt_demo/forklift/fork_level".to_string()
}

fn default_client_id_prefix() -> String {
    "twinlink".to_string()
}

fn default_target_path() -> String {
    "/World/Geometry/SM_Forklift_Fork_A01_01".to_string()
}

// The original digital-twin demo drives the vertical axis of the
// forklift fork.
fn default_axis() -> Axis {
    Axis::Z
}

// ConnectionConfig describes one broker connection and the single
// topic subscription it carries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    // host is the broker hostname or address.
    #[serde(default = "default_host")]
    pub host: String,
    // port is the broker TCP port. Zero is rejected by validate().
    #[serde(default = "default_port")]
    pub port: u16,
    // topic is the single topic filter to subscribe to.
    #[serde(default = "default_topic")]
    pub topic: String,
    // client_id_prefix is prefixed to a random numeric suffix to form
    // the MQTT client id, avoiding broker-side id collisions between
    // bridge instances.
    #[serde(default = "default_client_id_prefix")]
    pub client_id_prefix: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            topic: default_topic(),
            client_id_prefix: default_client_id_prefix(),
        }
    }
}

impl ConnectionConfig {
    // validate rejects values that could never produce a working
    // connection, before any network activity happens.
    pub fn validate(&self) -> Result<(), TwinLinkError> {
        if self.host.trim().is_empty() {
            return Err(TwinLinkError::InvalidConfig("host must not be empty".into()));
        }
        if self.port == 0 {
            return Err(TwinLinkError::InvalidConfig(
                "port must be in range 1-65535".into(),
            ));
        }
        if self.topic.trim().is_empty() {
            return Err(TwinLinkError::InvalidConfig(
                "topic must not be empty".into(),
            ));
        }
        if self.client_id_prefix.trim().is_empty() {
            return Err(TwinLinkError::InvalidConfig(
                "client_id_prefix must not be empty".into(),
            ));
        }
        Ok(())
    }
}

// BridgeConfig is the full controller configuration: where telemetry
// comes from and which object property it drives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    // connection is the broker connection to establish on start().
    #[serde(default)]
    pub connection: ConnectionConfig,
    // target_path identifies the scene object whose translation is
    // driven by the telemetry value.
    #[serde(default = "default_target_path")]
    pub target_path: String,
    // axis selects which translation component receives the value.
    #[serde(default = "default_axis")]
    pub axis: Axis,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            connection: ConnectionConfig::default(),
            target_path: default_target_path(),
            axis: default_axis(),
        }
    }
}

impl BridgeConfig {
    // from_yaml parses a config from a YAML document; missing fields
    // fall back to their defaults.
    pub fn from_yaml(text: &str) -> Result<Self, TwinLinkError> {
        Ok(serde_yaml::from_str(text)?)
    }

    // from_yaml_file loads and parses a YAML config file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, TwinLinkError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    // validate checks the connection parameters and the target path.
    pub fn validate(&self) -> Result<(), TwinLinkError> {
        self.connection.validate()?;
        if self.target_path.trim().is_empty() {
            return Err(TwinLinkError::InvalidConfig(
                "target_path must not be empty".into(),
            ));
        }
        Ok(())
    }
}
