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

// src/errors.rs
// Error types for the twinlink bridge.
//
// A single crate-level error enum covers both connection-time failures
// (broker unreachable, subscription rejected) and the recoverable
// per-sample failures (unparseable payload, unresolved scene target).
// None of these are fatal to the hosting process; the category
// predicates let callers decide what to surface and what to drop.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TwinLinkError {
    // Connection establishment failed at the transport level
    // (unreachable host, refused connection, timeout).
    #[error("connection error: {0}")]
    Connection(String),

    // The broker accepted the TCP connection but refused the MQTT
    // session in its ConnAck (bad client id, not authorized, ...).
    #[error("broker refused connection: {0}")]
    ConnectionRefused(String),

    // The broker rejected the topic subscription.
    #[error("subscribe error: {0}")]
    Subscribe(String),

    // An inbound payload was not a UTF-8 decimal number. The sample
    // is dropped; the link stays up.
    #[error("unparseable payload {payload:?}: {reason}")]
    PayloadParse { payload: String, reason: String },

    // The target object path could not be resolved in the scene graph.
    #[error("target object not found: {0}")]
    TargetNotFound(String),

    // A previously resolved scene handle no longer refers to a live
    // object (the scene was reloaded or the object removed).
    #[error("stale scene handle for {0}")]
    StaleHandle(String),

    // A configuration value failed validation before any connection
    // attempt was made.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    // The rumqttc request channel failed (client side, not broker side).
    #[error("mqtt client error: {0}")]
    Client(#[from] rumqttc::ClientError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serde_yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl TwinLinkError {
    // connect_error builds a Connection error from any displayable cause.
    pub fn connect_error(reason: impl std::fmt::Display) -> Self {
        Self::Connection(reason.to_string())
    }

    // subscribe_error builds a Subscribe error from any displayable cause.
    pub fn subscribe_error(reason: impl std::fmt::Display) -> Self {
        Self::Subscribe(reason.to_string())
    }

    // is_connect_error returns true for failures that prevented a
    // session from being established.
    pub fn is_connect_error(&self) -> bool {
        matches!(
            self,
            Self::Connection(_) | Self::ConnectionRefused(_) | Self::Client(_)
        )
    }

    // is_subscribe_error returns true when the broker rejected the
    // topic subscription.
    pub fn is_subscribe_error(&self) -> bool {
        matches!(self, Self::Subscribe(_))
    }

    // is_parse_error returns true for per-sample payload failures.
    // These are always recovered locally by dropping the sample.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::PayloadParse { .. })
    }

    // is_target_error returns true for scene-side resolution failures,
    // both the never-resolved and the went-stale case.
    pub fn is_target_error(&self) -> bool {
        matches!(self, Self::TargetNotFound(_) | Self::StaleHandle(_))
    }

    // is_config_error returns true when a config value failed validation.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig(_))
    }
}
