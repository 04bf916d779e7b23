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

// src/status.rs
// Connection state and the observable status stream event type.
//
// ConnectionState is owned exclusively by the TelemetryLink; everything
// else only reads it. StatusEvent is what the controller broadcasts to
// UI/log consumers: state transitions plus the recoverable per-sample
// and per-target conditions that never abort the session.

use std::fmt;

// ConnectionState tracks the lifecycle of one broker connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectionState {
    // No connection attempt is active.
    Disconnected,
    // A connect was issued; the ConnAck has not arrived yet.
    Connecting,
    // The broker accepted the session; the topic subscription has
    // been requested.
    Connected,
    // The connection or subscription failed. Carries a human-readable
    // reason (including any broker return code). Terminal for this
    // connection; a new connect() starts from scratch.
    Failed(String),
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => write!(f, "disconnected"),
            Self::Connecting => write!(f, "connecting"),
            Self::Connected => write!(f, "connected"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

// StatusEvent is one entry in the externally observable status stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusEvent {
    // The link's ConnectionState changed.
    Connection(ConnectionState),
    // An inbound payload on `topic` was not a decimal number. The
    // payload is truncated for display; the sample was dropped.
    ParseError { topic: String, payload: String },
    // The target object path resolved to a live scene object.
    TargetResolved { path: String },
    // The target object path did not resolve; samples are skipped
    // until a later resolution succeeds.
    TargetNotFound { path: String },
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connection(state) => write!(f, "connection {state}"),
            Self::ParseError { topic, payload } => {
                write!(f, "unparseable payload {payload:?} on topic {topic}")
            }
            Self::TargetResolved { path } => write!(f, "target resolved: {path}"),
            Self::TargetNotFound { path } => write!(f, "target not found: {path}"),
        }
    }
}
