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

// src/link/gate.rs
// Per-connection delivery gate.
//
// Every connection gets its own gate; the transport delivers payloads
// and state transitions through it. Closing the gate revokes it
// permanently, so a late callback from a superseded or torn-down
// connection dies here instead of writing into a ValueChannel that a
// newer connection now feeds. The gate is the connection token the
// concurrency model requires.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, trace, warn};

use crate::link::handlers::LinkSinks;
use crate::sample::{TelemetrySample, display_payload, parse_payload};
use crate::status::{ConnectionState, StatusEvent};

// DeliveryGate carries one connection's state and forwards its
// deliveries to the link's registered handlers until revoked.
pub struct DeliveryGate {
    sinks: Arc<LinkSinks>,
    revoked: AtomicBool,
    state: Mutex<ConnectionState>,
}

impl DeliveryGate {
    pub(crate) fn new(sinks: Arc<LinkSinks>) -> Self {
        Self {
            sinks,
            revoked: AtomicBool::new(false),
            state: Mutex::new(ConnectionState::Disconnected),
        }
    }

    // state returns this connection's current state. A revoked gate
    // reads Disconnected.
    pub fn state(&self) -> ConnectionState {
        self.state.lock().unwrap().clone()
    }

    pub fn is_revoked(&self) -> bool {
        self.revoked.load(Ordering::Acquire)
    }

    // transition records a connection-state change and reports it via
    // the status handlers. Dropped silently once the gate is revoked.
    pub fn transition(&self, next: ConnectionState) {
        if self.is_revoked() {
            trace!(state = %next, "dropping state transition from revoked connection");
            return;
        }
        debug!(state = %next, "connection state changed");
        *self.state.lock().unwrap() = next.clone();
        self.sinks.emit_status(StatusEvent::Connection(next));
    }

    // deliver_payload decodes one inbound publish. Parse failures are
    // reported as a ParseError status event and dropped without
    // touching any previously delivered value; they never tear the
    // connection down. Dropped silently once the gate is revoked.
    pub fn deliver_payload(&self, topic: &str, payload: &[u8]) {
        if self.is_revoked() {
            trace!(topic, "dropping payload from revoked connection");
            return;
        }
        match parse_payload(payload) {
            Ok(value) => {
                trace!(topic, value, "received sample");
                self.sinks.emit_sample(TelemetrySample::now(value));
            }
            Err(err) => {
                warn!(topic, %err, "dropping unparseable payload");
                self.sinks.emit_status(StatusEvent::ParseError {
                    topic: topic.to_string(),
                    payload: display_payload(payload),
                });
            }
        }
    }

    // close revokes the gate and emits a final Disconnected exactly
    // once. After close returns, no further sample or status reaches
    // the handlers through this gate.
    pub fn close(&self) {
        if self.revoked.swap(true, Ordering::AcqRel) {
            return;
        }
        *self.state.lock().unwrap() = ConnectionState::Disconnected;
        self.sinks.emit_status(StatusEvent::Connection(ConnectionState::Disconnected));
    }
}
