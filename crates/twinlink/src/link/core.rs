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

// src/link/core.rs
// TelemetryLink: subscription-managed MQTT connection lifecycle.
//
// Owns at most one live connection at a time. connect() while a
// connection is active tears the old one down first -- its gate is
// revoked before the new connection starts, so a duplicate live
// socket or a cross-connection late delivery cannot happen.
//
// The link knows nothing about the scene graph; it only feeds the
// handlers registered via on_sample/on_status.

use std::sync::{Arc, RwLock};

use tracing::info;

use crate::config::ConnectionConfig;
use crate::errors::TwinLinkError;
use crate::link::gate::DeliveryGate;
use crate::link::handlers::LinkSinks;
use crate::link::options::LinkOptions;
use crate::link::transport::{MqttTransport, Transport, TransportHandle};
use crate::sample::TelemetrySample;
use crate::status::{ConnectionState, StatusEvent};

// TelemetryLink manages connect/subscribe/disconnect against one
// broker and delivers inbound samples to registered handlers from its
// own I/O task.
pub struct TelemetryLink {
    transport: Arc<dyn Transport>,
    options: LinkOptions,
    sinks: Arc<LinkSinks>,
    // gate of the currently active connection; swapped under the lock
    // so state() stays cheap and synchronous.
    gate: RwLock<Option<Arc<DeliveryGate>>>,
    // handle of the currently active connection's transport task.
    handle: tokio::sync::Mutex<Option<TransportHandle>>,
}

impl TelemetryLink {
    // new creates a disconnected link over the given transport.
    pub fn new(transport: Arc<dyn Transport>, options: LinkOptions) -> Self {
        Self {
            transport,
            options,
            sinks: Arc::new(LinkSinks::default()),
            gate: RwLock::new(None),
            handle: tokio::sync::Mutex::new(None),
        }
    }

    // mqtt creates a link over the production rumqttc transport.
    pub fn mqtt(options: LinkOptions) -> Self {
        Self::new(Arc::new(MqttTransport), options)
    }

    // on_sample registers a handler for every successfully parsed
    // inbound sample. Runs on the I/O task; must not block.
    pub fn on_sample(&self, handler: impl Fn(TelemetrySample) + Send + Sync + 'static) {
        self.sinks.add_sample_handler(Box::new(handler));
    }

    // on_status registers a handler for state transitions and
    // recoverable error events. Runs on the I/O task; must not block.
    pub fn on_status(&self, handler: impl Fn(StatusEvent) + Send + Sync + 'static) {
        self.sinks.add_status_handler(Box::new(handler));
    }

    // connect validates the config and starts a connection. Any prior
    // connection is torn down first. Returns once the transport task
    // is running; establishment itself is reported asynchronously
    // through status transitions (Connecting, then Connected or
    // Failed).
    pub async fn connect(&self, config: &ConnectionConfig) -> Result<(), TwinLinkError> {
        config.validate()?;
        self.disconnect().await;

        info!(host = %config.host, port = config.port, topic = %config.topic, "connecting");
        let gate = Arc::new(DeliveryGate::new(self.sinks.clone()));
        let handle = self.transport.start(config, &self.options, gate.clone())?;

        *self.gate.write().unwrap() = Some(gate);
        *self.handle.lock().await = Some(handle);
        Ok(())
    }

    // disconnect tears down the active connection: the gate is revoked
    // first, so once this returns no further sample or status from
    // that connection can reach the handlers, then the transport task
    // is cancelled and awaited. Idempotent; a no-op when already
    // disconnected.
    pub async fn disconnect(&self) {
        let gate = self.gate.write().unwrap().take();
        if let Some(gate) = gate {
            gate.close();
        }
        let handle = self.handle.lock().await.take();
        if let Some(handle) = handle {
            handle.shutdown().await;
            info!("disconnected");
        }
    }

    // state returns the active connection's state, Disconnected when
    // none is active.
    pub fn state(&self) -> ConnectionState {
        self.gate
            .read()
            .unwrap()
            .as_ref()
            .map(|gate| gate.state())
            .unwrap_or(ConnectionState::Disconnected)
    }
}
