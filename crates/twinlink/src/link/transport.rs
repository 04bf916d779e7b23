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

// src/link/transport.rs
// Transport seam and the rumqttc-backed production implementation.
//
// The Transport trait is the boundary the tests fake out: start a
// connection that reports everything through the provided gate, return
// a handle that can tear it down. MqttTransport drives a rumqttc
// AsyncClient event loop on a spawned task.
//
// Retry policy: none. A connect failure or broker-side drop is
// reported once as Failed and the loop exits. Auto-reconnect with
// backoff is a deliberate extension point, not a default.

use std::sync::Arc;

use rand::Rng;
use rumqttc::{
    AsyncClient, ConnectReturnCode, Event, EventLoop, MqttOptions, Packet, QoS,
    SubscribeReasonCode,
};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::config::ConnectionConfig;
use crate::errors::TwinLinkError;
use crate::link::gate::DeliveryGate;
use crate::link::options::LinkOptions;
use crate::status::ConnectionState;

// Transport starts a broker connection that delivers through `gate`.
// Implementations must return promptly; connection establishment is
// asynchronous and reported via gate state transitions.
pub trait Transport: Send + Sync {
    fn start(
        &self,
        config: &ConnectionConfig,
        options: &LinkOptions,
        gate: Arc<DeliveryGate>,
    ) -> Result<TransportHandle, TwinLinkError>;
}

// TransportHandle owns one running connection's task. shutdown cancels
// the task and waits for it to finish, so no I/O survives the call.
pub struct TransportHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl TransportHandle {
    pub fn new(cancel: CancellationToken, task: JoinHandle<()>) -> Self {
        Self { cancel, task }
    }

    // shutdown terminates the connection task and awaits it. Join
    // errors other than panics only happen at runtime teardown.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        if let Err(err) = self.task.await {
            if err.is_panic() {
                error!(%err, "transport task panicked");
            }
        }
    }
}

// MqttTransport is the production transport: rumqttc over TCP with a
// randomized client id.
#[derive(Debug, Default)]
pub struct MqttTransport;

impl Transport for MqttTransport {
    fn start(
        &self,
        config: &ConnectionConfig,
        options: &LinkOptions,
        gate: Arc<DeliveryGate>,
    ) -> Result<TransportHandle, TwinLinkError> {
        // Random suffix so several bridge instances against the same
        // broker never collide on client id.
        let client_id = format!(
            "{}-{:04}",
            config.client_id_prefix,
            rand::rng().random_range(0..10_000u32)
        );
        let mut mqtt_options = MqttOptions::new(client_id, config.host.clone(), config.port);
        mqtt_options.set_keep_alive(options.keep_alive_or_default());
        if let Some(credentials) = &options.credentials {
            mqtt_options.set_credentials(
                credentials.username.clone(),
                credentials.password.clone(),
            );
        }

        let (client, event_loop) =
            AsyncClient::new(mqtt_options, options.channel_capacity_or_default());
        gate.transition(ConnectionState::Connecting);

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let topic = config.topic.clone();
        let task = tokio::spawn(async move {
            poll_loop(client, event_loop, topic, gate, token).await;
        });
        Ok(TransportHandle::new(cancel, task))
    }
}

// poll_loop drives the rumqttc event loop until cancellation or a
// fatal connection error. Runs on its own tokio task; everything it
// reports goes through the gate, which drops it all once the
// connection is superseded.
async fn poll_loop(
    client: AsyncClient,
    mut event_loop: EventLoop,
    topic: String,
    gate: Arc<DeliveryGate>,
    cancel: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                let _ = client.disconnect().await;
                debug!("transport task cancelled");
                break;
            }
            event = event_loop.poll() => match event {
                Ok(Event::Incoming(Packet::ConnAck(ack))) => {
                    if ack.code == ConnectReturnCode::Success {
                        info!("connected to broker");
                        gate.transition(ConnectionState::Connected);
                        // Subscription failure here is a request-queue
                        // failure; broker rejection arrives as SubAck.
                        if let Err(err) = client.subscribe(topic.clone(), QoS::AtMostOnce).await {
                            warn!(%err, topic, "subscribe request failed");
                            gate.transition(ConnectionState::Failed(format!(
                                "subscribe error: {err}"
                            )));
                        }
                    } else {
                        gate.transition(ConnectionState::Failed(format!(
                            "broker refused connection: {:?}",
                            ack.code
                        )));
                        break;
                    }
                }
                Ok(Event::Incoming(Packet::SubAck(ack))) => {
                    if ack
                        .return_codes
                        .iter()
                        .any(|code| matches!(code, SubscribeReasonCode::Failure))
                    {
                        // The transport stays up; only the subscription
                        // is dead, and that is reported, not retried.
                        warn!(topic, "broker rejected subscription");
                        gate.transition(ConnectionState::Failed(format!(
                            "subscribe error: broker rejected topic {topic}"
                        )));
                    } else {
                        debug!(topic, "subscription acknowledged");
                    }
                }
                Ok(Event::Incoming(Packet::Publish(publish))) => {
                    gate.deliver_payload(&publish.topic, &publish.payload);
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(%err, "connection lost");
                    gate.transition(ConnectionState::Failed(err.to_string()));
                    break;
                }
            }
        }
    }
}
