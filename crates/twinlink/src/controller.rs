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

// src/controller.rs
// Controller: the one component the host shell talks to.
//
// Owns the link, the value channel and the twin binding, and wires
// them together at construction: link samples land in the channel,
// link status lands in the broadcast stream. The host drives tick()
// once per frame; everything else (start/stop/reload) is driven by
// host lifecycle events.
//
// tick() is synchronous and non-blocking. start() and stop() are
// async (they wait for transport teardown) and must be driven from a
// context that tolerates blocking, never the tick path.

use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;
use tracing::{trace, warn};

use crate::binding::{ApplyOutcome, SceneGraph, TwinBinding};
use crate::channel::ValueChannel;
use crate::config::BridgeConfig;
use crate::errors::TwinLinkError;
use crate::link::{LinkOptions, MqttTransport, TelemetryLink, Transport};
use crate::sample::TelemetrySample;
use crate::status::{ConnectionState, StatusEvent};

// STATUS_CHANNEL_CAPACITY bounds the status broadcast queue. Lagging
// consumers lose the oldest events, which is acceptable for status
// text.
const STATUS_CHANNEL_CAPACITY: usize = 32;

// ControllerState is the coarse session state; the link's own
// ConnectionState is exposed separately through connection_state().
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Running,
}

// Controller orchestrates link, channel and binding for one bridge
// session.
pub struct Controller {
    link: TelemetryLink,
    channel: Arc<ValueChannel>,
    scene: Arc<dyn SceneGraph>,
    binding: Mutex<Option<TwinBinding>>,
    state: Mutex<ControllerState>,
    status_tx: broadcast::Sender<StatusEvent>,
}

impl Controller {
    // new wires a controller over the given transport. Link samples
    // are routed into the value channel and link status into the
    // broadcast stream before any connection exists.
    pub fn new(
        scene: Arc<dyn SceneGraph>,
        transport: Arc<dyn Transport>,
        options: LinkOptions,
    ) -> Self {
        let (status_tx, _) = broadcast::channel(STATUS_CHANNEL_CAPACITY);
        let channel = Arc::new(ValueChannel::new());
        let link = TelemetryLink::new(transport, options);

        let sink = channel.clone();
        link.on_sample(move |sample| sink.write(sample));
        let forward = status_tx.clone();
        link.on_status(move |event| {
            let _ = forward.send(event);
        });

        Self {
            link,
            channel,
            scene,
            binding: Mutex::new(None),
            state: Mutex::new(ControllerState::Idle),
            status_tx,
        }
    }

    // mqtt builds a controller over the production rumqttc transport.
    pub fn mqtt(scene: Arc<dyn SceneGraph>, options: LinkOptions) -> Self {
        Self::new(scene, Arc::new(MqttTransport), options)
    }

    // start resolves the target binding and connects the link. A
    // resolve failure is reported as TargetNotFound status and does
    // not prevent the connection: samples are dropped until a scene
    // reload resolves the target. A running session is torn down
    // first.
    pub async fn start(&self, config: &BridgeConfig) -> Result<(), TwinLinkError> {
        config.validate()?;
        self.stop().await;

        let mut binding =
            TwinBinding::new(self.scene.clone(), config.target_path.clone(), config.axis);
        match binding.resolve() {
            Ok(()) => self.emit(StatusEvent::TargetResolved {
                path: binding.path().to_string(),
            }),
            Err(err) => {
                warn!(%err, "target not resolved at start");
                self.emit(StatusEvent::TargetNotFound {
                    path: binding.path().to_string(),
                });
            }
        }
        *self.binding.lock().unwrap() = Some(binding);

        self.link.connect(&config.connection).await?;
        *self.state.lock().unwrap() = ControllerState::Running;
        Ok(())
    }

    // tick consumes at most one fresh sample and applies it to the
    // target. Called once per host frame; cheap and non-blocking.
    // Apply failures (stale handle) are surfaced as status and
    // swallowed; the binding re-resolves on the next scene reload.
    pub fn tick(&self) {
        if !self.is_running() {
            return;
        }
        let Some(sample) = self.channel.read_and_clear() else {
            return;
        };
        let mut guard = self.binding.lock().unwrap();
        let Some(binding) = guard.as_mut() else {
            return;
        };
        match binding.apply(sample.value) {
            Ok(ApplyOutcome::Applied) => trace!(value = sample.value, "applied sample"),
            Ok(ApplyOutcome::Unchanged) => trace!(value = sample.value, "value unchanged"),
            Ok(ApplyOutcome::Unresolved) => trace!("binding unresolved, sample dropped"),
            Err(err) => {
                warn!(%err, "failed to apply sample");
                self.emit(StatusEvent::TargetNotFound {
                    path: binding.path().to_string(),
                });
            }
        }
    }

    // on_scene_reloaded re-resolves the target against the replaced
    // scene. Wired to the host's scene-lifecycle event by the shell.
    pub fn on_scene_reloaded(&self) {
        let mut guard = self.binding.lock().unwrap();
        let Some(binding) = guard.as_mut() else {
            return;
        };
        binding.invalidate();
        match binding.resolve() {
            Ok(()) => self.emit(StatusEvent::TargetResolved {
                path: binding.path().to_string(),
            }),
            Err(err) => {
                warn!(%err, "target not resolved after scene reload");
                self.emit(StatusEvent::TargetNotFound {
                    path: binding.path().to_string(),
                });
            }
        }
    }

    // stop disconnects the link and releases the binding. Safe to
    // call repeatedly and while already idle.
    pub async fn stop(&self) {
        self.link.disconnect().await;
        *self.binding.lock().unwrap() = None;
        *self.state.lock().unwrap() = ControllerState::Idle;
    }

    // subscribe_status returns a receiver on the observable status
    // stream.
    pub fn subscribe_status(&self) -> broadcast::Receiver<StatusEvent> {
        self.status_tx.subscribe()
    }

    // connection_state exposes the link's state transparently.
    pub fn connection_state(&self) -> ConnectionState {
        self.link.state()
    }

    // latest_value peeks at the most recent sample without consuming
    // it, for value display surfaces.
    pub fn latest_value(&self) -> Option<TelemetrySample> {
        self.channel.latest()
    }

    pub fn is_running(&self) -> bool {
        *self.state.lock().unwrap() == ControllerState::Running
    }

    fn emit(&self, event: StatusEvent) {
        let _ = self.status_tx.send(event);
    }
}
