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

// tests/common/mod.rs
// Shared test doubles: an in-memory scene graph with weak-handle
// semantics and a fake transport that exposes each connection's
// delivery gate so tests can inject payloads and late callbacks.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tokio_util::sync::CancellationToken;
use twinlink::binding::{Axis, SceneGraph, SceneHandle};
use twinlink::config::ConnectionConfig;
use twinlink::errors::TwinLinkError;
use twinlink::link::{DeliveryGate, LinkOptions, Transport, TransportHandle};
use twinlink::status::ConnectionState;

#[derive(Default)]
struct SceneInner {
    next_id: u64,
    // path -> currently live handle id
    objects: HashMap<String, u64>,
    // path -> translation vector
    translations: HashMap<String, [f64; 3]>,
    // live handle id -> path; reload clears this, staling old handles
    live: HashMap<u64, String>,
    write_count: usize,
}

// FakeSceneGraph is an in-memory scene with explicit reload semantics:
// reload re-mints every handle id and resets translations to the
// authored (zero) transform, so stale handles are detectable.
#[derive(Default)]
pub struct FakeSceneGraph {
    inner: Mutex<SceneInner>,
}

impl FakeSceneGraph {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_object(path: &str) -> Arc<Self> {
        let scene = Self::new();
        scene.add_object(path);
        scene
    }

    pub fn add_object(&self, path: &str) {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.objects.insert(path.to_string(), id);
        inner.translations.insert(path.to_string(), [0.0; 3]);
        inner.live.insert(id, path.to_string());
    }

    pub fn remove_object(&self, path: &str) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(id) = inner.objects.remove(path) {
            inner.live.remove(&id);
        }
        inner.translations.remove(path);
    }

    // reload simulates the host replacing the scene: every previously
    // handed-out handle goes stale and translations return to their
    // authored values.
    pub fn reload(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.live.clear();
        let paths: Vec<String> = inner.objects.keys().cloned().collect();
        for path in paths {
            inner.next_id += 1;
            let id = inner.next_id;
            inner.objects.insert(path.clone(), id);
            inner.translations.insert(path.clone(), [0.0; 3]);
            inner.live.insert(id, path);
        }
    }

    pub fn translation(&self, path: &str) -> Option<[f64; 3]> {
        self.inner.lock().unwrap().translations.get(path).copied()
    }

    // write_count counts set_translation calls that reached an object,
    // for asserting that redundant writes are skipped.
    pub fn write_count(&self) -> usize {
        self.inner.lock().unwrap().write_count
    }
}

impl SceneGraph for FakeSceneGraph {
    fn find_object_by_path(&self, path: &str) -> Option<SceneHandle> {
        let inner = self.inner.lock().unwrap();
        inner.objects.get(path).map(|id| SceneHandle::new(*id))
    }

    fn set_translation(
        &self,
        handle: &SceneHandle,
        axis: Axis,
        value: f64,
    ) -> Result<(), TwinLinkError> {
        let mut inner = self.inner.lock().unwrap();
        let Some(path) = inner.live.get(&handle.id()).cloned() else {
            return Err(TwinLinkError::StaleHandle(format!("#{}", handle.id())));
        };
        if let Some(translation) = inner.translations.get_mut(&path) {
            translation[axis.index()] = value;
        }
        inner.write_count += 1;
        Ok(())
    }
}

// FakeTransport connects instantly and keeps every connection's gate
// around so tests can publish payloads, simulate broker-side events
// and exercise late deliveries after teardown.
#[derive(Default)]
pub struct FakeTransport {
    gates: Mutex<Vec<Arc<DeliveryGate>>>,
    refuse_connection: AtomicBool,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    // refuse makes subsequent connections fail like a broker ConnAck
    // refusal.
    pub fn refuse(&self) {
        self.refuse_connection.store(true, Ordering::SeqCst);
    }

    // connections returns how many times start() was called.
    pub fn connections(&self) -> usize {
        self.gates.lock().unwrap().len()
    }

    // gate returns the delivery gate of connection `index`.
    pub fn gate(&self, index: usize) -> Arc<DeliveryGate> {
        self.gates.lock().unwrap()[index].clone()
    }

    pub fn latest_gate(&self) -> Arc<DeliveryGate> {
        self.gates
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no connection was started")
    }

    // publish injects an inbound message on the latest connection.
    pub fn publish(&self, topic: &str, payload: &[u8]) {
        self.latest_gate().deliver_payload(topic, payload);
    }
}

impl Transport for FakeTransport {
    fn start(
        &self,
        _config: &ConnectionConfig,
        _options: &LinkOptions,
        gate: Arc<DeliveryGate>,
    ) -> Result<TransportHandle, TwinLinkError> {
        gate.transition(ConnectionState::Connecting);
        if self.refuse_connection.load(Ordering::SeqCst) {
            gate.transition(ConnectionState::Failed(
                "broker refused connection: BadClientId".to_string(),
            ));
        } else {
            gate.transition(ConnectionState::Connected);
        }
        self.gates.lock().unwrap().push(gate);

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let task = tokio::spawn(async move {
            token.cancelled().await;
        });
        Ok(TransportHandle::new(cancel, task))
    }
}
