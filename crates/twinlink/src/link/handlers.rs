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

// src/link/handlers.rs
// Callback registration storage for the telemetry link.
//
// Handlers execute on the network I/O task and must not block: the
// intended sample handler is a ValueChannel write and the intended
// status handler a channel send, both cheap and lock-light.

use std::sync::RwLock;

use crate::sample::TelemetrySample;
use crate::status::StatusEvent;

// SampleHandler receives every successfully parsed inbound sample.
pub type SampleHandler = Box<dyn Fn(TelemetrySample) + Send + Sync>;

// StatusHandler receives connection-state transitions and recoverable
// per-sample error events.
pub type StatusHandler = Box<dyn Fn(StatusEvent) + Send + Sync>;

// LinkSinks holds the registered handlers. Shared between the link
// (registration side) and every connection's delivery gate (emit
// side); registration after connect is allowed and takes effect for
// subsequent deliveries.
#[derive(Default)]
pub(crate) struct LinkSinks {
    samples: RwLock<Vec<SampleHandler>>,
    statuses: RwLock<Vec<StatusHandler>>,
}

impl LinkSinks {
    pub(crate) fn add_sample_handler(&self, handler: SampleHandler) {
        self.samples.write().unwrap().push(handler);
    }

    pub(crate) fn add_status_handler(&self, handler: StatusHandler) {
        self.statuses.write().unwrap().push(handler);
    }

    // emit_sample fans a parsed sample out to every registered handler.
    pub(crate) fn emit_sample(&self, sample: TelemetrySample) {
        for handler in self.samples.read().unwrap().iter() {
            handler(sample.clone());
        }
    }

    // emit_status fans a status event out to every registered handler.
    pub(crate) fn emit_status(&self, event: StatusEvent) {
        for handler in self.statuses.read().unwrap().iter() {
            handler(event.clone());
        }
    }
}
