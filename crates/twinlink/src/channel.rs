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

// src/channel.rs
// Single-slot latest-value channel between the network task and the
// tick consumer.
//
// Depth is bounded to exactly one sample with overwrite: the bridge
// always prefers freshness over completeness, so samples that arrive
// faster than the consumer ticks are silently replaced. The mutex
// guards the slot and the fresh flag together, which makes write and
// read_and_clear atomic from each other's perspective.

use std::sync::Mutex;

use crate::sample::TelemetrySample;

#[derive(Debug, Default)]
struct Slot {
    sample: Option<TelemetrySample>,
    fresh: bool,
}

// ValueChannel holds the latest known telemetry sample plus a fresh
// flag. Writable from any thread; intended for a single consumer
// calling read_and_clear once per tick.
#[derive(Debug, Default)]
pub struct ValueChannel {
    slot: Mutex<Slot>,
}

impl ValueChannel {
    pub fn new() -> Self {
        Self::default()
    }

    // write overwrites the slot unconditionally and marks it fresh.
    // An undelivered previous sample is dropped, newest-value-wins.
    pub fn write(&self, sample: TelemetrySample) {
        let mut slot = self.slot.lock().unwrap();
        slot.sample = Some(sample);
        slot.fresh = true;
    }

    // read_and_clear returns the current sample and clears the fresh
    // flag in one atomic step, or None when nothing new arrived since
    // the last call.
    pub fn read_and_clear(&self) -> Option<TelemetrySample> {
        let mut slot = self.slot.lock().unwrap();
        if slot.fresh {
            slot.fresh = false;
            slot.sample.clone()
        } else {
            None
        }
    }

    // latest peeks at the most recent sample without consuming its
    // freshness, for display surfaces that poll the current value.
    pub fn latest(&self) -> Option<TelemetrySample> {
        self.slot.lock().unwrap().sample.clone()
    }

    // is_fresh reports whether a write happened since the last
    // read_and_clear.
    pub fn is_fresh(&self) -> bool {
        self.slot.lock().unwrap().fresh
    }
}
