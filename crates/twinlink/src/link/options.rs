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

// src/link/options.rs
// Optional tuning parameters for the telemetry link, all with const
// default fallbacks. Separate from ConnectionConfig: these describe
// how the client behaves, not which broker/topic it talks to.

use std::time::Duration;

// DEFAULT_KEEP_ALIVE is the MQTT keep-alive used when none is set.
pub const DEFAULT_KEEP_ALIVE: Duration = Duration::from_secs(30);

// DEFAULT_CHANNEL_CAPACITY bounds the rumqttc request/event queue.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

// LinkOptions are optional parameters for the link; None means the
// const default.
#[derive(Clone, Debug, Default)]
pub struct LinkOptions {
    // keep_alive sets the MQTT keep-alive interval.
    pub keep_alive: Option<Duration>,
    // channel_capacity sets the underlying async client's queue size.
    pub channel_capacity: Option<usize>,
    // credentials are optional username/password credentials for the
    // broker.
    pub credentials: Option<LinkCredentials>,
}

impl LinkOptions {
    pub fn with_keep_alive(mut self, keep_alive: Duration) -> Self {
        self.keep_alive = Some(keep_alive);
        self
    }

    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = Some(capacity);
        self
    }

    pub fn with_credentials(mut self, credentials: LinkCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    // keep_alive_or_default resolves the effective keep-alive.
    pub fn keep_alive_or_default(&self) -> Duration {
        self.keep_alive.unwrap_or(DEFAULT_KEEP_ALIVE)
    }

    // channel_capacity_or_default resolves the effective queue size.
    pub fn channel_capacity_or_default(&self) -> usize {
        self.channel_capacity.unwrap_or(DEFAULT_CHANNEL_CAPACITY)
    }
}

// LinkCredentials are username/password credentials for brokers that
// require authentication.
#[derive(Clone, Debug)]
pub struct LinkCredentials {
    pub username: String,
    pub password: String,
}
