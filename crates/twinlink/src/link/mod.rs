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

// src/link/mod.rs
// Link module exports.

mod core;
mod gate;
mod handlers;
mod options;
mod transport;

pub use core::TelemetryLink;

pub use gate::DeliveryGate;
pub use handlers::{SampleHandler, StatusHandler};
pub use options::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_KEEP_ALIVE, LinkCredentials, LinkOptions};
pub use transport::{MqttTransport, Transport, TransportHandle};
