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

// src/lib.rs
// Main exports for the twinlink telemetry-to-scene-property bridge.

pub mod binding;
pub mod channel;
pub mod config;
pub mod controller;
pub mod errors;
pub mod link;
pub mod sample;
pub mod status;

// Export some things for convenience.
pub use binding::{ApplyOutcome, Axis, SceneGraph, SceneHandle, TwinBinding};
pub use channel::ValueChannel;
pub use config::{BridgeConfig, ConnectionConfig};
pub use controller::{Controller, ControllerState};
pub use errors::TwinLinkError;
pub use link::{
    DeliveryGate, LinkCredentials, LinkOptions, MqttTransport, TelemetryLink, Transport,
    TransportHandle,
};
pub use rumqttc::QoS;
pub use sample::TelemetrySample;
pub use status::{ConnectionState, StatusEvent};
