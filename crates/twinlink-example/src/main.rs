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

// src/main.rs
// Demo bridge: subscribes to a broker topic and drives one axis of an
// in-memory "scene object", logging every applied translation. Stands
// in for a real host integration; the tick loop here plays the role
// of the host's per-frame update event.
//
// Try it against the public test broker:
//   twinlink-example
//   mosquitto_pub -h test.mosquitto.org \
//     -t synctwin/mqtt_demo/forklift/fork_level -m 3.5

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use twinlink::binding::{Axis, SceneGraph, SceneHandle};
use twinlink::config::BridgeConfig;
use twinlink::controller::Controller;
use twinlink::errors::TwinLinkError;
use twinlink::link::LinkOptions;

#[derive(Parser, Debug)]
#[command(name = "twinlink-example", about = "MQTT telemetry to scene property bridge demo")]
struct Options {
    // Optional YAML config file; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, env = "TWINLINK_HOST")]
    host: Option<String>,

    #[arg(long, env = "TWINLINK_PORT")]
    port: Option<u16>,

    #[arg(long, env = "TWINLINK_TOPIC")]
    topic: Option<String>,

    #[arg(long)]
    target_path: Option<String>,

    #[arg(long, value_enum)]
    axis: Option<Axis>,

    // Tick frequency standing in for the host frame rate.
    #[arg(long, default_value_t = 30.0)]
    tick_hz: f64,
}

impl Options {
    // into_config loads the config file (or defaults) and applies the
    // command-line overrides.
    fn into_config(self) -> Result<(BridgeConfig, f64), TwinLinkError> {
        let mut config = match &self.config {
            Some(path) => BridgeConfig::from_yaml_file(path)?,
            None => BridgeConfig::default(),
        };
        if let Some(host) = self.host {
            config.connection.host = host;
        }
        if let Some(port) = self.port {
            config.connection.port = port;
        }
        if let Some(topic) = self.topic {
            config.connection.topic = topic;
        }
        if let Some(target_path) = self.target_path {
            config.target_path = target_path;
        }
        if let Some(axis) = self.axis {
            config.axis = axis;
        }
        Ok((config, self.tick_hz))
    }
}

// DemoSceneGraph is a one-object stand-in for the host scene graph.
struct DemoSceneGraph {
    path: String,
    translation: Mutex<[f64; 3]>,
}

impl DemoSceneGraph {
    fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            translation: Mutex::new([0.0; 3]),
        }
    }
}

impl SceneGraph for DemoSceneGraph {
    fn find_object_by_path(&self, path: &str) -> Option<SceneHandle> {
        (path == self.path).then(|| SceneHandle::new(1))
    }

    fn set_translation(
        &self,
        _handle: &SceneHandle,
        axis: Axis,
        value: f64,
    ) -> Result<(), TwinLinkError> {
        let mut translation = self.translation.lock().unwrap();
        translation[axis.index()] = value;
        info!(%axis, value, translation = ?*translation, "translation updated");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
        .add_directive("rumqttc=warn".parse()?);
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let (config, tick_hz) = Options::parse().into_config()?;
    anyhow::ensure!(tick_hz > 0.0, "--tick-hz must be positive");
    info!(
        host = %config.connection.host,
        port = config.connection.port,
        topic = %config.connection.topic,
        target = %config.target_path,
        axis = %config.axis,
        "starting bridge"
    );

    let scene = Arc::new(DemoSceneGraph::new(config.target_path.clone()));
    let controller = Controller::mqtt(scene, LinkOptions::default());

    let mut status = controller.subscribe_status();
    tokio::spawn(async move {
        loop {
            match status.recv().await {
                Ok(event) => info!(%event, "status"),
                Err(tokio::sync::broadcast::error::RecvError::Lagged(missed)) => {
                    warn!(missed, "status stream lagged");
                }
                Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    controller.start(&config).await?;

    // The host's per-frame pulse, simulated at a fixed rate.
    let mut ticker = tokio::time::interval(Duration::from_secs_f64(1.0 / tick_hz));
    loop {
        tokio::select! {
            _ = ticker.tick() => controller.tick(),
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }
    controller.stop().await;
    Ok(())
}
