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

// src/binding.rs
// Scene-graph seam and the twin binding that drives one translation
// axis of one target object.
//
// The host's scene graph is an external collaborator behind the
// SceneGraph trait: resolve a path to an opaque handle, set one
// translation component through it. Handles are weak -- the scene owns
// object lifetimes, so a reload invalidates every handle and the
// binding must re-resolve before it can apply again.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::TwinLinkError;

// Axis selects a translation component on the target object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    // index maps the axis to its component position in a translation
    // vector.
    pub fn index(&self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
            Self::Z => write!(f, "z"),
        }
    }
}

// SceneHandle is an opaque reference to an object owned by the scene
// graph. It carries no liveness guarantee: set_translation on a handle
// from before a scene reload fails with StaleHandle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SceneHandle {
    id: u64,
}

impl SceneHandle {
    // new wraps a scene-side object id. Only scene graph
    // implementations should mint these.
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

// SceneGraph is the host collaborator interface: exactly the two
// operations the bridge needs. Implementations must be callable from
// the host's tick thread.
pub trait SceneGraph: Send + Sync {
    // find_object_by_path resolves a path/identifier to a handle, or
    // None when no such object exists in the current scene.
    fn find_object_by_path(&self, path: &str) -> Option<SceneHandle>;

    // set_translation sets one translation component of the object to
    // exactly `value`, replacing any prior value on that component.
    // Fails with StaleHandle when the handle no longer refers to a
    // live object.
    fn set_translation(&self, handle: &SceneHandle, axis: Axis, value: f64)
    -> Result<(), TwinLinkError>;
}

// ApplyOutcome reports what a TwinBinding::apply call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    // The value was written to the target object.
    Applied,
    // The value equals the last applied one; the redundant write was
    // skipped.
    Unchanged,
    // The binding is unresolved; the value was dropped.
    Unresolved,
}

// TwinBinding connects one telemetry value stream to one translation
// axis of one scene object. Single-writer: only the controller's tick
// loop calls apply.
pub struct TwinBinding {
    scene: Arc<dyn SceneGraph>,
    path: String,
    axis: Axis,
    handle: Option<SceneHandle>,
    last_applied: Option<f64>,
}

impl TwinBinding {
    // new creates an unresolved binding; call resolve before expecting
    // apply to do anything.
    pub fn new(scene: Arc<dyn SceneGraph>, path: impl Into<String>, axis: Axis) -> Self {
        Self {
            scene,
            path: path.into(),
            axis,
            handle: None,
            last_applied: None,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn is_resolved(&self) -> bool {
        self.handle.is_some()
    }

    pub fn last_applied(&self) -> Option<f64> {
        self.last_applied
    }

    // resolve looks the target path up in the scene graph. On failure
    // the binding stays (or becomes) unresolved and apply is a no-op
    // until a later resolve succeeds. Must be re-invoked after every
    // scene reload.
    pub fn resolve(&mut self) -> Result<(), TwinLinkError> {
        match self.scene.find_object_by_path(&self.path) {
            Some(handle) => {
                debug!(path = %self.path, id = handle.id(), "resolved target object");
                self.handle = Some(handle);
                Ok(())
            }
            None => {
                self.handle = None;
                Err(TwinLinkError::TargetNotFound(self.path.clone()))
            }
        }
    }

    // invalidate drops the handle and the applied-value memory. The
    // reloaded scene starts from its authored transform, so the next
    // sample must be written even if its value repeats.
    pub fn invalidate(&mut self) {
        self.handle = None;
        self.last_applied = None;
    }

    // apply sets the configured axis of the target to exactly `value`.
    // Replaces, never accumulates: applying the same value twice
    // leaves the object where the first apply put it. Unresolved
    // bindings drop the value silently. A stale handle invalidates the
    // binding and surfaces the error; the caller recovers by
    // re-resolving.
    pub fn apply(&mut self, value: f64) -> Result<ApplyOutcome, TwinLinkError> {
        let Some(handle) = &self.handle else {
            return Ok(ApplyOutcome::Unresolved);
        };
        if self.last_applied == Some(value) {
            return Ok(ApplyOutcome::Unchanged);
        }
        match self.scene.set_translation(handle, self.axis, value) {
            Ok(()) => {
                self.last_applied = Some(value);
                Ok(ApplyOutcome::Applied)
            }
            Err(err) => {
                self.invalidate();
                Err(err)
            }
        }
    }
}
