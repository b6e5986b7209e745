//! Host-side inputs to the simulation.
//!
//! Session commands are queued and applied at the next tick boundary.
//! `InputState` is polled from the input collaborator once per frame.

use serde::{Deserialize, Serialize};

/// Session-level actions queued by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArenaCommand {
    /// Spawn the player and start the clock.
    StartSession,
    /// Freeze the simulation.
    Pause,
    /// Unfreeze the simulation.
    Resume,
    /// Drop a healing pickup at the given point.
    PlacePowerup { x: f32, y: f32 },
}

/// Snapshot of the input device for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputState {
    /// Desired movement direction. Normalized by the player system.
    pub move_x: f32,
    pub move_y: f32,
    /// Aim angle in radians; `None` keeps the previous aim.
    pub aim: Option<f32>,
    /// Fire held this frame.
    pub fire: bool,
}
