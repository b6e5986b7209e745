//! Arena snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::ArenaEvent;
use crate::types::{Bounds, Position, SimTime, Velocity};

/// Complete arena state produced after each tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub bounds: Bounds,
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub powerups: Vec<PowerupView>,
    /// Cues played since the previous snapshot, in order.
    pub cues: Vec<Cue>,
    /// Gameplay events since the previous snapshot, in order.
    pub events: Vec<ArenaEvent>,
    pub score: ScoreView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub health: i32,
    pub aim: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub serial: u32,
    pub kind: EnemyKind,
    pub position: Position,
    pub velocity: Velocity,
    pub health: i32,
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub velocity: Velocity,
    pub lifespan: i32,
    pub scale: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerupView {
    pub position: Position,
    pub heal: i32,
}

/// Running score for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub kills: u32,
    pub shots_fired: u32,
    pub damage_taken: i32,
    pub powerups_collected: u32,
}
