//! ECS components for hecs entities.
//!
//! Components are plain data. The few methods here only keep a component's
//! own invariants (health arithmetic, lifespan countdown); game logic that
//! touches more than one entity lives in systems.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;
use crate::types::Position;

/// Marks the player's unit. Exactly one per session.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Player {
    /// Aim angle in radians, from +x.
    pub aim: f32,
    /// Frames until the next shot is allowed.
    pub fire_cooldown: u32,
}

/// Marks an enemy and records its archetype.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    /// Sequential id assigned at spawn, stable for the entity's lifetime.
    pub serial: u32,
}

/// Hit points. Not clamped in either direction; `<= 0` means defeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
}

impl Health {
    pub fn new(current: i32) -> Self {
        Self { current }
    }

    pub fn apply_damage(&mut self, amount: i32) {
        self.current -= amount;
    }

    pub fn apply_heal(&mut self, amount: i32) {
        self.current += amount;
    }

    pub fn is_defeated(&self) -> bool {
        self.current <= 0
    }
}

/// Circular bounding shape centred on the entity's position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hitbox {
    pub radius: f32,
}

/// Per-enemy movement policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Movement {
    /// Random walk; velocity is re-rolled on the interval timer only.
    Drift { speed: f32 },
    /// Fire-and-forget: the launch velocity is never changed.
    Launch,
    /// Re-aim at the player every frame.
    Chase { speed: f32 },
    /// Circle `center` at `radius`, advancing `angle` by `angular_speed` rad/s.
    Orbit {
        center: Position,
        radius: f32,
        angular_speed: f32,
        angle: f32,
    },
}

/// A player-fired projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub damage: i32,
    /// Remaining frames. The projectile is inert once this reaches zero.
    pub lifespan: i32,
    pub scale: f32,
}

impl Projectile {
    pub fn is_active(&self) -> bool {
        self.lifespan > 0
    }

    /// Count down one frame. Returns whether the projectile is still active.
    pub fn advance(&mut self) -> bool {
        self.lifespan -= 1;
        self.is_active()
    }
}

/// A static pickup that heals the player on contact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Powerup {
    pub heal: i32,
}
