//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Slow blob that random-walks ("dances") on the interval timer.
    Blorb,
    /// Small fast eye, usually born from a cluster bursting.
    Eyeball,
    /// Slow-drifting cluster that bursts into eyeballs on death.
    EyeballCluster,
}

impl EnemyKind {
    /// Whether this variant re-rolls its velocity on the interval timer.
    pub fn is_drift_capable(self) -> bool {
        matches!(self, EnemyKind::Blorb)
    }

    /// Whether this variant spawns eyeballs where it dies.
    pub fn bursts_on_death(self) -> bool {
        matches!(self, EnemyKind::EyeballCluster)
    }
}

/// How an eyeball moves after it is launched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EyeballPolicy {
    /// Keep the launch velocity until destroyed or off-field.
    #[default]
    Launch,
    /// Re-aim at the player every frame.
    Chase,
    /// Circle the point the eyeball was spawned at.
    Orbit,
}

/// Named audio cue played through the host's audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cue {
    /// Player picked up a powerup.
    Heal,
    /// Player fired a projectile.
    Launch,
    /// An enemy was destroyed.
    Explode,
}

/// Session phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Created but no session started.
    #[default]
    Idle,
    Active,
    Paused,
    /// Player health reached zero.
    Defeated,
}
