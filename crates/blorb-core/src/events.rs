//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;
use crate::types::Position;

/// Gameplay events recorded during one tick or timer interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArenaEvent {
    /// An enemy entered the arena (timer spawn or cluster burst).
    EnemySpawned { serial: u32, kind: EnemyKind },
    /// An enemy reached zero health and was removed.
    EnemyDestroyed {
        serial: u32,
        kind: EnemyKind,
        position: Position,
    },
    /// An enemy wandered beyond the cleanup margin and was removed.
    EnemyCulled { serial: u32, kind: EnemyKind },
    /// A cluster released its eyeballs.
    ClusterBurst { position: Position, count: u32 },
    /// Player took contact damage.
    PlayerHit { damage: i32, remaining_health: i32 },
    /// Player collected a powerup.
    PowerupCollected { heal: i32, health: i32 },
    /// A timed spawn was skipped because the enemy cap was reached.
    SpawnSkipped { live_enemies: usize },
}
