//! Per-session bookkeeping held by the controller, outside the ECS world.

use blorb_core::state::ScoreView;
use blorb_core::types::Position;

/// Running score state.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub score: u32,
    pub kills: u32,
    pub shots_fired: u32,
    pub damage_taken: i32,
    pub powerups_collected: u32,
}

impl ScoreState {
    pub fn view(&self) -> ScoreView {
        ScoreView {
            score: self.score,
            kills: self.kills,
            shots_fired: self.shots_fired,
            damage_taken: self.damage_taken,
            powerups_collected: self.powerups_collected,
        }
    }
}

/// Spawn deferred until the collision sweep and death pass have finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnRequest {
    /// Release `count` eyeballs at a dead cluster's last position.
    ClusterBurst { position: Position, count: u32 },
}
