//! Death resolution: removes defeated enemies and queues cluster bursts.

use hecs::{Entity, World};
use tracing::debug;

use blorb_core::components::{Enemy, Health};
use blorb_core::enums::Cue;
use blorb_core::events::ArenaEvent;
use blorb_core::types::Position;

use blorb_behavior::profiles::get_profile;

use crate::session::{ScoreState, SpawnRequest};

/// Remove every enemy at or below zero health.
///
/// Bursting variants push a `SpawnRequest` instead of spawning directly; the
/// caller drains the queue once this pass is done. Returns the number removed.
pub fn run(
    world: &mut World,
    burst_count: u32,
    spawn_queue: &mut Vec<SpawnRequest>,
    despawn_buffer: &mut Vec<Entity>,
    cues: &mut Vec<Cue>,
    events: &mut Vec<ArenaEvent>,
    score: &mut ScoreState,
) -> usize {
    despawn_buffer.clear();

    for (entity, (enemy, pos, health)) in world.query_mut::<(&Enemy, &Position, &Health)>() {
        if !health.is_defeated() {
            continue;
        }
        debug!(serial = enemy.serial, kind = ?enemy.kind, "enemy destroyed");

        cues.push(Cue::Explode);
        events.push(ArenaEvent::EnemyDestroyed {
            serial: enemy.serial,
            kind: enemy.kind,
            position: *pos,
        });
        score.kills += 1;
        score.score += get_profile(enemy.kind).score;

        if enemy.kind.bursts_on_death() {
            spawn_queue.push(SpawnRequest::ClusterBurst {
                position: *pos,
                count: burst_count,
            });
        }
        despawn_buffer.push(entity);
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
