//! Cleanup system: removes enemies that wandered off the field.

use hecs::{Entity, World};
use tracing::debug;

use blorb_core::components::Enemy;
use blorb_core::events::ArenaEvent;
use blorb_core::types::{Bounds, Position};

/// Remove every enemy lying more than `margin` outside `bounds` on any side.
/// Returns the number removed.
pub fn run(
    world: &mut World,
    bounds: &Bounds,
    margin: f32,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<ArenaEvent>,
) -> usize {
    despawn_buffer.clear();

    for (entity, (enemy, pos)) in world.query_mut::<(&Enemy, &Position)>() {
        if !bounds.contains(pos, margin) {
            debug!(serial = enemy.serial, x = pos.x, y = pos.y, "enemy left the arena");
            events.push(ArenaEvent::EnemyCulled {
                serial: enemy.serial,
                kind: enemy.kind,
            });
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
