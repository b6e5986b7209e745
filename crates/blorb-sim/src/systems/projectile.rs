//! Projectile lifespan countdown and out-of-bounds removal.

use hecs::{Entity, World};

use blorb_core::components::Projectile;
use blorb_core::types::{Bounds, Position};

/// Count down every projectile's lifespan and remove the expired or
/// off-field ones. Returns how many were removed.
pub fn run(world: &mut World, bounds: &Bounds, despawn_buffer: &mut Vec<Entity>) -> usize {
    despawn_buffer.clear();

    for (entity, (projectile, pos)) in world.query_mut::<(&mut Projectile, &Position)>() {
        let active = projectile.advance();
        if !active || !bounds.contains(pos, 0.0) {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    removed
}
