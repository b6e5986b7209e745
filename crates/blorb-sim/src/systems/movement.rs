//! Kinematic integration: position += velocity * dt.

use hecs::{Entity, World};

use blorb_core::types::{Bounds, Position, Velocity};

/// Integrate every entity that has both a Position and a Velocity.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
    }
}

/// Keep the player inside the arena.
pub fn clamp_player(world: &mut World, player: Entity, bounds: &Bounds) {
    if let Ok(mut pos) = world.get::<&mut Position>(player) {
        *pos = bounds.clamp(*pos);
    }
}
