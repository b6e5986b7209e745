//! Enemy movement: per-frame policy evaluation and the interval drift re-roll.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use blorb_core::components::{Enemy, Movement};
use blorb_core::types::{Position, Velocity};

use blorb_behavior::policy::{advance, reroll_drift, MovementContext};

/// Evaluate each enemy's movement policy for one frame.
pub fn run(world: &mut World, player: Option<Position>, dt: f32) {
    for (_entity, (_enemy, pos, vel, movement)) in
        world.query_mut::<(&Enemy, &Position, &mut Velocity, &mut Movement)>()
    {
        let update = advance(
            &MovementContext {
                movement: *movement,
                position: *pos,
                velocity: *vel,
                player,
            },
            dt,
        );
        *movement = update.movement;
        *vel = update.velocity;
    }
}

/// Re-roll the velocity of every drift-capable enemy. Returns how many moved.
pub fn dance(world: &mut World, rng: &mut ChaCha8Rng) -> usize {
    let mut count = 0;
    for (_entity, (enemy, movement, vel)) in
        world.query_mut::<(&Enemy, &Movement, &mut Velocity)>()
    {
        if !enemy.kind.is_drift_capable() {
            continue;
        }
        if let Movement::Drift { speed } = *movement {
            *vel = reroll_drift(rng, speed);
            count += 1;
        }
    }
    count
}
