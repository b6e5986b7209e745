//! Enemy movement policies.
//!
//! `advance` runs every frame and may rewrite velocity; `reroll_drift` runs on
//! the interval timer for drift-capable enemies only. Position integration is
//! left to the caller.

use glam::Vec2;
use rand::Rng;

use blorb_core::components::Movement;
use blorb_core::types::{Position, Velocity};

/// Input to a policy step for a single enemy.
pub struct MovementContext {
    pub movement: Movement,
    pub position: Position,
    pub velocity: Velocity,
    /// Player position, if a player exists.
    pub player: Option<Position>,
}

/// Output of a policy step.
pub struct MovementUpdate {
    pub movement: Movement,
    pub velocity: Velocity,
}

/// Evaluate one frame of movement policy.
pub fn advance(ctx: &MovementContext, dt: f32) -> MovementUpdate {
    let unchanged = MovementUpdate {
        movement: ctx.movement,
        velocity: ctx.velocity,
    };

    match ctx.movement {
        Movement::Drift { .. } | Movement::Launch => unchanged,
        Movement::Chase { speed } => match ctx.player {
            Some(target) => MovementUpdate {
                movement: ctx.movement,
                velocity: seek(&ctx.position, &target, speed),
            },
            None => unchanged,
        },
        Movement::Orbit {
            center,
            radius,
            angular_speed,
            angle,
        } => {
            if dt <= 0.0 {
                return unchanged;
            }
            let offset = ctx.position.as_vec2() - center.as_vec2();
            let dist = offset.length();
            let current_angle = if dist > f32::EPSILON {
                offset.y.atan2(offset.x)
            } else {
                angle
            };
            let next_angle = current_angle + angular_speed * dt;
            // Spiral out (or in) to the orbit radius at the tangential speed.
            let step = angular_speed.abs() * radius * dt;
            let next_radius = approach(dist, radius, step);
            let target = center.as_vec2() + Vec2::from_angle(next_angle) * next_radius;
            MovementUpdate {
                movement: Movement::Orbit {
                    center,
                    radius,
                    angular_speed,
                    angle: next_angle,
                },
                velocity: ((target - ctx.position.as_vec2()) / dt).into(),
            }
        }
    }
}

/// Velocity of magnitude `speed` from `from` toward `to`. Zero when they coincide.
pub fn seek(from: &Position, to: &Position, speed: f32) -> Velocity {
    let dir = (to.as_vec2() - from.as_vec2()).normalize_or_zero();
    (dir * speed).into()
}

/// New random-walk velocity: each axis uniform in `[-speed, speed]`.
pub fn reroll_drift(rng: &mut impl Rng, speed: f32) -> Velocity {
    let x: f32 = rng.gen_range(-1.0..=1.0);
    let y: f32 = rng.gen_range(-1.0..=1.0);
    Velocity::new(x * speed, y * speed)
}

/// Launch velocities for `count` enemies fanned evenly around a circle,
/// the first one heading along `start_angle`.
pub fn burst_velocities(count: u32, speed: f32, start_angle: f32) -> Vec<(f32, Velocity)> {
    if count == 0 {
        return Vec::new();
    }
    let spacing = std::f32::consts::TAU / count as f32;
    (0..count)
        .map(|i| {
            let heading = start_angle + spacing * i as f32;
            (heading, Velocity::from_angle(heading, speed))
        })
        .collect()
}

/// Move `value` toward `target` by at most `step`.
fn approach(value: f32, target: f32, step: f32) -> f32 {
    if value < target {
        (value + step).min(target)
    } else {
        (value - step).max(target)
    }
}
