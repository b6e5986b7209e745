//! Variant-specific parameters.

use blorb_core::components::Movement;
use blorb_core::enums::{EnemyKind, EyeballPolicy};
use blorb_core::types::Position;

/// Static parameters for an enemy archetype.
pub struct EnemyProfile {
    pub health: i32,
    /// Hitbox radius.
    pub radius: f32,
    /// Initial speed when spawned.
    pub launch_speed: f32,
    /// Score awarded when destroyed.
    pub score: u32,
}

/// Get the profile for a given archetype.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    use blorb_core::constants::*;

    match kind {
        EnemyKind::Blorb => EnemyProfile {
            health: BLORB_HEALTH,
            radius: BLORB_RADIUS,
            launch_speed: BLORB_DRIFT_SPEED,
            score: SCORE_BLORB,
        },
        EnemyKind::Eyeball => EnemyProfile {
            health: EYEBALL_HEALTH,
            radius: EYEBALL_RADIUS,
            launch_speed: EYEBALL_LAUNCH_SPEED,
            score: SCORE_EYEBALL,
        },
        EnemyKind::EyeballCluster => EnemyProfile {
            health: CLUSTER_HEALTH,
            radius: CLUSTER_RADIUS,
            launch_speed: CLUSTER_LAUNCH_SPEED,
            score: SCORE_CLUSTER,
        },
    }
}

/// Movement policy a freshly spawned enemy starts with.
///
/// `origin` is the spawn point and `heading` the launch direction; orbiting
/// eyeballs circle the origin starting from that heading.
pub fn initial_movement(
    kind: EnemyKind,
    eyeball_policy: EyeballPolicy,
    origin: Position,
    heading: f32,
) -> Movement {
    let profile = get_profile(kind);
    match kind {
        EnemyKind::Blorb => Movement::Drift {
            speed: profile.launch_speed,
        },
        EnemyKind::EyeballCluster => Movement::Launch,
        EnemyKind::Eyeball => match eyeball_policy {
            EyeballPolicy::Launch => Movement::Launch,
            EyeballPolicy::Chase => Movement::Chase {
                speed: profile.launch_speed,
            },
            EyeballPolicy::Orbit => Movement::Orbit {
                center: origin,
                radius: blorb_core::constants::EYEBALL_ORBIT_RADIUS,
                angular_speed: profile.launch_speed
                    / blorb_core::constants::EYEBALL_ORBIT_RADIUS,
                angle: heading,
            },
        },
    }
}
