//! Entity spawn factories.
//!
//! Each factory builds the full component bundle for one kind of entity.

use hecs::{Entity, World};

use blorb_core::components::*;
use blorb_core::config::ArenaConfig;
use blorb_core::constants::*;
use blorb_core::enums::EnemyKind;
use blorb_core::types::{Position, Velocity};

use blorb_behavior::profiles::get_profile;

/// Spawn the player at the left-centre starting point.
pub fn spawn_player(world: &mut World, config: &ArenaConfig) -> Entity {
    world.spawn((
        Player::default(),
        Position::new(config.arena_width / 4.0, config.arena_height / 2.0),
        Velocity::default(),
        Health::new(config.player_start_health),
        Hitbox {
            radius: PLAYER_RADIUS,
        },
    ))
}

/// Spawn an enemy with its archetype's health and hitbox.
pub fn spawn_enemy(
    world: &mut World,
    kind: EnemyKind,
    serial: u32,
    position: Position,
    velocity: Velocity,
    movement: Movement,
) -> Entity {
    let profile = get_profile(kind);
    world.spawn((
        Enemy { kind, serial },
        position,
        velocity,
        movement,
        Health::new(profile.health),
        Hitbox {
            radius: profile.radius,
        },
    ))
}

/// Spawn a projectile heading along `angle`. Only the player fires, so no
/// owner is recorded.
pub fn spawn_projectile(
    world: &mut World,
    config: &ArenaConfig,
    position: Position,
    angle: f32,
) -> Entity {
    world.spawn((
        Projectile {
            damage: config.projectile_damage,
            lifespan: config.projectile_lifespan,
            scale: config.projectile_scale,
        },
        position,
        Velocity::from_angle(angle, config.projectile_speed),
        Hitbox {
            radius: PROJECTILE_BASE_RADIUS * config.projectile_scale,
        },
    ))
}

/// Spawn a static healing pickup. Powerups carry no velocity.
pub fn spawn_powerup(world: &mut World, position: Position, heal: i32) -> Entity {
    world.spawn((
        Powerup { heal },
        position,
        Hitbox {
            radius: POWERUP_RADIUS,
        },
    ))
}
