//! Snapshot system: reads the world and builds an `ArenaSnapshot`.
//!
//! Read-only; never modifies the world.

use hecs::{Entity, World};

use blorb_core::components::*;
use blorb_core::enums::{Cue, GamePhase};
use blorb_core::events::ArenaEvent;
use blorb_core::state::*;
use blorb_core::types::{Bounds, Position, SimTime, Velocity};

use crate::session::ScoreState;

/// Build a complete snapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    player: Option<Entity>,
    time: &SimTime,
    phase: GamePhase,
    bounds: Bounds,
    cues: Vec<Cue>,
    events: Vec<ArenaEvent>,
    score: &ScoreState,
) -> ArenaSnapshot {
    ArenaSnapshot {
        time: *time,
        phase,
        bounds,
        player: player.and_then(|entity| build_player(world, entity)),
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        powerups: build_powerups(world),
        cues,
        events,
        score: score.view(),
    }
}

fn build_player(world: &World, entity: Entity) -> Option<PlayerView> {
    let state = *world.get::<&Player>(entity).ok()?;
    let position = *world.get::<&Position>(entity).ok()?;
    let health = world.get::<&Health>(entity).ok()?.current;
    Some(PlayerView {
        position,
        health,
        aim: state.aim,
    })
}

/// Enemies ordered by spawn serial.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Velocity, &Health, &Hitbox)>()
        .iter()
        .map(|(_, (enemy, pos, vel, health, hitbox))| EnemyView {
            serial: enemy.serial,
            kind: enemy.kind,
            position: *pos,
            velocity: *vel,
            health: health.current,
            radius: hitbox.radius,
        })
        .collect();
    enemies.sort_by_key(|e| e.serial);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(_, (projectile, pos, vel))| ProjectileView {
            position: *pos,
            velocity: *vel,
            lifespan: projectile.lifespan,
            scale: projectile.scale,
        })
        .collect()
}

fn build_powerups(world: &World) -> Vec<PowerupView> {
    world
        .query::<(&Powerup, &Position)>()
        .iter()
        .map(|(_, (powerup, pos))| PowerupView {
            position: *pos,
            heal: powerup.heal,
        })
        .collect()
}
