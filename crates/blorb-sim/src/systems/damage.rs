//! Contact resolution: applies health changes and consumes projectiles and
//! powerups for the contacts found by `collision::detect`.
//!
//! Enemies driven to zero health are left in the world for `death::run`,
//! which needs their last position. Once an enemy is defeated, later contacts
//! with it in the same frame are ignored, and a projectile moves on to the
//! next enemy it overlaps.

use std::collections::HashSet;

use glam::Vec2;
use hecs::{Entity, World};

use blorb_core::components::{Health, Hitbox, Powerup, Projectile};
use blorb_core::config::ArenaConfig;
use blorb_core::constants::CONTACT_SKIN;
use blorb_core::enums::Cue;
use blorb_core::events::ArenaEvent;
use blorb_core::types::{Position, Velocity};

use crate::session::ScoreState;
use crate::systems::collision::Contact;

/// Resolve all contacts in detection order.
pub fn apply(
    world: &mut World,
    contacts: &[Contact],
    config: &ArenaConfig,
    cues: &mut Vec<Cue>,
    events: &mut Vec<ArenaEvent>,
    score: &mut ScoreState,
) {
    let mut consumed: HashSet<Entity> = HashSet::new();

    for &contact in contacts {
        match contact {
            Contact::ProjectileEnemy { projectile, enemy } => {
                if consumed.contains(&projectile) || is_defeated(world, enemy) {
                    continue;
                }
                let damage = match world.get::<&Projectile>(projectile) {
                    Ok(p) if p.is_active() => p.damage,
                    _ => continue,
                };
                if let Ok(mut health) = world.get::<&mut Health>(enemy) {
                    health.apply_damage(damage);
                }
                consumed.insert(projectile);
                let _ = world.despawn(projectile);
            }
            Contact::PlayerEnemy { player, enemy } => {
                if is_defeated(world, enemy) {
                    continue;
                }
                if let Ok(mut health) = world.get::<&mut Health>(enemy) {
                    health.apply_damage(config.enemy_contact_damage);
                }
                let remaining_health = match world.get::<&mut Health>(player) {
                    Ok(mut health) => {
                        health.apply_damage(config.player_contact_damage);
                        health.current
                    }
                    Err(_) => continue,
                };
                score.damage_taken += config.player_contact_damage;
                events.push(ArenaEvent::PlayerHit {
                    damage: config.player_contact_damage,
                    remaining_health,
                });
                separate(world, player, enemy);
            }
            Contact::PlayerPowerup { player, powerup } => {
                if consumed.contains(&powerup) {
                    continue;
                }
                let heal = match world.get::<&Powerup>(powerup) {
                    Ok(p) => p.heal,
                    Err(_) => continue,
                };
                let health = match world.get::<&mut Health>(player) {
                    Ok(mut health) => {
                        health.apply_heal(heal);
                        health.current
                    }
                    Err(_) => continue,
                };
                consumed.insert(powerup);
                let _ = world.despawn(powerup);
                cues.push(Cue::Heal);
                score.powerups_collected += 1;
                events.push(ArenaEvent::PowerupCollected { heal, health });
            }
        }
    }
}

fn is_defeated(world: &World, entity: Entity) -> bool {
    world
        .get::<&Health>(entity)
        .map(|h| h.is_defeated())
        .unwrap_or(true)
}

/// Push the enemy clear of the player and send it off along the contact
/// normal at its current speed, standing in for physics contact resolution.
fn separate(world: &mut World, player: Entity, enemy: Entity) {
    let body = |world: &World, entity: Entity| -> Option<(Position, f32)> {
        let pos = *world.get::<&Position>(entity).ok()?;
        let radius = world.get::<&Hitbox>(entity).ok()?.radius;
        Some((pos, radius))
    };
    let (Some((player_pos, player_radius)), Some((enemy_pos, enemy_radius))) =
        (body(world, player), body(world, enemy))
    else {
        return;
    };

    let normal = (enemy_pos.as_vec2() - player_pos.as_vec2()).normalize_or(Vec2::X);
    let clearance = player_radius + enemy_radius + 2.0 * CONTACT_SKIN;

    if let Ok(mut pos) = world.get::<&mut Position>(enemy) {
        *pos = (player_pos.as_vec2() + normal * clearance).into();
    }
    if let Ok(mut vel) = world.get::<&mut Velocity>(enemy) {
        *vel = (normal * vel.speed()).into();
    }
}
