//! Pairwise contact detection.
//!
//! Read-only: produces a list of contacts that `damage::apply` resolves after
//! the sweep, so no collection is mutated while it is being iterated.

use hecs::{Entity, World};

use blorb_core::components::{Enemy, Hitbox, Player, Powerup, Projectile};
use blorb_core::constants::CONTACT_SKIN;
use blorb_core::types::Position;

/// A detected pair, in detection order. Enemies are visited by serial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Player body touching an enemy body.
    PlayerEnemy { player: Entity, enemy: Entity },
    /// Active projectile overlapping an enemy.
    ProjectileEnemy { projectile: Entity, enemy: Entity },
    /// Player overlapping a powerup.
    PlayerPowerup { player: Entity, powerup: Entity },
}

/// Shapes intersect.
pub fn overlaps(a: &Position, ra: f32, b: &Position, rb: f32) -> bool {
    a.distance_to(b) < ra + rb
}

/// Shapes intersect or rest against each other within the contact skin.
pub fn touches(a: &Position, ra: f32, b: &Position, rb: f32) -> bool {
    a.distance_to(b) <= ra + rb + CONTACT_SKIN
}

/// Collect all contacts for this frame.
pub fn detect(world: &World, player: Option<Entity>) -> Vec<Contact> {
    // Spawn order, so resolution does not depend on archetype layout.
    let mut enemies: Vec<(u32, Entity, Position, f32)> = world
        .query::<(&Enemy, &Position, &Hitbox)>()
        .iter()
        .map(|(entity, (enemy, pos, hitbox))| (enemy.serial, entity, *pos, hitbox.radius))
        .collect();
    enemies.sort_by_key(|&(serial, ..)| serial);

    let mut contacts = Vec::new();

    // Projectile x Enemy: every overlapping enemy is reported. `damage::apply`
    // spends the projectile on the first one still alive.
    for (projectile, (state, pos, hitbox)) in
        world.query::<(&Projectile, &Position, &Hitbox)>().iter()
    {
        if !state.is_active() {
            continue;
        }
        for &(_, enemy, epos, er) in &enemies {
            if overlaps(pos, hitbox.radius, &epos, er) {
                contacts.push(Contact::ProjectileEnemy { projectile, enemy });
            }
        }
    }

    let Some(player) = player else {
        return contacts;
    };
    if world.get::<&Player>(player).is_err() {
        return contacts;
    }
    let Ok(player_pos) = world.get::<&Position>(player).map(|p| *p) else {
        return contacts;
    };
    let Ok(player_radius) = world.get::<&Hitbox>(player).map(|h| h.radius) else {
        return contacts;
    };

    for &(_, enemy, epos, er) in &enemies {
        if touches(&player_pos, player_radius, &epos, er) {
            contacts.push(Contact::PlayerEnemy { player, enemy });
        }
    }

    for (powerup, (_powerup, pos, hitbox)) in world.query::<(&Powerup, &Position, &Hitbox)>().iter()
    {
        if overlaps(&player_pos, player_radius, pos, hitbox.radius) {
            contacts.push(Contact::PlayerPowerup { player, powerup });
        }
    }

    contacts
}
