//! Enemy spawning: the interval-driven timed spawn and deferred cluster bursts.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use blorb_core::components::{Enemy, Movement};
use blorb_core::config::ArenaConfig;
use blorb_core::constants::{SPAWN_ATTEMPTS, SPAWN_MIN_COORD};
use blorb_core::enums::EnemyKind;
use blorb_core::events::ArenaEvent;
use blorb_core::types::{Position, Velocity};

use blorb_behavior::placement::Placement;
use blorb_behavior::policy::burst_velocities;
use blorb_behavior::profiles::{get_profile, initial_movement};

use crate::session::SpawnRequest;
use crate::world_setup::spawn_enemy;

/// Number of enemies currently in the world.
pub fn live_enemies(world: &World) -> usize {
    world.query::<&Enemy>().iter().count()
}

/// Timed spawn decision. Spawns at most one enemy, and only while the live
/// count is at or below the cap; a skipped interval is not made up later.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &ArenaConfig,
    player: Option<Position>,
    next_serial: &mut u32,
    events: &mut Vec<ArenaEvent>,
) -> Option<EnemyKind> {
    let live = live_enemies(world);
    if live > config.max_enemies {
        debug!(live, max = config.max_enemies, "spawn skipped");
        events.push(ArenaEvent::SpawnSkipped { live_enemies: live });
        return None;
    }

    let kind = if rng.gen_bool(config.blorb_spawn_weight) {
        EnemyKind::Blorb
    } else {
        EnemyKind::EyeballCluster
    };

    let placement = Placement {
        bounds: config.bounds(),
        min_coord: SPAWN_MIN_COORD,
        clearance: config.spawn_clearance,
        attempts: SPAWN_ATTEMPTS,
    };
    let position = placement.choose(rng, player);

    // Blorbs stand still until their first re-roll; clusters drift off slowly.
    let (heading, velocity) = match kind {
        EnemyKind::Blorb => (0.0, Velocity::default()),
        _ => {
            let heading = rng.gen_range(0.0..std::f32::consts::TAU);
            (
                heading,
                Velocity::from_angle(heading, get_profile(kind).launch_speed),
            )
        }
    };
    let movement = initial_movement(kind, config.eyeball_policy, position, heading);

    spawn(world, kind, position, velocity, movement, next_serial, events);
    Some(kind)
}

/// Carry out a deferred spawn request. Returns the spawned entities.
pub fn fulfill(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &ArenaConfig,
    request: SpawnRequest,
    next_serial: &mut u32,
    events: &mut Vec<ArenaEvent>,
) -> Vec<Entity> {
    match request {
        SpawnRequest::ClusterBurst { position, count } => {
            info!(count, x = position.x, y = position.y, "spawning eyeballs");
            events.push(ArenaEvent::ClusterBurst { position, count });

            let start = rng.gen_range(0.0..std::f32::consts::TAU);
            let speed = get_profile(EnemyKind::Eyeball).launch_speed;
            burst_velocities(count, speed, start)
                .into_iter()
                .map(|(heading, velocity)| {
                    let movement = initial_movement(
                        EnemyKind::Eyeball,
                        config.eyeball_policy,
                        position,
                        heading,
                    );
                    spawn(
                        world,
                        EnemyKind::Eyeball,
                        position,
                        velocity,
                        movement,
                        next_serial,
                        events,
                    )
                })
                .collect()
        }
    }
}

fn spawn(
    world: &mut World,
    kind: EnemyKind,
    position: Position,
    velocity: Velocity,
    movement: Movement,
    next_serial: &mut u32,
    events: &mut Vec<ArenaEvent>,
) -> Entity {
    let serial = *next_serial;
    *next_serial += 1;
    debug!(serial, ?kind, x = position.x, y = position.y, "enemy spawned");
    events.push(ArenaEvent::EnemySpawned { serial, kind });
    spawn_enemy(world, kind, serial, position, velocity, movement)
}
