//! Player update: input-driven movement, aiming and firing.

use glam::Vec2;
use hecs::{Entity, World};

use blorb_core::commands::InputState;
use blorb_core::components::Player;
use blorb_core::config::ArenaConfig;
use blorb_core::enums::Cue;
use blorb_core::types::{Position, Velocity};

use crate::session::ScoreState;

/// Apply one frame of input to the player. Returns the projectile fired, if any.
pub fn run(
    world: &mut World,
    player: Entity,
    input: &InputState,
    config: &ArenaConfig,
    cues: &mut Vec<Cue>,
    score: &mut ScoreState,
) -> Option<Entity> {
    let (position, aim, can_fire) = {
        let Ok((state, pos, vel)) =
            world.query_one_mut::<(&mut Player, &Position, &mut Velocity)>(player)
        else {
            return None;
        };

        let dir = Vec2::new(input.move_x, input.move_y).normalize_or_zero();
        *vel = (dir * config.player_speed).into();

        if let Some(aim) = input.aim {
            state.aim = aim;
        }
        if state.fire_cooldown > 0 {
            state.fire_cooldown -= 1;
        }
        let can_fire = input.fire && state.fire_cooldown == 0;
        if can_fire {
            state.fire_cooldown = config.fire_cooldown_frames;
        }
        (*pos, state.aim, can_fire)
    };

    if !can_fire {
        return None;
    }
    Some(fire(world, config, position, aim, cues, score))
}

/// Launch a projectile from `position` along `aim` and play the launch cue.
pub fn fire(
    world: &mut World,
    config: &ArenaConfig,
    position: Position,
    aim: f32,
    cues: &mut Vec<Cue>,
    score: &mut ScoreState,
) -> Entity {
    let projectile = crate::world_setup::spawn_projectile(world, config, position, aim);
    cues.push(Cue::Launch);
    score.shots_fired += 1;
    projectile
}
