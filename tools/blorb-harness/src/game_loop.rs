//! Fixed-step driver for the arena controller.
//!
//! Stands in for a host render loop: ticks the controller once per frame and
//! fires the spawn timer every `spawn_interval_ms` of simulated time.

use tracing::{debug, info};

use blorb_core::commands::{ArenaCommand, InputState};
use blorb_core::config::{ArenaConfig, ConfigError};
use blorb_core::constants::FRAME_DT;
use blorb_core::enums::{Cue, GamePhase};
use blorb_core::state::ArenaSnapshot;
use blorb_sim::collaborators::{AudioSink, InputSource};
use blorb_sim::ArenaController;

/// Audio sink that logs each cue instead of playing it.
#[derive(Debug, Default)]
pub struct LoggingAudio;

impl AudioSink for LoggingAudio {
    fn play(&mut self, cue: Cue) {
        debug!(?cue, "cue");
    }
}

/// Walks the player around a slow circle while sweeping aim and holding fire.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frame: u32,
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputState {
        self.frame += 1;
        let t = self.frame as f32 * FRAME_DT;
        InputState {
            move_x: (t * 0.5).cos(),
            move_y: (t * 0.5).sin(),
            aim: Some(t * 1.3),
            fire: true,
        }
    }
}

/// Run one session for up to `frames` frames. Stops early on defeat.
pub fn run_session(config: ArenaConfig, frames: u32) -> Result<ArenaSnapshot, ConfigError> {
    let interval_secs = config.spawn_interval_ms as f64 / 1000.0;
    let mut controller = ArenaController::new(
        config,
        Box::new(LoggingAudio),
        Box::new(ScriptedInput::default()),
    )?;
    controller.queue_command(ArenaCommand::StartSession);

    let mut snapshot = controller.tick(FRAME_DT);
    let mut next_spawn = interval_secs;

    for _ in 1..frames {
        // 1. Fire the interval timer for each period crossed
        while snapshot.time.elapsed_secs >= next_spawn {
            if let Some(kind) = controller.on_spawn_timer() {
                debug!(?kind, "timed spawn");
            }
            next_spawn += interval_secs;
        }

        // 2. Advance one frame
        snapshot = controller.tick(FRAME_DT);

        if controller.phase() != GamePhase::Active {
            break;
        }
    }

    info!(
        ticks = snapshot.time.tick,
        score = snapshot.score.score,
        kills = snapshot.score.kills,
        enemies = snapshot.enemies.len(),
        "session finished"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_always_fires() {
        let mut input = ScriptedInput::default();
        for _ in 0..10 {
            let state = input.poll();
            assert!(state.fire);
            assert!(state.aim.is_some());
        }
    }

    #[test]
    fn test_session_spawns_on_interval() {
        let config = ArenaConfig {
            spawn_interval_ms: 500,
            ..Default::default()
        };
        // Firings at 0.5s through 2.5s precede the last of 180 frames.
        let snapshot = run_session(config, 180).unwrap();
        if snapshot.phase == GamePhase::Active {
            assert_eq!(snapshot.time.tick, 180);
            assert_eq!(snapshot.time.intervals, 5);
        } else {
            assert!(snapshot.time.intervals <= 5);
        }
        assert!(snapshot.score.shots_fired > 0);
    }

    #[test]
    fn test_session_rejects_invalid_config() {
        let config = ArenaConfig {
            blorb_spawn_weight: -0.1,
            ..Default::default()
        };
        assert!(run_session(config, 10).is_err());
    }

    #[test]
    fn test_session_serializes() {
        let snapshot = run_session(ArenaConfig::default(), 120).unwrap();
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"phase\""));
        assert!(matches!(
            snapshot.phase,
            GamePhase::Active | GamePhase::Defeated
        ));
    }
}
