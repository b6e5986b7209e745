//! Arena controller: the core of the game.
//!
//! `ArenaController` owns the hecs world, the RNG and every queue, and is
//! driven by the host at two granularities: `tick` once per rendered frame and
//! `on_spawn_timer` once per fixed wall-clock interval. Completely headless;
//! audio and input arrive through injected collaborators.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use blorb_core::commands::ArenaCommand;
use blorb_core::components::Health;
use blorb_core::config::{ArenaConfig, ConfigError};
use blorb_core::enums::{Cue, EnemyKind, GamePhase};
use blorb_core::events::ArenaEvent;
use blorb_core::state::ArenaSnapshot;
use blorb_core::types::{Position, SimTime};

use crate::collaborators::{AudioSink, InputSource};
use crate::session::{ScoreState, SpawnRequest};
use crate::systems;
use crate::world_setup;

/// The arena controller. Owns the ECS world and all session state.
pub struct ArenaController {
    world: World,
    config: ArenaConfig,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    player: Option<Entity>,
    next_serial: u32,
    command_queue: VecDeque<ArenaCommand>,
    spawn_queue: Vec<SpawnRequest>,
    despawn_buffer: Vec<Entity>,
    /// Cues raised by systems but not yet sent to the audio sink.
    pending_cues: Vec<Cue>,
    /// Cues already played, kept for the next snapshot.
    played_cues: Vec<Cue>,
    events: Vec<ArenaEvent>,
    score: ScoreState,
    audio: Box<dyn AudioSink>,
    input: Box<dyn InputSource>,
}

impl ArenaController {
    /// Create a controller. No session runs until `StartSession` is processed.
    ///
    /// Fails if `config` does not pass `ArenaConfig::validate`.
    pub fn new(
        config: ArenaConfig,
        audio: Box<dyn AudioSink>,
        input: Box<dyn InputSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            world: World::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            time: SimTime::default(),
            phase: GamePhase::default(),
            player: None,
            next_serial: 0,
            command_queue: VecDeque::new(),
            spawn_queue: Vec::new(),
            despawn_buffer: Vec::new(),
            pending_cues: Vec::new(),
            played_cues: Vec::new(),
            events: Vec::new(),
            score: ScoreState::default(),
            audio,
            input,
        })
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: ArenaCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = ArenaCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one frame of `dt` seconds and return the resulting snapshot.
    ///
    /// Called once per rendered frame by the host loop; not re-entrant.
    pub fn tick(&mut self, dt: f32) -> ArenaSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_frame(dt);
            self.time.advance(dt);
            self.check_defeat();
        }
        self.flush_cues();

        systems::snapshot::build_snapshot(
            &self.world,
            self.player,
            &self.time,
            self.phase,
            self.config.bounds(),
            std::mem::take(&mut self.played_cues),
            std::mem::take(&mut self.events),
            &self.score,
        )
    }

    /// Fixed-interval timer: re-roll drifting enemies, make the spawn
    /// decision, then sweep off-field enemies. Returns the variant spawned.
    ///
    /// Events and cues raised here are reported in the next snapshot.
    pub fn on_spawn_timer(&mut self) -> Option<EnemyKind> {
        if self.phase != GamePhase::Active {
            return None;
        }
        self.time.intervals += 1;

        systems::enemy_ai::dance(&mut self.world, &mut self.rng);
        let player_pos = self.player_position();
        let spawned = systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &self.config,
            player_pos,
            &mut self.next_serial,
            &mut self.events,
        );
        self.cleanup();
        spawned
    }

    /// Remove enemies more than the configured margin outside the arena.
    /// Returns the number removed.
    pub fn cleanup(&mut self) -> usize {
        systems::cleanup::run(
            &mut self.world,
            &self.config.bounds(),
            self.config.cleanup_margin,
            &mut self.despawn_buffer,
            &mut self.events,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player entity, once a session has started.
    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    pub fn player_health(&self) -> Option<i32> {
        let player = self.player?;
        self.world.get::<&Health>(player).ok().map(|h| h.current)
    }

    pub fn live_enemies(&self) -> usize {
        systems::spawner::live_enemies(&self.world)
    }

    /// Mutable world access for tests that stage exact scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Allocate the next enemy serial (for tests spawning enemies directly).
    #[cfg(test)]
    pub fn next_serial(&mut self) -> u32 {
        let serial = self.next_serial;
        self.next_serial += 1;
        serial
    }

    fn player_position(&self) -> Option<Position> {
        let player = self.player?;
        self.world.get::<&Position>(player).ok().map(|p| *p)
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: ArenaCommand) {
        match command {
            ArenaCommand::StartSession => {
                if matches!(self.phase, GamePhase::Idle | GamePhase::Defeated) {
                    self.start_session();
                }
            }
            ArenaCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            ArenaCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            ArenaCommand::PlacePowerup { x, y } => {
                if matches!(self.phase, GamePhase::Active | GamePhase::Paused) {
                    let position = self.config.bounds().clamp(Position::new(x, y));
                    world_setup::spawn_powerup(&mut self.world, position, self.config.powerup_heal);
                }
            }
        }
    }

    fn start_session(&mut self) {
        self.world.clear();
        self.spawn_queue.clear();
        self.pending_cues.clear();
        self.played_cues.clear();
        self.events.clear();
        self.score = ScoreState::default();
        self.time = SimTime::default();
        self.next_serial = 0;
        self.player = Some(world_setup::spawn_player(&mut self.world, &self.config));
        self.phase = GamePhase::Active;
        info!(seed = self.config.seed, "session started");
    }

    /// Run all per-frame systems in order.
    fn run_frame(&mut self, dt: f32) {
        let Some(player) = self.player else {
            return;
        };

        // 1. Player input, aim and fire
        let input = self.input.poll();
        systems::player::run(
            &mut self.world,
            player,
            &input,
            &self.config,
            &mut self.pending_cues,
            &mut self.score,
        );
        // 2. Enemy movement policies
        let player_pos = self.player_position();
        systems::enemy_ai::run(&mut self.world, player_pos, dt);
        // 3. Kinematic integration
        systems::movement::run(&mut self.world, dt);
        systems::movement::clamp_player(&mut self.world, player, &self.config.bounds());
        // 4. Projectile lifespan and out-of-bounds removal
        systems::projectile::run(
            &mut self.world,
            &self.config.bounds(),
            &mut self.despawn_buffer,
        );
        // 5. Collision sweep, then resolution
        let contacts = systems::collision::detect(&self.world, Some(player));
        systems::damage::apply(
            &mut self.world,
            &contacts,
            &self.config,
            &mut self.pending_cues,
            &mut self.events,
            &mut self.score,
        );
        // 6. Deaths, then deferred spawns
        systems::death::run(
            &mut self.world,
            self.config.cluster_burst_count,
            &mut self.spawn_queue,
            &mut self.despawn_buffer,
            &mut self.pending_cues,
            &mut self.events,
            &mut self.score,
        );
        for request in std::mem::take(&mut self.spawn_queue) {
            systems::spawner::fulfill(
                &mut self.world,
                &mut self.rng,
                &self.config,
                request,
                &mut self.next_serial,
                &mut self.events,
            );
        }
    }

    fn check_defeat(&mut self) {
        if let Some(health) = self.player_health() {
            if health <= 0 {
                info!(health, score = self.score.score, "player defeated");
                self.phase = GamePhase::Defeated;
            }
        }
    }

    /// Send newly raised cues to the audio sink, in order.
    fn flush_cues(&mut self) {
        for cue in self.pending_cues.drain(..) {
            self.audio.play(cue);
            self.played_cues.push(cue);
        }
    }
}
