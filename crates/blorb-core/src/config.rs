//! Tunable arena parameters.
//!
//! Defaults come from `constants`; any subset can be overridden from JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::EyeballPolicy;
use crate::types::Bounds;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// RNG seed. Same seed and inputs replay the same session.
    pub seed: u64,
    pub arena_width: f32,
    pub arena_height: f32,
    pub cleanup_margin: f32,

    pub player_start_health: i32,
    pub player_speed: f32,
    pub player_contact_damage: i32,
    pub enemy_contact_damage: i32,
    pub fire_cooldown_frames: u32,

    pub projectile_damage: i32,
    pub projectile_lifespan: i32,
    pub projectile_speed: f32,
    pub projectile_scale: f32,

    pub powerup_heal: i32,

    pub max_enemies: usize,
    pub spawn_interval_ms: u64,
    pub blorb_spawn_weight: f64,
    pub spawn_clearance: f32,

    pub cluster_burst_count: u32,
    pub eyeball_policy: EyeballPolicy,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            cleanup_margin: CLEANUP_MARGIN,
            player_start_health: PLAYER_START_HEALTH,
            player_speed: PLAYER_SPEED,
            player_contact_damage: PLAYER_CONTACT_DAMAGE,
            enemy_contact_damage: ENEMY_CONTACT_DAMAGE,
            fire_cooldown_frames: FIRE_COOLDOWN_FRAMES,
            projectile_damage: PROJECTILE_DAMAGE,
            projectile_lifespan: PROJECTILE_LIFESPAN,
            projectile_speed: PROJECTILE_SPEED,
            projectile_scale: PROJECTILE_SCALE,
            powerup_heal: POWERUP_HEAL,
            max_enemies: MAX_ENEMIES,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            blorb_spawn_weight: BLORB_SPAWN_WEIGHT,
            spawn_clearance: SPAWN_CLEARANCE,
            cluster_burst_count: CLUSTER_BURST_COUNT,
            eyeball_policy: EyeballPolicy::default(),
        }
    }
}

impl ArenaConfig {
    /// Parse and validate a JSON config. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ArenaConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.arena_width > 0.0 && self.arena_height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "arena must have positive size, got {}x{}",
                self.arena_width, self.arena_height
            )));
        }
        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "spawn_interval_ms must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.blorb_spawn_weight) {
            return Err(ConfigError::Invalid(format!(
                "blorb_spawn_weight must be within [0, 1], got {}",
                self.blorb_spawn_weight
            )));
        }
        if self.projectile_lifespan <= 0 {
            return Err(ConfigError::Invalid(format!(
                "projectile_lifespan must be positive, got {}",
                self.projectile_lifespan
            )));
        }
        if self.cleanup_margin < 0.0 || self.spawn_clearance < 0.0 {
            return Err(ConfigError::Invalid(
                "cleanup_margin and spawn_clearance must not be negative".into(),
            ));
        }
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.arena_width, self.arena_height)
    }
}
