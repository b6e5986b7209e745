//! Gameplay constants and tuning defaults.
//!
//! Every value here can be overridden through `ArenaConfig`.

/// Nominal frame rate of the host loop (Hz).
pub const FRAME_RATE: u32 = 60;

/// Seconds per frame at the nominal rate.
pub const FRAME_DT: f32 = 1.0 / FRAME_RATE as f32;

// --- Arena ---

pub const ARENA_WIDTH: f32 = 2400.0;
pub const ARENA_HEIGHT: f32 = 1800.0;

/// Enemies further than this outside the arena on any side are removed.
pub const CLEANUP_MARGIN: f32 = 200.0;

// --- Player ---

pub const PLAYER_START_HEALTH: i32 = 250;
pub const PLAYER_SPEED: f32 = 400.0;
pub const PLAYER_RADIUS: f32 = 32.0;

/// Health the player loses on each contact with an enemy.
pub const PLAYER_CONTACT_DAMAGE: i32 = 50;

/// Health an enemy loses on each contact with the player.
pub const ENEMY_CONTACT_DAMAGE: i32 = 1;

/// Slack added to the radius sum when testing for physical contact.
pub const CONTACT_SKIN: f32 = 1.0;

/// Minimum frames between two shots while fire is held.
pub const FIRE_COOLDOWN_FRAMES: u32 = 6;

// --- Projectile ---

pub const PROJECTILE_DAMAGE: i32 = 1;
pub const PROJECTILE_LIFESPAN: i32 = 100;
/// Launch speed (base 1000, doubled at launch).
pub const PROJECTILE_SPEED: f32 = 2000.0;
pub const PROJECTILE_SCALE: f32 = 0.25;
/// Unscaled hitbox radius; the effective radius is this times the scale.
pub const PROJECTILE_BASE_RADIUS: f32 = 48.0;

// --- Powerup ---

pub const POWERUP_HEAL: i32 = 10;
pub const POWERUP_RADIUS: f32 = 24.0;

// --- Spawning ---

pub const MAX_ENEMIES: usize = 10;
/// Period of the spawn timer. The host schedules `on_spawn_timer` at this
/// interval; the controller does not keep wall-clock time itself.
pub const SPAWN_INTERVAL_MS: u64 = 1000;
/// Probability that a timed spawn is a blorb rather than a cluster.
pub const BLORB_SPAWN_WEIGHT: f64 = 0.5;
/// Lowest coordinate a timed spawn may land on (both axes).
pub const SPAWN_MIN_COORD: f32 = 10.0;
/// Radius of the forbidden zone around the player.
pub const SPAWN_CLEARANCE: f32 = 300.0;
/// Random samples tried before pushing a spawn out of the forbidden zone.
pub const SPAWN_ATTEMPTS: u32 = 8;

// --- Enemy variants ---

pub const BLORB_HEALTH: i32 = 3;
pub const BLORB_RADIUS: f32 = 40.0;
pub const BLORB_DRIFT_SPEED: f32 = 120.0;

pub const EYEBALL_HEALTH: i32 = 1;
pub const EYEBALL_RADIUS: f32 = 16.0;
pub const EYEBALL_LAUNCH_SPEED: f32 = 400.0;
pub const EYEBALL_ORBIT_RADIUS: f32 = 120.0;

pub const CLUSTER_HEALTH: i32 = 5;
pub const CLUSTER_RADIUS: f32 = 48.0;
pub const CLUSTER_LAUNCH_SPEED: f32 = 50.0;
/// Eyeballs released when a cluster dies.
pub const CLUSTER_BURST_COUNT: u32 = 5;

// --- Score ---

pub const SCORE_BLORB: u32 = 100;
pub const SCORE_EYEBALL: u32 = 50;
pub const SCORE_CLUSTER: u32 = 150;
