//! Arena simulation for the blorb shooter.
//!
//! Owns the hecs ECS world, runs frame and interval systems on the host's
//! schedule, and produces `ArenaSnapshot`s for the renderer.

pub mod collaborators;
pub mod engine;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use blorb_core as core;
pub use engine::ArenaController;
