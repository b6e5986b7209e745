//! ECS systems that operate on the arena world.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; everything persistent lives in components or in
//! the controller.

pub mod cleanup;
pub mod collision;
pub mod damage;
pub mod death;
pub mod enemy_ai;
pub mod movement;
pub mod player;
pub mod projectile;
pub mod snapshot;
pub mod spawner;
