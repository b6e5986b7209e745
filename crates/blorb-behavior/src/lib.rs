//! Enemy behavior for the blorb arena.
//!
//! Movement policies, spawn placement and per-variant profiles as pure
//! functions over plain data. No ECS dependency.

pub mod placement;
pub mod policy;
pub mod profiles;

pub use blorb_core as core;
