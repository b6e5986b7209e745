//! Core types and definitions for the blorb arena.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, commands, snapshots, events, constants and configuration.
//! It has no dependency on the ECS or any host engine.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
