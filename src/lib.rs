//! Badguy engine library.
//!
//! Hostile-entity state machines and path-following movement on top of
//! `bevy_ecs`. The components, resources, systems and messages are exposed
//! for the headless runner and for integration tests.

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
