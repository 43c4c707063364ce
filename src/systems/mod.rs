//! Engine systems.
//!
//! This module groups the ECS systems that advance the simulation one tick.
//! [`Simulation`](crate::game::Simulation) chains them in a fixed order.
//!
//! Submodules overview
//! - [`badguy`] – tick badguys, dispatch their collisions and despawn the dead
//! - [`collision`] – overlap checks and [`CollisionEvent`](crate::events::collision::CollisionEvent) emission
//! - [`messages`] – advance message double buffers
//! - [`movement`] – integrate non-badguy rigid bodies
//! - [`pathwalker`] – advance standalone path walkers
//! - [`player`] – player registry, camera follow and reactions to badguys
//! - [`scripts`] – run dead scripts queued during the tick
//! - [`time`] – update simulation time and delta

pub mod badguy;
pub mod collision;
pub mod messages;
pub mod movement;
pub mod pathwalker;
pub mod player;
pub mod scripts;
pub mod time;
