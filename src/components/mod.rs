//! ECS components for entities.
//!
//! This module groups the component types attached to entities in the
//! simulation: hostile actors and their behaviors, spatial data, physics, and
//! the plain markers that tell the collision pass what an entity is.
//!
//! Submodules overview:
//! - [`badguy`] – hostile-entity state machine, shared core and concrete behaviors
//! - [`boxcollider`] – axis-aligned rectangles and the collider built on them
//! - [`bullet`] – projectile marker with its kind (fire, ice, ...)
//! - [`collision`] – hit geometry, responses, groups and partner snapshots
//! - [`direction`] – facing direction with `auto` resolution
//! - [`mapposition`] – world-space position (top-left) for an entity
//! - [`pathwalker`] – cursor that moves along a shared [`Path`](crate::resources::path::Path)
//! - [`player`] – player-controlled actor flags
//! - [`rigidbody`] – velocity plus named acceleration forces (gravity)
//! - [`solid`] – static terrain with tile attributes
//! - [`timer`] – deadline timer polled against simulation time

pub mod badguy;
pub mod boxcollider;
pub mod bullet;
pub mod collision;
pub mod direction;
pub mod mapposition;
pub mod pathwalker;
pub mod player;
pub mod rigidbody;
pub mod solid;
pub mod timer;
