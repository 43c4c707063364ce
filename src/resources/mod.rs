//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and the
//! collaborator traits badguys see through
//! [`BadGuyEnv`](crate::components::badguy::BadGuyEnv).
//!
//! Overview
//! - `camera2d` – visible area, doubles as the badguy viewport
//! - `gameconfig` – INI-backed settings and badguy tuning
//! - `level` – JSON level description and its builders
//! - `lua_host` – Lua state that runs dead scripts (feature `lua`)
//! - `path` – immutable node lists shared by path walkers
//! - `pathstore` – named paths loaded from the level
//! - `players` – per-tick player registry
//! - `scripts` – dead-script queue
//! - `solidmap` – terrain rectangles for ledge probes
//! - `worldtime` – simulation time and delta
pub mod camera2d;
pub mod gameconfig;
pub mod level;
#[cfg(feature = "lua")]
pub mod lua_host;
pub mod path;
pub mod pathstore;
pub mod players;
pub mod scripts;
pub mod solidmap;
pub mod worldtime;
