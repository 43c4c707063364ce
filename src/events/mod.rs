//! Messages exchanged between systems.
//!
//! Submodules:
//! - [`collision`] – overlapping pairs reported by the collision detector
//! - [`player`] – what badguys did to players (hurt, bounce)
pub mod collision;
pub mod player;
