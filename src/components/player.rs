//! Player-controlled actors, as far as badguys are concerned.
//!
//! Input, animation and the player's own state machine live elsewhere. This
//! component carries only the flags badguy collision handlers read.

use bevy_ecs::prelude::Component;

/// Marker plus status flags for a player-controlled actor.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Player {
    pub invincible: bool,
    pub stone: bool,
    pub buttjump: bool,
    /// Dead or dying players are ignored by the actor registry.
    pub dying: bool,
}
