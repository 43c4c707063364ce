//! What badguys do to players.
//!
//! Badguy collision handlers never touch player entities. They queue an
//! effect, and the collision system forwards it as a [`PlayerMessage`] for
//! [`player_reaction`](crate::systems::player::player_reaction) to apply.
use bevy_ecs::prelude::*;

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMessage {
    /// The player ran into a live badguy.
    Hurt { player: Entity, badguy: Entity },
    /// The player stomped a badguy and bounces off it.
    Bounce { player: Entity, badguy: Entity },
}

impl PlayerMessage {
    pub fn player(&self) -> Entity {
        match self {
            PlayerMessage::Hurt { player, .. } | PlayerMessage::Bounce { player, .. } => *player,
        }
    }
}
