//! Player-side bookkeeping.
//!
//! - [`refresh_player_registry`] snapshots living players into
//!   [`PlayerRegistry`] before badguys update.
//! - [`camera_follow_player`] keeps the viewport centred on the first player.
//! - [`player_reaction`] applies [`PlayerMessage`]s written by badguy
//!   collisions.
use bevy_ecs::prelude::*;
use log::info;

use crate::components::boxcollider::BoxCollider;
use crate::components::collision::PlayerContact;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::events::player::PlayerMessage;
use crate::resources::camera2d::Camera2D;
use crate::resources::players::PlayerRegistry;

/// Upward speed given to a player that stomped a badguy.
pub const BOUNCE_SPEED: f32 = 450.0;

pub fn refresh_player_registry(
    mut registry: ResMut<PlayerRegistry>,
    players: Query<(Entity, &Player, &MapPosition, &BoxCollider)>,
) {
    registry.clear();
    for (entity, player, position, collider) in players.iter() {
        if player.dying {
            continue;
        }
        registry.push(
            entity,
            PlayerContact {
                bbox: collider.aabb(position.pos),
                invincible: player.invincible,
                stone: player.stone,
                buttjump: player.buttjump,
            },
        );
    }
}

pub fn camera_follow_player(mut camera: ResMut<Camera2D>, registry: Res<PlayerRegistry>) {
    if let Some((_, contact)) = registry.iter().next() {
        camera.center_on(contact.bbox.middle());
    }
}

pub fn player_reaction(
    mut reader: MessageReader<PlayerMessage>,
    mut players: Query<(&mut Player, Option<&mut RigidBody>)>,
) {
    for message in reader.read() {
        let Ok((mut player, body)) = players.get_mut(message.player()) else {
            continue;
        };
        match *message {
            PlayerMessage::Bounce { .. } => {
                player.buttjump = false;
                if let Some(mut body) = body {
                    body.set_velocity_y(-BOUNCE_SPEED);
                }
            }
            PlayerMessage::Hurt { player: entity, badguy } => {
                if player.invincible || player.stone || player.dying {
                    continue;
                }
                player.dying = true;
                info!("player {:?} killed by badguy {:?}", entity, badguy);
            }
        }
    }
}
