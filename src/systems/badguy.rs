//! Badguy systems.
//!
//! Three systems drive [`BadGuy`] components through a tick:
//!
//! 1. [`badguy_update`] ticks every badguy against a [`BadGuyEnv`] built from
//!    world resources and mirrors the result into `MapPosition` and
//!    `CollisionGroup`, so the detector sees post-movement positions.
//! 2. [`badguy_collision`] reads this tick's [`CollisionEvent`]s, classifies
//!    each partner, dispatches to the badguy and forwards the queued effects
//!    (player messages, bullet removal and ricochet). Terrain contacts that
//!    the badguy resolves normally push it out of the solid.
//! 3. [`badguy_removal`] despawns badguys flagged for removal. Nothing is
//!    despawned earlier, so handlers never see a partner vanish mid-pass.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;
use log::debug;
use rustc_hash::FxHashSet;

use crate::components::badguy::{BadGuy, BadGuyEnv, PartnerEffect};
use crate::components::boxcollider::BoxCollider;
use crate::components::bullet::Bullet;
use crate::components::collision::{
    BulletContact, CollisionGroup, CollisionPartner, HitResponse, PlayerContact,
};
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::rigidbody::RigidBody;
use crate::components::solid::Solid;
use crate::events::collision::CollisionEvent;
use crate::events::player::PlayerMessage;
use crate::resources::camera2d::Camera2D;
use crate::resources::players::PlayerRegistry;
use crate::resources::scripts::ScriptQueue;
use crate::resources::solidmap::SolidMap;
use crate::resources::worldtime::WorldTime;
use crate::systems::collision::contact_between;

/// World resources a badguy needs while it updates or collides.
#[derive(SystemParam)]
pub struct BadGuyContext<'w> {
    pub time: Res<'w, WorldTime>,
    pub players: Res<'w, PlayerRegistry>,
    pub camera: Res<'w, Camera2D>,
    pub solids: Res<'w, SolidMap>,
    pub scripts: ResMut<'w, ScriptQueue>,
}

impl BadGuyContext<'_> {
    pub fn env(&mut self) -> BadGuyEnv<'_> {
        BadGuyEnv {
            now: self.time.elapsed,
            players: &*self.players,
            viewport: &*self.camera,
            solids: &*self.solids,
            scripts: &mut *self.scripts,
        }
    }
}

fn sync(badguy: &BadGuy, position: &mut MapPosition, group: &mut CollisionGroup) {
    position.pos = badguy.core().position();
    *group = badguy.core().group();
}

pub fn badguy_update(
    mut badguys: Query<(&mut BadGuy, &mut MapPosition, &mut CollisionGroup)>,
    mut ctx: BadGuyContext,
) {
    let dt = ctx.time.delta;
    let mut env = ctx.env();
    for (mut badguy, mut position, mut group) in badguys.iter_mut() {
        badguy.update(dt, &mut env);
        sync(&badguy, &mut position, &mut group);
    }
}

/// Read-only view used to turn an entity into a [`CollisionPartner`].
#[derive(SystemParam)]
pub struct PartnerQueries<'w, 's> {
    pub bodies: Query<'w, 's, (&'static MapPosition, &'static BoxCollider), Without<BadGuy>>,
    pub players: Query<'w, 's, &'static Player>,
    pub solids: Query<'w, 's, &'static Solid>,
}

#[allow(clippy::too_many_arguments)]
pub fn badguy_collision(
    mut reader: MessageReader<CollisionEvent>,
    mut badguys: Query<(&mut BadGuy, &mut MapPosition, &mut CollisionGroup)>,
    partners: PartnerQueries,
    mut bullets: Query<(&Bullet, Option<&mut RigidBody>)>,
    mut ctx: BadGuyContext,
    mut player_messages: MessageWriter<PlayerMessage>,
    mut commands: Commands,
) {
    let events: Vec<CollisionEvent> = reader.read().copied().collect();
    let mut removed_bullets: FxHashSet<Entity> = FxHashSet::default();

    for event in &events {
        let sides = [
            (event.a, event.b, event.hit_a),
            (event.b, event.a, event.hit_b),
        ];
        for (me, other, detected_hit) in sides {
            if !badguys.contains(me) || removed_bullets.contains(&other) {
                continue;
            }

            let mut hit = detected_hit;
            let mut depth = 0.0;
            let partner = if partners.solids.contains(other) {
                // Earlier contacts this pass may already have moved us out.
                let Ok((pos, collider)) = partners.bodies.get(other) else {
                    continue;
                };
                let Ok((badguy, _, _)) = badguys.get(me) else {
                    continue;
                };
                let solid_box = collider.aabb(pos.pos);
                let Some((fresh, d)) = contact_between(&badguy.core().bbox(), &solid_box) else {
                    continue;
                };
                hit = fresh;
                depth = d;
                CollisionPartner::Solid
            } else if let Ok(player) = partners.players.get(other) {
                let Ok((pos, collider)) = partners.bodies.get(other) else {
                    continue;
                };
                CollisionPartner::Player(PlayerContact {
                    bbox: collider.aabb(pos.pos),
                    invincible: player.invincible,
                    stone: player.stone,
                    buttjump: player.buttjump,
                })
            } else if let Ok((other_badguy, _, _)) = badguys.get(other) {
                CollisionPartner::BadGuy(other_badguy.contact())
            } else if let Ok((bullet, _)) = bullets.get(other) {
                let Ok((pos, collider)) = partners.bodies.get(other) else {
                    continue;
                };
                CollisionPartner::Bullet(BulletContact {
                    bbox: collider.aabb(pos.pos),
                    kind: bullet.kind,
                })
            } else {
                CollisionPartner::Other
            };

            let Ok((mut badguy, mut position, mut group)) = badguys.get_mut(me) else {
                continue;
            };
            if badguy.core().is_removed() {
                continue;
            }

            let mut env = ctx.env();
            let response = badguy.collision(&partner, &hit, &mut env);

            if let CollisionPartner::Solid = partner {
                if response == HitResponse::Continue {
                    let pushed = badguy.core().position() + hit.normal * depth;
                    badguy.core_mut().set_position(pushed);
                }
                if let Ok(solid) = partners.solids.get(other) {
                    let attributes = solid.special_attributes();
                    if attributes != 0 {
                        badguy.collision_tile(attributes, &mut env);
                    }
                }
            }

            for effect in badguy.drain_effects() {
                apply_effect(
                    effect,
                    me,
                    other,
                    &mut player_messages,
                    &mut bullets,
                    &mut removed_bullets,
                    &mut commands,
                );
            }
            sync(&badguy, &mut position, &mut group);
        }
    }
}

fn apply_effect(
    effect: PartnerEffect,
    badguy: Entity,
    other: Entity,
    player_messages: &mut MessageWriter<PlayerMessage>,
    bullets: &mut Query<(&Bullet, Option<&mut RigidBody>)>,
    removed_bullets: &mut FxHashSet<Entity>,
    commands: &mut Commands,
) {
    match effect {
        PartnerEffect::HurtPlayer => {
            player_messages.write(PlayerMessage::Hurt {
                player: other,
                badguy,
            });
        }
        PartnerEffect::BouncePlayer => {
            player_messages.write(PlayerMessage::Bounce {
                player: other,
                badguy,
            });
        }
        PartnerEffect::RemoveBullet => {
            if removed_bullets.insert(other) {
                debug!("bullet {:?} absorbed by badguy {:?}", other, badguy);
                commands.entity(other).try_despawn();
            }
        }
        PartnerEffect::RicochetBullet => {
            if let Ok((_, Some(mut body))) = bullets.get_mut(other) {
                body.velocity.x = -body.velocity.x;
            }
        }
    }
}

pub fn badguy_removal(mut commands: Commands, badguys: Query<(Entity, &BadGuy)>) {
    for (entity, badguy) in badguys.iter() {
        if badguy.core().is_removed() {
            debug!(
                "despawning {} badguy '{}' ({:?})",
                badguy.kind(),
                badguy.core().sprite_name,
                badguy.state()
            );
            commands.entity(entity).despawn();
        }
    }
}
