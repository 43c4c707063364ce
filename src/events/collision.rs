//! Collision messages.
//!
//! The [`collision_detector`](crate::systems::collision::collision_detector)
//! writes one [`CollisionEvent`] per overlapping pair each tick. Consumers
//! read them with a `MessageReader` after the detector ran.
use bevy_ecs::prelude::*;

use crate::components::collision::CollisionHit;

/// Two entities overlap.
///
/// `hit_a` is the contact seen from `a` (its normal points from `b` towards
/// `a`), `hit_b` the same contact seen from `b`. `depth` is the overlap along
/// the normal, i.e. how far `a` must move along `hit_a.normal` to separate.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
    pub hit_a: CollisionHit,
    pub hit_b: CollisionHit,
    pub depth: f32,
}

impl CollisionEvent {
    /// The pair seen from `entity`'s side, if it takes part.
    pub fn seen_from(&self, entity: Entity) -> Option<(Entity, CollisionHit)> {
        if entity == self.a {
            Some((self.b, self.hit_a))
        } else if entity == self.b {
            Some((self.a, self.hit_b))
        } else {
            None
        }
    }
}
