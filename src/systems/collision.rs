//! Collision detection.
//!
//! [`collision_detector`] tests every pair of entities carrying a
//! [`MapPosition`] and a [`BoxCollider`]. Overlapping pairs whose
//! [`CollisionGroup`]s interact produce one [`CollisionEvent`]. Entities
//! without a group count as [`CollisionGroup::Moving`].
//!
//! The contact normal is taken along the axis of least penetration, which is
//! the axis along which the two boxes separate fastest. The contact point is
//! the centre of the overlap.
//!
//! The detector only reports. Reactions, including pushing badguys out of
//! terrain, happen in [`badguy_collision`](crate::systems::badguy::badguy_collision).

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::boxcollider::{BoxCollider, Rect};
use crate::components::collision::{CollisionGroup, CollisionHit};
use crate::components::mapposition::MapPosition;
use crate::events::collision::CollisionEvent;

/// Contact between two boxes, seen from `a`, and the penetration depth.
pub fn contact_between(a: &Rect, b: &Rect) -> Option<(CollisionHit, f32)> {
    let overlap = a.intersection(b)?;
    let away = a.middle() - b.middle();
    let (normal, depth) = if overlap.width() < overlap.height() {
        let x = if away.x < 0.0 { -1.0 } else { 1.0 };
        (Vec2::new(x, 0.0), overlap.width())
    } else {
        let y = if away.y < 0.0 { -1.0 } else { 1.0 };
        (Vec2::new(0.0, y), overlap.height())
    };
    Some((CollisionHit::new(normal, overlap.middle()), depth))
}

pub fn collision_detector(
    query: Query<(Entity, &MapPosition, &BoxCollider, Option<&CollisionGroup>)>,
    mut writer: MessageWriter<CollisionEvent>,
) {
    for [(a, pos_a, box_a, group_a), (b, pos_b, box_b, group_b)] in query.iter_combinations() {
        let group_a = group_a.copied().unwrap_or_default();
        let group_b = group_b.copied().unwrap_or_default();
        if !group_a.interacts_with(group_b) {
            continue;
        }
        let rect_a = box_a.aabb(pos_a.pos);
        let rect_b = box_b.aabb(pos_b.pos);
        if let Some((hit_a, depth)) = contact_between(&rect_a, &rect_b) {
            writer.write(CollisionEvent {
                a,
                b,
                hit_a,
                hit_b: hit_a.flipped(),
                depth,
            });
        }
    }
}
