//! Actor registry: where the players are this tick.
//!
//! Badguys never query the world for players directly. They ask an
//! [`ActorRegistry`], which the engine refreshes once per tick from the
//! [`Player`](crate::components::player::Player) entities. Tests hand in their
//! own registry.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::collision::PlayerContact;

/// Lookup of player-controlled actors.
pub trait ActorRegistry {
    /// The living player whose bounding-box centre is closest to `position`.
    fn nearest(&self, position: Vec2) -> Option<PlayerContact>;
}

/// Per-tick snapshot of every living player.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerRegistry {
    players: Vec<(Entity, PlayerContact)>,
}

impl PlayerRegistry {
    pub fn clear(&mut self) {
        self.players.clear();
    }

    pub fn push(&mut self, entity: Entity, contact: PlayerContact) {
        self.players.push((entity, contact));
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Entity, PlayerContact)> {
        self.players.iter()
    }

    /// Entity of the nearest player, for systems that need to address it.
    pub fn nearest_entity(&self, position: Vec2) -> Option<Entity> {
        self.closest(position).map(|(e, _)| e)
    }

    fn closest(&self, position: Vec2) -> Option<(Entity, PlayerContact)> {
        self.players
            .iter()
            .min_by(|(_, a), (_, b)| {
                let da = a.bbox.middle().distance_squared(position);
                let db = b.bbox.middle().distance_squared(position);
                da.total_cmp(&db)
            })
            .copied()
    }
}

impl ActorRegistry for PlayerRegistry {
    fn nearest(&self, position: Vec2) -> Option<PlayerContact> {
        self.closest(position).map(|(_, c)| c)
    }
}

/// Registry with no players at all.
pub struct NoPlayers;

impl ActorRegistry for NoPlayers {
    fn nearest(&self, _position: Vec2) -> Option<PlayerContact> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::boxcollider::Rect;

    fn contact_at(x: f32, y: f32) -> PlayerContact {
        PlayerContact {
            bbox: Rect::from_pos_size(Vec2::new(x, y), Vec2::splat(10.0)),
            ..Default::default()
        }
    }

    #[test]
    fn nearest_picks_closest_centre() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let mut reg = PlayerRegistry::default();
        reg.push(a, contact_at(0.0, 0.0));
        reg.push(b, contact_at(100.0, 0.0));

        let found = reg.nearest(Vec2::new(90.0, 5.0)).unwrap();
        assert_eq!(found.bbox.min.x, 100.0);
        assert_eq!(reg.nearest_entity(Vec2::new(90.0, 5.0)), Some(b));
    }

    #[test]
    fn empty_registry_has_no_nearest() {
        let reg = PlayerRegistry::default();
        assert!(reg.nearest(Vec2::ZERO).is_none());
        assert!(NoPlayers.nearest(Vec2::ZERO).is_none());
    }
}
