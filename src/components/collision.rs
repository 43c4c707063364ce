//! Collision vocabulary shared by the detector and the badguy handlers.
//!
//! The detector produces a [`CollisionHit`] for each participant of an
//! overlapping pair. Handlers answer with one of the closed set of
//! [`HitResponse`] values and never invent new kinds.
//!
//! Partners are classified once, into a [`CollisionPartner`], before any
//! handler runs. The variants carry snapshots of the partner's state, never
//! references, so a handler cannot reach into an entity that another handler
//! already marked for removal during the same pass.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::components::boxcollider::Rect;
use crate::components::bullet::BulletKind;

/// How far a normal must lean along an axis to count as facing that way.
pub const NORMAL_THRESHOLD: f32 = 0.5;

/// Contact information, expressed from the receiver's point of view.
///
/// `normal` points away from the partner, towards the receiver. With y growing
/// downward, an entity standing on a floor receives a normal of `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CollisionHit {
    pub normal: Vec2,
    pub point: Vec2,
}

impl CollisionHit {
    pub fn new(normal: Vec2, point: Vec2) -> Self {
        Self { normal, point }
    }

    /// The partner is below us: we rest on top of it.
    pub fn bottom(&self) -> bool {
        self.normal.y < -NORMAL_THRESHOLD
    }

    /// The partner is above us.
    pub fn top(&self) -> bool {
        self.normal.y > NORMAL_THRESHOLD
    }

    /// The partner is to our left.
    pub fn left(&self) -> bool {
        self.normal.x > NORMAL_THRESHOLD
    }

    /// The partner is to our right.
    pub fn right(&self) -> bool {
        self.normal.x < -NORMAL_THRESHOLD
    }

    /// Same contact seen from the partner's side.
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            point: self.point,
        }
    }
}

/// What the collision resolver should do after a handler ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitResponse {
    /// Resolve normally; the partner is a regular obstacle.
    Continue,
    /// Keep moving through the partner, as if no solid contact happened.
    ForceMove,
    /// Stop resolving this pair for the rest of the tick.
    AbortMove,
}

/// Which other objects an entity interacts with.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionGroup {
    /// Takes part in no collisions.
    Disabled,
    /// Collides with static geometry only (squished, ignited bodies).
    MovingOnlyStatic,
    /// Moving object that others treat as static (frozen badguys).
    MovingStatic,
    /// Regular moving object.
    #[default]
    Moving,
    /// Terrain.
    Static,
    /// Overlap-only object (pickups, triggers).
    Touchable,
}

impl CollisionGroup {
    /// Whether two groups produce a collision at all.
    pub fn interacts_with(self, other: CollisionGroup) -> bool {
        use CollisionGroup::*;
        match (self, other) {
            (Disabled, _) | (_, Disabled) => false,
            (Static, Static) => false,
            (MovingOnlyStatic, Static) | (Static, MovingOnlyStatic) => true,
            (MovingOnlyStatic, _) | (_, MovingOnlyStatic) => false,
            _ => true,
        }
    }
}

/// Bits carried by special tiles and passed to `collision_tile`.
pub mod tile_attributes {
    pub const SOLID: u32 = 0x0001;
    pub const UNISOLID: u32 = 0x0002;
    pub const HURTS: u32 = 0x0010;
    pub const FIRE: u32 = 0x0020;
    pub const ICE: u32 = 0x0040;
    pub const WATER: u32 = 0x0080;
}

/// Snapshot of a player-controlled actor taking part in a collision.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlayerContact {
    pub bbox: Rect,
    pub invincible: bool,
    /// Player turned to stone: crushes badguys and cannot be hurt.
    pub stone: bool,
    pub buttjump: bool,
}

/// Snapshot of another badguy taking part in a collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadGuyContact {
    pub bbox: Rect,
    pub active: bool,
    pub group: CollisionGroup,
}

/// Snapshot of a projectile taking part in a collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulletContact {
    pub bbox: Rect,
    pub kind: BulletKind,
}

/// The closed set of partner kinds a badguy reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionPartner {
    Player(PlayerContact),
    Solid,
    BadGuy(BadGuyContact),
    Bullet(BulletContact),
    Other,
}

/// Whatever squished a badguy: only players bounce afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Squisher {
    Player(PlayerContact),
    BadGuy(BadGuyContact),
}

impl Squisher {
    pub fn is_player(&self) -> bool {
        matches!(self, Squisher::Player(_))
    }

    pub fn does_buttjump(&self) -> bool {
        matches!(self, Squisher::Player(p) if p.buttjump)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upward_normal_is_bottom_contact() {
        let hit = CollisionHit::new(Vec2::new(0.0, -1.0), Vec2::ZERO);
        assert!(hit.bottom());
        assert!(!hit.top());
        assert!(hit.flipped().top());
    }

    #[test]
    fn shallow_slope_still_counts_as_floor() {
        let n = Vec2::new(0.6, -0.8);
        let hit = CollisionHit::new(n, Vec2::ZERO);
        assert!(hit.bottom());
        assert!(hit.left());
    }

    #[test]
    fn wall_normal_is_not_floor() {
        let hit = CollisionHit::new(Vec2::new(-1.0, 0.0), Vec2::ZERO);
        assert!(!hit.bottom());
        assert!(hit.right());
    }

    #[test]
    fn group_interaction_table() {
        use CollisionGroup::*;
        assert!(!Disabled.interacts_with(Moving));
        assert!(MovingOnlyStatic.interacts_with(Static));
        assert!(!MovingOnlyStatic.interacts_with(Moving));
        assert!(Moving.interacts_with(MovingStatic));
        assert!(!Static.interacts_with(Static));
        assert!(Touchable.interacts_with(Moving));
    }
}
