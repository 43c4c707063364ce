//! Static terrain.

use bevy_ecs::prelude::Component;

use crate::components::collision::tile_attributes;

/// Static terrain taking part in collision detection.
///
/// `attributes` holds [`tile_attributes`] bits. Anything beyond `SOLID` and
/// `UNISOLID` makes overlapping badguys receive a `collision_tile` call.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solid {
    pub attributes: u32,
}

impl Default for Solid {
    fn default() -> Self {
        Self {
            attributes: tile_attributes::SOLID,
        }
    }
}

impl Solid {
    pub fn with_attributes(attributes: u32) -> Self {
        Self {
            attributes: attributes | tile_attributes::SOLID,
        }
    }

    /// Attribute bits other than plain solidity.
    pub fn special_attributes(&self) -> u32 {
        self.attributes & !(tile_attributes::SOLID | tile_attributes::UNISOLID)
    }
}
