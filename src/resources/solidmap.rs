//! Static level geometry for sensor probes.
//!
//! Collision detection works on entities, but a "will I fall off this
//! ledge" probe needs to ask about an area where nothing may exist yet.
//! [`SolidMap`] keeps the static rectangles of the level for that purpose.

use bevy_ecs::prelude::Resource;

use crate::components::boxcollider::Rect;

/// Area queries against static geometry.
pub trait SolidProbe {
    /// True if no static geometry overlaps `area`.
    fn is_free_of_statics(&self, area: &Rect) -> bool;
}

#[derive(Resource, Debug, Clone, Default)]
pub struct SolidMap {
    rects: Vec<Rect>,
}

impl SolidMap {
    pub fn new(rects: Vec<Rect>) -> Self {
        Self { rects }
    }

    pub fn add(&mut self, rect: Rect) {
        self.rects.push(rect);
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }
}

impl SolidProbe for SolidMap {
    fn is_free_of_statics(&self, area: &Rect) -> bool {
        !self.rects.iter().any(|r| r.overlaps(area))
    }
}
