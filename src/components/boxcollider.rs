//! Axis-aligned boxes.
//!
//! [`Rect`] is the plain value used for bounding boxes, viewport bounds and
//! sensor probes. [`BoxCollider`] is the component that gives an entity a
//! box relative to its [`MapPosition`](super::mapposition::MapPosition).

use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, `min` is the top-left corner (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Build from two corners in any order.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::from_corners(pos, pos + size)
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn middle(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Strict overlap; touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }

    /// Intersection of two rectangles, if they overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Rect {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        })
    }

    pub fn translated(&self, delta: Vec2) -> Rect {
        Rect {
            min: self.min + delta,
            max: self.max + delta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub offset: Vec2,
}

impl BoxCollider {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::ZERO,
        }
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// World-space box for an entity at `position`. Negative sizes are
    /// normalised.
    pub fn aabb(&self, position: Vec2) -> Rect {
        let p0 = position + self.offset;
        Rect::from_corners(p0, p0 + self.size)
    }

    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        self.aabb(position).overlaps(&other.aabb(other_position))
    }
}
