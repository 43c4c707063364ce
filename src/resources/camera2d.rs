//! Shared 2D viewport.
//!
//! The camera decides what counts as "on screen" for badguy activation. Its
//! `margin` widens the visible area so badguys wake up slightly before they
//! scroll into view and are not put to sleep the moment they leave it.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

use crate::components::boxcollider::Rect;

/// On-screen test used by badguys.
pub trait Viewport {
    fn is_onscreen(&self, bbox: &Rect) -> bool;
}

/// ECS resource holding the visible world rectangle.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    /// Top-left corner of the view in world coordinates.
    pub target: Vec2,
    pub size: Vec2,
    pub margin: f32,
}

impl Camera2D {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            target: Vec2::ZERO,
            size: Vec2::new(width, height),
            margin: 0.0,
        }
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Visible rectangle without the margin.
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.target, self.size)
    }

    /// Centre the view on `point`.
    pub fn center_on(&mut self, point: Vec2) {
        self.target = point - self.size * 0.5;
    }
}

impl Viewport for Camera2D {
    fn is_onscreen(&self, bbox: &Rect) -> bool {
        let bounds = self.bounds();
        let area = Rect {
            min: bounds.min - Vec2::splat(self.margin),
            max: bounds.max + Vec2::splat(self.margin),
        };
        // Touching the edge counts as visible.
        bbox.min.x <= area.max.x
            && bbox.max.x >= area.min.x
            && bbox.min.y <= area.max.y
            && bbox.max.y >= area.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x: f32, y: f32) -> Rect {
        Rect::from_pos_size(Vec2::new(x, y), Vec2::splat(32.0))
    }

    #[test]
    fn box_inside_view_is_onscreen() {
        let cam = Camera2D::new(800.0, 600.0);
        assert!(cam.is_onscreen(&boxed(100.0, 100.0)));
        assert!(!cam.is_onscreen(&boxed(900.0, 100.0)));
    }

    #[test]
    fn margin_extends_view() {
        let cam = Camera2D::new(800.0, 600.0).with_margin(200.0);
        assert!(cam.is_onscreen(&boxed(900.0, 100.0)));
        assert!(!cam.is_onscreen(&boxed(1100.0, 100.0)));
    }

    #[test]
    fn center_on_moves_target() {
        let mut cam = Camera2D::new(800.0, 600.0);
        cam.center_on(Vec2::new(1000.0, 300.0));
        assert_eq!(cam.target, Vec2::new(600.0, 0.0));
        assert!(cam.is_onscreen(&boxed(1300.0, 100.0)));
    }
}
