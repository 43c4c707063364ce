//! Path-following flyer.
//!
//! Ignores gravity and follows a [`PathWalker`] while active. Without a path
//! it just hovers. Flyers can't be frozen, so stomping them does nothing.

use glam::Vec2;

use crate::components::badguy::behavior::BadGuyBehavior;
use crate::components::badguy::core::BadGuyCore;
use crate::components::badguy::env::BadGuyEnv;
use crate::components::pathwalker::PathWalker;

#[derive(Debug, Clone, Default)]
pub struct FlyingBadGuy {
    walker: Option<PathWalker>,
}

impl FlyingBadGuy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(walker: PathWalker) -> Self {
        Self {
            walker: Some(walker),
        }
    }

    pub fn walker(&self) -> Option<&PathWalker> {
        self.walker.as_ref()
    }
}

impl BadGuyBehavior for FlyingBadGuy {
    fn kind(&self) -> &'static str {
        "flying"
    }

    /// Gravity off, and sit on the first node of the path, if there is one.
    fn initialize(&mut self, core: &mut BadGuyCore) {
        core.physic.enable_gravity(false);
        core.physic.set_velocity(Vec2::ZERO);
        if let Some(walker) = &self.walker {
            core.set_position(walker.last_pos());
        }
    }

    fn active_update(&mut self, core: &mut BadGuyCore, _env: &mut BadGuyEnv<'_>, elapsed_time: f32) {
        match &mut self.walker {
            Some(walker) => core.set_movement(walker.advance(elapsed_time)),
            None => core.integrate_physics(elapsed_time),
        }
    }
}
