//! Ground walker.
//!
//! Walks at a constant speed in its facing direction, turns around when it
//! bumps into a wall or another badguy, and optionally turns at ledges deeper
//! than `max_drop_height`. Stomping it squishes it; it can be frozen.

use log::debug;

use crate::components::badguy::behavior::BadGuyBehavior;
use crate::components::badguy::core::{BadGuyCore, StatusEffect};
use crate::components::badguy::env::BadGuyEnv;
use crate::components::collision::{
    BadGuyContact, CollisionHit, HitResponse, Squisher, tile_attributes,
};

#[derive(Debug, Clone)]
pub struct WalkingBadGuy {
    /// Horizontal speed in pixels per second.
    pub walk_speed: f32,
    /// Deepest drop, in pixels, the walker will step off. `None` never turns
    /// at ledges.
    pub max_drop_height: Option<i32>,
}

impl WalkingBadGuy {
    pub fn new(walk_speed: f32) -> Self {
        Self {
            walk_speed,
            max_drop_height: None,
        }
    }

    /// Turn around at ledges deeper than `height` pixels.
    pub fn with_max_drop_height(mut self, height: i32) -> Self {
        self.max_drop_height = Some(height.max(0));
        self
    }

    /// Frozen and burning walkers keep still.
    fn walk(&self, core: &mut BadGuyCore) {
        if core.status() != StatusEffect::None {
            return;
        }
        core.physic.set_velocity_x(core.dir.sign() * self.walk_speed);
    }

    fn facing_into(core: &BadGuyCore, hit: &CollisionHit) -> bool {
        core.status() == StatusEffect::None
            && ((hit.left() && core.dir.sign() < 0.0) || (hit.right() && core.dir.sign() > 0.0))
    }

    fn turn_around(&self, core: &mut BadGuyCore) {
        core.dir = core.dir.flipped();
        self.walk(core);
        debug!("walker '{}' turns {}", core.sprite_name, core.dir);
    }
}

impl BadGuyBehavior for WalkingBadGuy {
    fn kind(&self) -> &'static str {
        "walking"
    }

    fn initialize(&mut self, core: &mut BadGuyCore) {
        self.walk(core);
    }

    fn activate(&mut self, core: &mut BadGuyCore, _env: &mut BadGuyEnv<'_>) {
        self.walk(core);
    }

    fn active_update(&mut self, core: &mut BadGuyCore, env: &mut BadGuyEnv<'_>, elapsed_time: f32) {
        let at_ledge = self
            .max_drop_height
            .is_some_and(|height| core.on_ground() && core.might_fall(env, height + 1));
        if at_ledge {
            self.turn_around(core);
        }
        self.walk(core);
        core.integrate_physics(elapsed_time);
    }

    fn collision_solid(&mut self, core: &mut BadGuyCore, hit: &CollisionHit) {
        if hit.top() || hit.bottom() {
            core.physic.set_velocity_y(0.0);
        }
        if Self::facing_into(core, hit) {
            self.turn_around(core);
        }
    }

    fn collision_badguy(
        &mut self,
        core: &mut BadGuyCore,
        _env: &mut BadGuyEnv<'_>,
        _other: &BadGuyContact,
        hit: &CollisionHit,
    ) -> HitResponse {
        if Self::facing_into(core, hit) {
            self.turn_around(core);
        }
        HitResponse::Continue
    }

    fn collision_squished(
        &mut self,
        core: &mut BadGuyCore,
        env: &mut BadGuyEnv<'_>,
        squisher: &Squisher,
    ) -> bool {
        if core.is_frozen() {
            return core.default_collision_squished(env.scripts, squisher);
        }
        core.kill_squished(env.scripts, squisher);
        true
    }

    /// Hazard tiles burn, freeze or kill the walker.
    fn collision_tile(&mut self, core: &mut BadGuyCore, env: &mut BadGuyEnv<'_>, attributes: u32) {
        if attributes & tile_attributes::HURTS == 0 {
            return;
        }
        if attributes & tile_attributes::FIRE != 0 {
            core.ignite(self.is_flammable());
        } else if attributes & tile_attributes::ICE != 0 {
            core.freeze(self.is_freezable());
        } else {
            core.kill_fall(env.scripts);
        }
    }

    fn is_freezable(&self) -> bool {
        true
    }
}
