//! Per-kind behaviour hooks.
//!
//! A badguy kind implements [`BadGuyBehavior`] and overrides only the hooks it
//! cares about. Every hook receives the shared [`BadGuyCore`] explicitly;
//! there is no base class to chain to. A hook that wants the base reaction
//! calls the matching `BadGuyCore::default_*` method itself.
//!
//! Ground tracking is not part of any hook. The dispatcher in
//! [`BadGuy::collision`](super::BadGuy::collision) updates the ground flag
//! before `collision_solid` runs, so overriding it can't break `on_ground`.

use std::fmt;

use crate::components::badguy::core::BadGuyCore;
use crate::components::badguy::env::BadGuyEnv;
use crate::components::collision::{
    BadGuyContact, BulletContact, CollisionHit, HitResponse, PlayerContact, Squisher,
};

pub trait BadGuyBehavior: fmt::Debug + Send + Sync {
    /// Short name for logs.
    fn kind(&self) -> &'static str;

    /// Runs once, before the first update of any kind.
    fn initialize(&mut self, _core: &mut BadGuyCore) {}

    /// Runs on every INACTIVE -> ACTIVE transition. `core.dir` is already
    /// resolved.
    fn activate(&mut self, _core: &mut BadGuyCore, _env: &mut BadGuyEnv<'_>) {}

    /// Runs on every ACTIVE -> INACTIVE transition.
    fn deactivate(&mut self, _core: &mut BadGuyCore) {}

    fn active_update(&mut self, core: &mut BadGuyCore, _env: &mut BadGuyEnv<'_>, elapsed_time: f32) {
        core.integrate_physics(elapsed_time);
    }

    fn inactive_update(
        &mut self,
        _core: &mut BadGuyCore,
        _env: &mut BadGuyEnv<'_>,
        _elapsed_time: f32,
    ) {
    }

    fn collision_solid(&mut self, core: &mut BadGuyCore, hit: &CollisionHit) {
        core.default_collision_solid(hit);
    }

    fn collision_player(
        &mut self,
        core: &mut BadGuyCore,
        env: &mut BadGuyEnv<'_>,
        player: &PlayerContact,
        _hit: &CollisionHit,
    ) -> HitResponse {
        core.default_collision_player(env.scripts, player)
    }

    fn collision_badguy(
        &mut self,
        _core: &mut BadGuyCore,
        _env: &mut BadGuyEnv<'_>,
        _other: &BadGuyContact,
        _hit: &CollisionHit,
    ) -> HitResponse {
        HitResponse::Continue
    }

    /// Something landed on top of us. Returns true if we got squished.
    fn collision_squished(
        &mut self,
        core: &mut BadGuyCore,
        env: &mut BadGuyEnv<'_>,
        squisher: &Squisher,
    ) -> bool {
        core.default_collision_squished(env.scripts, squisher)
    }

    fn collision_bullet(
        &mut self,
        core: &mut BadGuyCore,
        bullet: &BulletContact,
        _hit: &CollisionHit,
    ) -> HitResponse {
        core.default_collision_bullet(bullet, self.is_flammable(), self.is_freezable())
    }

    /// Overlap with a tile carrying special attributes.
    fn collision_tile(&mut self, _core: &mut BadGuyCore, _env: &mut BadGuyEnv<'_>, _attributes: u32) {}

    fn is_flammable(&self) -> bool {
        true
    }

    fn is_freezable(&self) -> bool {
        false
    }

    /// Can break bricks and similar breakable terrain.
    fn can_break(&self) -> bool {
        false
    }
}
