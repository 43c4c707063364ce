//! Hostile entities.
//!
//! A [`BadGuy`] pairs the shared [`BadGuyCore`] state machine with a boxed
//! [`BadGuyBehavior`] that encodes one kind of enemy. The core owns the
//! lifecycle (INIT, INACTIVE, ACTIVE, then SQUISHED or FALLING for good), the
//! status effect, physics and the dwell timer. The behaviour only fills in
//! hooks.
//!
//! # Tick protocol
//!
//! The engine calls [`BadGuy::update`] for every badguy, then runs collision
//! detection, then calls [`BadGuy::collision`] once per overlapping partner.
//! Partners arrive already classified as a [`CollisionPartner`] snapshot.
//! Effects on the partner (hurt or bounce a player, remove a bullet) are
//! queued and collected with [`BadGuy::drain_effects`]. Removal is only ever
//! flagged, never performed here.
//!
//! Submodules:
//! - [`behavior`] – the hook trait with its default reactions
//! - [`core`] – shared state and helpers
//! - [`env`] – borrowed collaborators passed into every call
//! - [`flying`] – path-following flyer
//! - [`walking`] – ground walker that turns at walls and ledges

pub mod behavior;
pub mod core;
pub mod env;
pub mod flying;
pub mod walking;

use bevy_ecs::prelude::Component;
use glam::Vec2;
use smallvec::SmallVec;

pub use self::behavior::BadGuyBehavior;
pub use self::core::{BadGuyCore, BadGuyState, PartnerEffect, StatusEffect};
pub use self::env::BadGuyEnv;

use self::core::SQUISH_TOLERANCE;
use crate::components::collision::{
    BadGuyContact, CollisionGroup, CollisionHit, CollisionPartner, HitResponse, Squisher,
};
use crate::resources::scripts::ScriptRunner;

#[derive(Component, Debug)]
pub struct BadGuy {
    core: BadGuyCore,
    behavior: Box<dyn BadGuyBehavior>,
}

impl BadGuy {
    pub fn new(core: BadGuyCore, behavior: impl BadGuyBehavior + 'static) -> Self {
        Self {
            core,
            behavior: Box::new(behavior),
        }
    }

    pub fn core(&self) -> &BadGuyCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut BadGuyCore {
        &mut self.core
    }

    pub fn behavior(&self) -> &dyn BadGuyBehavior {
        self.behavior.as_ref()
    }

    pub fn kind(&self) -> &'static str {
        self.behavior.kind()
    }

    pub fn state(&self) -> BadGuyState {
        self.core.state()
    }

    /// Snapshot other badguys see when they collide with us.
    pub fn contact(&self) -> BadGuyContact {
        BadGuyContact {
            bbox: self.core.bbox(),
            active: self.core.is_active(),
            group: self.core.group(),
        }
    }

    pub fn is_flammable(&self) -> bool {
        self.behavior.is_flammable()
    }

    pub fn is_freezable(&self) -> bool {
        self.behavior.is_freezable()
    }

    pub fn can_break(&self) -> bool {
        self.behavior.can_break()
    }

    pub fn ignite(&mut self) -> bool {
        let flammable = self.behavior.is_flammable();
        self.core.ignite(flammable)
    }

    pub fn extinguish(&mut self) -> bool {
        self.core.extinguish()
    }

    pub fn freeze(&mut self) -> bool {
        let freezable = self.behavior.is_freezable();
        self.core.freeze(freezable)
    }

    pub fn unfreeze(&mut self) -> bool {
        self.core.unfreeze()
    }

    pub fn kill_fall(&mut self, scripts: &mut dyn ScriptRunner) {
        self.core.kill_fall(scripts);
    }

    pub fn kill_squished(&mut self, scripts: &mut dyn ScriptRunner, squisher: &Squisher) {
        self.core.kill_squished(scripts, squisher);
    }

    pub fn drain_effects(&mut self) -> SmallVec<[PartnerEffect; 2]> {
        self.core.drain_effects()
    }

    /// Advance one tick.
    pub fn update(&mut self, elapsed_time: f32, env: &mut BadGuyEnv<'_>) {
        let Self { core, behavior } = self;
        core.set_now(env.now);
        core.set_movement(Vec2::ZERO);

        if !core.is_initialized() {
            behavior.initialize(core);
            core.mark_initialized();
        }

        if core.state() == BadGuyState::Active && !core.should_be_active(env) {
            behavior.deactivate(core);
            core.set_state(BadGuyState::Inactive);
        }

        if core.state().is_terminal() && core.is_offscreen(env) {
            core.remove_me();
        }
        if core.is_removed() {
            core.set_active_flag(false);
            return;
        }

        if core.is_ignited() && core.check_state_timer() {
            core.kill_fall(env.scripts);
        }

        match core.state() {
            BadGuyState::Active => {
                core.set_active_flag(true);
                if core.status() == StatusEffect::None {
                    behavior.active_update(core, env, elapsed_time);
                } else {
                    core.integrate_physics(elapsed_time);
                }
            }
            BadGuyState::Init | BadGuyState::Inactive => {
                core.set_active_flag(false);
                behavior.inactive_update(core, env, elapsed_time);
                Self::try_activate(core, behavior.as_mut(), env);
            }
            BadGuyState::Squished => {
                core.set_active_flag(false);
                if core.check_state_timer() {
                    core.remove_me();
                } else {
                    core.integrate_physics(elapsed_time);
                }
            }
            BadGuyState::Falling => {
                core.set_active_flag(false);
                core.integrate_physics(elapsed_time);
            }
        }

        core.apply_movement();
        core.clear_on_ground();
    }

    fn try_activate(
        core: &mut BadGuyCore,
        behavior: &mut dyn BadGuyBehavior,
        env: &mut BadGuyEnv<'_>,
    ) {
        if !core.should_be_active(env) {
            if core.state() == BadGuyState::Init {
                core.set_state(BadGuyState::Inactive);
            }
            return;
        }
        core.face_nearest_player(env);
        core.set_state(BadGuyState::Active);
        behavior.activate(core, env);
    }

    /// React to one overlapping partner.
    pub fn collision(
        &mut self,
        partner: &CollisionPartner,
        hit: &CollisionHit,
        env: &mut BadGuyEnv<'_>,
    ) -> HitResponse {
        let Self { core, behavior } = self;

        // Terrain matters to inactive and squished badguys too.
        if let CollisionPartner::Solid = partner {
            return match core.state() {
                BadGuyState::Init | BadGuyState::Falling => HitResponse::ForceMove,
                _ => {
                    core.update_on_ground_flag(hit);
                    behavior.collision_solid(core, hit);
                    HitResponse::Continue
                }
            };
        }

        if !core.is_active() || core.state().is_terminal() {
            return HitResponse::AbortMove;
        }

        match partner {
            CollisionPartner::BadGuy(other) => {
                let from_above = other.bbox.bottom() < core.bbox().top() + SQUISH_TOLERANCE;
                if other.active
                    && other.group == CollisionGroup::Moving
                    && from_above
                    && behavior.collision_squished(core, env, &Squisher::BadGuy(*other))
                {
                    return HitResponse::AbortMove;
                }
                behavior.collision_badguy(core, env, other, hit)
            }
            CollisionPartner::Player(player) => {
                if player.bbox.bottom() < core.bbox().top() + SQUISH_TOLERANCE {
                    if player.stone {
                        core.kill_fall(env.scripts);
                        return HitResponse::ForceMove;
                    }
                    if behavior.collision_squished(core, env, &Squisher::Player(*player)) {
                        return HitResponse::ForceMove;
                    }
                }
                if player.stone {
                    core.update_on_ground_flag(hit);
                    behavior.collision_solid(core, hit);
                    return HitResponse::ForceMove;
                }
                behavior.collision_player(core, env, player, hit)
            }
            CollisionPartner::Bullet(bullet) => behavior.collision_bullet(core, bullet, hit),
            CollisionPartner::Solid | CollisionPartner::Other => HitResponse::ForceMove,
        }
    }

    /// Overlap with a tile carrying special attributes.
    pub fn collision_tile(&mut self, attributes: u32, env: &mut BadGuyEnv<'_>) {
        if self.core.state().is_terminal() {
            return;
        }
        self.behavior.collision_tile(&mut self.core, env, attributes);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::core::LAYER_FOREMOST;
    use super::walking::WalkingBadGuy;
    use super::*;
    use crate::components::boxcollider::Rect;
    use crate::components::bullet::BulletKind;
    use crate::components::collision::{BulletContact, PlayerContact};
    use crate::components::direction::Direction;
    use crate::resources::camera2d::Camera2D;
    use crate::resources::players::ActorRegistry;
    use crate::resources::scripts::ScriptQueue;
    use crate::resources::solidmap::SolidMap;

    pub(crate) struct OnePlayer(pub Option<PlayerContact>);

    impl ActorRegistry for OnePlayer {
        fn nearest(&self, _position: Vec2) -> Option<PlayerContact> {
            self.0
        }
    }

    /// Stand-ins for every collaborator, plus a clock.
    pub(crate) struct Harness {
        pub players: OnePlayer,
        pub camera: Camera2D,
        pub solids: SolidMap,
        pub scripts: ScriptQueue,
        pub now: f32,
    }

    impl Harness {
        pub fn new() -> Self {
            Self {
                players: OnePlayer(None),
                camera: Camera2D::new(800.0, 600.0),
                solids: SolidMap::default(),
                scripts: ScriptQueue::default(),
                now: 0.0,
            }
        }

        pub fn place_player(&mut self, x: f32, y: f32) {
            self.players.0 = Some(player_at(x, y));
        }

        pub fn env(&mut self) -> BadGuyEnv<'_> {
            BadGuyEnv {
                now: self.now,
                players: &self.players,
                viewport: &self.camera,
                solids: &self.solids,
                scripts: &mut self.scripts,
            }
        }

        pub fn tick(&mut self, badguy: &mut BadGuy, dt: f32) {
            self.now += dt;
            let mut env = self.env();
            badguy.update(dt, &mut env);
        }

        pub fn collide(&mut self, badguy: &mut BadGuy, partner: CollisionPartner, normal: Vec2) -> HitResponse {
            let hit = CollisionHit::new(normal, badguy.core().bbox().middle());
            let mut env = self.env();
            badguy.collision(&partner, &hit, &mut env)
        }
    }

    pub(crate) fn player_at(x: f32, y: f32) -> PlayerContact {
        PlayerContact {
            bbox: Rect::from_pos_size(Vec2::new(x, y), Vec2::new(32.0, 32.0)),
            ..Default::default()
        }
    }

    #[derive(Debug, Default)]
    struct Plain {
        inits: Arc<AtomicUsize>,
        activations: Arc<AtomicUsize>,
    }

    impl BadGuyBehavior for Plain {
        fn kind(&self) -> &'static str {
            "plain"
        }

        fn initialize(&mut self, _core: &mut BadGuyCore) {
            self.inits.fetch_add(1, Ordering::SeqCst);
        }

        fn activate(&mut self, _core: &mut BadGuyCore, _env: &mut BadGuyEnv<'_>) {
            self.activations.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn plain_at(x: f32, y: f32) -> BadGuy {
        let core = BadGuyCore::new(Vec2::new(x, y), Vec2::new(32.0, 32.0), Direction::Left, "plain");
        BadGuy::new(core, Plain::default())
    }

    fn walker_at(x: f32, y: f32) -> BadGuy {
        let core = BadGuyCore::new(Vec2::new(x, y), Vec2::new(32.0, 32.0), Direction::Left, "walker")
            .with_dead_script("on_walker_dead");
        BadGuy::new(core, WalkingBadGuy::new(80.0))
    }

    /// Badguy that already had one full active tick.
    fn active(h: &mut Harness, mut badguy: BadGuy) -> BadGuy {
        let pos = badguy.core().bbox().min;
        h.place_player(pos.x + 200.0, pos.y);
        h.tick(&mut badguy, 0.01);
        h.tick(&mut badguy, 0.01);
        assert!(badguy.core().is_active());
        badguy
    }

    fn stomp_from_above(badguy: &BadGuy) -> PlayerContact {
        let top = badguy.core().bbox().top();
        PlayerContact {
            bbox: Rect::from_pos_size(Vec2::new(badguy.core().bbox().min.x, top - 28.0), Vec2::splat(32.0)),
            ..Default::default()
        }
    }

    fn side_contact(badguy: &BadGuy) -> PlayerContact {
        PlayerContact {
            bbox: badguy.core().bbox().translated(Vec2::new(30.0, 0.0)),
            ..Default::default()
        }
    }

    #[test]
    fn initialize_runs_once_and_waits_without_players() {
        let mut h = Harness::new();
        let inits = Arc::new(AtomicUsize::new(0));
        let core = BadGuyCore::new(Vec2::new(100.0, 100.0), Vec2::splat(32.0), Direction::Left, "plain");
        let mut badguy = BadGuy::new(
            core,
            Plain {
                inits: Arc::clone(&inits),
                ..Default::default()
            },
        );
        assert_eq!(badguy.state(), BadGuyState::Init);

        for _ in 0..5 {
            h.tick(&mut badguy, 0.1);
        }
        assert_eq!(badguy.state(), BadGuyState::Inactive);
        assert!(badguy.core().is_initialized());
        assert_eq!(inits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn player_in_range_activates_and_flag_follows_next_tick() {
        let mut h = Harness::new();
        let activations = Arc::new(AtomicUsize::new(0));
        let core = BadGuyCore::new(Vec2::new(100.0, 100.0), Vec2::splat(32.0), Direction::Left, "plain");
        let mut badguy = BadGuy::new(
            core,
            Plain {
                activations: Arc::clone(&activations),
                ..Default::default()
            },
        );
        h.place_player(5000.0, 100.0);
        h.tick(&mut badguy, 0.01);
        assert_eq!(badguy.state(), BadGuyState::Inactive);

        h.place_player(300.0, 100.0);
        h.tick(&mut badguy, 0.01);
        assert_eq!(badguy.state(), BadGuyState::Active);
        assert!(!badguy.core().is_active());
        assert_eq!(badguy.core().group(), CollisionGroup::Moving);

        h.tick(&mut badguy, 0.01);
        assert!(badguy.core().is_active());
        assert_eq!(activations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn player_out_of_range_deactivates() {
        let mut h = Harness::new();
        let mut badguy = active(&mut h, plain_at(100.0, 100.0));
        h.place_player(5000.0, 100.0);
        h.tick(&mut badguy, 0.01);
        assert_eq!(badguy.state(), BadGuyState::Inactive);
        assert_eq!(badguy.core().group(), CollisionGroup::Disabled);
    }

    #[test]
    fn active_group_follows_setting_and_status() {
        let mut h = Harness::new();
        let mut badguy = active(&mut h, walker_at(100.0, 100.0));
        badguy
            .core_mut()
            .set_colgroup_active(CollisionGroup::MovingStatic);
        assert_eq!(badguy.core().group(), CollisionGroup::MovingStatic);

        badguy.core_mut().set_colgroup_active(CollisionGroup::Moving);
        assert!(badguy.ignite());
        assert_eq!(badguy.core().group(), CollisionGroup::MovingOnlyStatic);
        assert!(badguy.extinguish());
        assert_eq!(badguy.core().group(), CollisionGroup::Moving);
        assert!(badguy.freeze());
        assert_eq!(badguy.core().group(), CollisionGroup::MovingStatic);
    }

    #[test]
    fn start_position_is_kept_apart_from_position() {
        let mut badguy = plain_at(100.0, 100.0);
        badguy.core_mut().set_position(Vec2::new(150.0, 90.0));
        assert_eq!(badguy.core().start_position(), Vec2::new(100.0, 100.0));
        badguy.core_mut().set_start_position(Vec2::new(10.0, 20.0));
        assert_eq!(badguy.core().start_position(), Vec2::new(10.0, 20.0));
        assert_eq!(badguy.core().position(), Vec2::new(150.0, 90.0));
    }

    #[test]
    fn auto_direction_faces_the_player() {
        let mut h = Harness::new();
        let core = BadGuyCore::new(Vec2::new(100.0, 100.0), Vec2::splat(32.0), Direction::Auto, "plain");
        let mut badguy = BadGuy::new(core, Plain::default());
        h.place_player(400.0, 100.0);
        h.tick(&mut badguy, 0.01);
        assert_eq!(badguy.core().dir, Direction::Right);
    }

    #[test]
    fn stomp_squishes_then_removes_after_dwell() {
        let mut h = Harness::new();
        // Big enough that the squished body never drops out of view.
        h.camera = Camera2D::new(100_000.0, 100_000.0);
        let mut badguy = active(&mut h, walker_at(100.0, 100.0));
        let stomp = stomp_from_above(&badguy);

        let response = h.collide(&mut badguy, CollisionPartner::Player(stomp), Vec2::new(0.0, 1.0));
        assert_eq!(response, HitResponse::ForceMove);
        assert_eq!(badguy.state(), BadGuyState::Squished);
        assert_eq!(badguy.core().group(), CollisionGroup::MovingOnlyStatic);
        assert_eq!(badguy.drain_effects().as_slice(), &[PartnerEffect::BouncePlayer]);
        assert_eq!(h.scripts.pending(), ["on_walker_dead".to_string()]);

        h.tick(&mut badguy, 1.0);
        assert!(!badguy.core().is_removed());
        h.tick(&mut badguy, 1.5);
        assert!(badguy.core().is_removed());
    }

    #[test]
    fn side_contact_hurts_the_player() {
        let mut h = Harness::new();
        let mut badguy = active(&mut h, walker_at(100.0, 100.0));
        let player = side_contact(&badguy);
        let response = h.collide(&mut badguy, CollisionPartner::Player(player), Vec2::new(-1.0, 0.0));
        assert_eq!(response, HitResponse::ForceMove);
        assert_eq!(badguy.state(), BadGuyState::Active);
        assert_eq!(badguy.drain_effects().as_slice(), &[PartnerEffect::HurtPlayer]);
    }

    #[test]
    fn invincible_player_knocks_badguy_off() {
        let mut h = Harness::new();
        let mut badguy = active(&mut h, walker_at(100.0, 100.0));
        let mut player = side_contact(&badguy);
        player.invincible = true;
        let response = h.collide(&mut badguy, CollisionPartner::Player(player), Vec2::new(-1.0, 0.0));
        assert_eq!(response, HitResponse::AbortMove);
        assert_eq!(badguy.state(), BadGuyState::Falling);
        assert!(badguy.core().is_upside_down());
        assert_eq!(badguy.core().layer, LAYER_FOREMOST);
        assert!(badguy.drain_effects().is_empty());
    }

    #[test]
    fn stone_player_crushes_from_above_and_blocks_from_the_side() {
        let mut h = Harness::new();
        let mut badguy = active(&mut h, walker_at(100.0, 100.0));
        let mut side = side_contact(&badguy);
        side.stone = true;
        let response = h.collide(&mut badguy, CollisionPartner::Player(side), Vec2::new(-1.0, 0.0));
        assert_eq!(response, HitResponse::ForceMove);
        assert_eq!(badguy.state(), BadGuyState::Active);
        assert!(badguy.drain_effects().is_empty());

        let mut stomp = stomp_from_above(&badguy);
        stomp.stone = true;
        h.collide(&mut badguy, CollisionPartner::Player(stomp), Vec2::new(0.0, 1.0));
        assert_eq!(badguy.state(), BadGuyState::Falling);
    }

    #[test]
    fn inactive_badguy_ignores_players_but_not_terrain() {
        let mut h = Harness::new();
        let mut badguy = plain_at(100.0, 100.0);
        h.tick(&mut badguy, 0.01);
        let player = side_contact(&badguy);
        let response = h.collide(&mut badguy, CollisionPartner::Player(player), Vec2::new(-1.0, 0.0));
        assert_eq!(response, HitResponse::AbortMove);
        assert!(badguy.drain_effects().is_empty());

        let response = h.collide(&mut badguy, CollisionPartner::Solid, Vec2::new(0.0, -1.0));
        assert_eq!(response, HitResponse::Continue);
        assert!(badguy.core().on_ground());
    }

    #[test]
    fn ground_flag_tracks_only_floor_contacts() {
        let mut h = Harness::new();
        let mut badguy = active(&mut h, plain_at(100.0, 100.0));

        h.collide(&mut badguy, CollisionPartner::Solid, Vec2::new(0.0, -1.0));
        assert!(badguy.core().on_ground());
        assert_eq!(badguy.core().floor_normal(), Vec2::new(0.0, -1.0));

        h.collide(&mut badguy, CollisionPartner::Solid, Vec2::new(1.0, 0.0));
        assert!(!badguy.core().on_ground());

        h.collide(&mut badguy, CollisionPartner::Solid, Vec2::new(0.0, -1.0));
        h.tick(&mut badguy, 0.01);
        assert!(!badguy.core().on_ground());
    }

    #[test]
    fn terminal_states_are_never_left() {
        let mut h = Harness::new();
        let mut badguy = active(&mut h, plain_at(100.0, 100.0));
        badguy.kill_fall(&mut h.scripts);
        assert_eq!(badguy.state(), BadGuyState::Falling);

        h.place_player(150.0, 100.0);
        for _ in 0..3 {
            h.tick(&mut badguy, 0.01);
            assert_eq!(badguy.state(), BadGuyState::Falling);
        }
        badguy.core_mut().set_state(BadGuyState::Active);
        assert_eq!(badguy.state(), BadGuyState::Falling);
        let player = side_contact(&badguy);
        assert_eq!(
            h.collide(&mut badguy, CollisionPartner::Player(player), Vec2::new(-1.0, 0.0)),
            HitResponse::AbortMove
        );
    }

    #[test]
    fn falling_badguy_is_removed_once_off_screen() {
        let mut h = Harness::new();
        let mut badguy = active(&mut h, plain_at(100.0, 500.0));
        badguy.kill_fall(&mut h.scripts);
        for _ in 0..200 {
            h.tick(&mut badguy, 0.02);
            if badguy.core().is_removed() {
                break;
            }
        }
        assert!(badguy.core().is_removed());
        assert!(badguy.core().bbox().top() > 600.0);
    }

    #[test]
    fn ignite_twice_is_a_noop_and_burning_ends_in_a_fall() {
        let mut h = Harness::new();
        let mut badguy = active(&mut h, plain_at(100.0, 100.0));
        assert!(badguy.ignite());
        assert!(!badguy.ignite());
        assert_eq!(badguy.core().status(), StatusEffect::Ignited);
        assert_eq!(badguy.core().group(), CollisionGroup::MovingOnlyStatic);

        h.tick(&mut badguy, 0.5);
        assert_eq!(badguy.state(), BadGuyState::Active);
        h.tick(&mut badguy, 0.6);
        assert_eq!(badguy.state(), BadGuyState::Falling);
        assert_eq!(badguy.core().status(), StatusEffect::None);
    }

    #[test]
    fn ignite_then_extinguish_resumes_walking() {
        let mut h = Harness::new();
        let mut badguy = active(&mut h, walker_at(100.0, 100.0));
        assert!(badguy.ignite());
        assert!(badguy.extinguish());
        assert_eq!(badguy.core().status(), StatusEffect::None);
        assert!(!badguy.extinguish());

        h.tick(&mut badguy, 0.01);
        assert!((badguy.core().physic.velocity.x + 80.0).abs() < 1e-4);
        assert!(badguy.core().movement().x < 0.0);
    }

    #[test]
    fn freeze_needs_a_freezable_badguy_and_loses_to_fire() {
        let mut h = Harness::new();
        let mut plain = active(&mut h, plain_at(100.0, 100.0));
        assert!(!plain.freeze());
        assert_eq!(plain.core().status(), StatusEffect::None);

        let mut walker = active(&mut h, walker_at(100.0, 100.0));
        assert!(walker.ignite());
        assert!(!walker.freeze());
        assert_eq!(walker.core().status(), StatusEffect::Ignited);

        walker.extinguish();
        assert!(walker.freeze());
        assert!(!walker.ignite());
        assert_eq!(walker.core().group(), CollisionGroup::MovingStatic);
        assert!(walker.unfreeze());
        assert!(!walker.unfreeze());
    }

    #[test]
    fn bullets_follow_the_status_cascade() {
        let mut h = Harness::new();
        let mut walker = active(&mut h, walker_at(100.0, 100.0));
        let bullet = |kind| {
            CollisionPartner::Bullet(BulletContact {
                bbox: Rect::from_pos_size(Vec2::ZERO, Vec2::splat(8.0)),
                kind,
            })
        };

        assert_eq!(h.collide(&mut walker, bullet(BulletKind::Plain), Vec2::X), HitResponse::ForceMove);
        assert_eq!(walker.drain_effects().as_slice(), &[PartnerEffect::RicochetBullet]);

        h.collide(&mut walker, bullet(BulletKind::Ice), Vec2::X);
        assert!(walker.core().is_frozen());
        h.collide(&mut walker, bullet(BulletKind::Fire), Vec2::X);
        assert_eq!(walker.core().status(), StatusEffect::None);

        h.collide(&mut walker, bullet(BulletKind::Fire), Vec2::X);
        assert!(walker.core().is_ignited());
        walker.drain_effects();
        h.collide(&mut walker, bullet(BulletKind::Plain), Vec2::X);
        assert!(walker.core().is_ignited());
        assert_eq!(walker.drain_effects().as_slice(), &[PartnerEffect::RemoveBullet]);
        h.collide(&mut walker, bullet(BulletKind::Ice), Vec2::X);
        assert_eq!(walker.core().status(), StatusEffect::None);
    }

    #[test]
    fn frozen_badguy_breaks_only_under_a_buttjump() {
        let mut h = Harness::new();
        let mut walker = active(&mut h, walker_at(100.0, 100.0));
        walker.freeze();

        let mut stomp = stomp_from_above(&walker);
        h.collide(&mut walker, CollisionPartner::Player(stomp), Vec2::new(0.0, 1.0));
        assert_eq!(walker.state(), BadGuyState::Active);
        assert!(!walker.core().is_frozen());
        walker.drain_effects();

        walker.freeze();
        stomp.buttjump = true;
        h.collide(&mut walker, CollisionPartner::Player(stomp), Vec2::new(0.0, 1.0));
        assert_eq!(walker.state(), BadGuyState::Falling);
        assert_eq!(walker.drain_effects().as_slice(), &[PartnerEffect::BouncePlayer]);
    }

    #[test]
    fn moving_badguy_landing_on_top_squishes() {
        let mut h = Harness::new();
        let mut walker = active(&mut h, walker_at(100.0, 100.0));
        let falling_on = BadGuyContact {
            bbox: walker.core().bbox().translated(Vec2::new(0.0, -28.0)),
            active: true,
            group: CollisionGroup::Moving,
        };
        let response = h.collide(&mut walker, CollisionPartner::BadGuy(falling_on), Vec2::new(0.0, 1.0));
        assert_eq!(response, HitResponse::AbortMove);
        assert_eq!(walker.state(), BadGuyState::Squished);
        assert!(walker.drain_effects().is_empty());
    }

    #[test]
    fn plain_badguy_ignores_special_tiles() {
        let mut h = Harness::new();
        let mut badguy = active(&mut h, plain_at(100.0, 100.0));
        let mut env = h.env();
        badguy.collision_tile(crate::components::collision::tile_attributes::HURTS, &mut env);
        assert_eq!(badguy.state(), BadGuyState::Active);
    }

    #[test]
    fn unknown_partner_passes_through() {
        let mut h = Harness::new();
        let mut badguy = active(&mut h, plain_at(100.0, 100.0));
        assert_eq!(h.collide(&mut badguy, CollisionPartner::Other, Vec2::X), HitResponse::ForceMove);
        assert_eq!(badguy.state(), BadGuyState::Active);
    }
}
