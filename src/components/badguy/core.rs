//! State shared by every badguy, independent of its behaviour.
//!
//! [`BadGuyCore`] owns the lifecycle state, status effect, physics body and
//! dwell timer. Behaviours receive it mutably in every hook and use its
//! helpers (`kill_squished`, `kill_fall`, `might_fall`, ...) to act.
//!
//! The `default_*` methods are the base reactions to collisions. Behaviours
//! that override a hook call them explicitly when they want the base
//! behaviour as well.

use glam::Vec2;
use log::debug;
use smallvec::SmallVec;

use crate::components::badguy::env::BadGuyEnv;
use crate::components::boxcollider::Rect;
use crate::components::bullet::BulletKind;
use crate::components::collision::{
    BulletContact, CollisionGroup, CollisionHit, HitResponse, PlayerContact, Squisher,
};
use crate::components::direction::Direction;
use crate::components::rigidbody::RigidBody;
use crate::components::timer::Timer;
use crate::resources::gameconfig::BadGuyTuning;
use crate::resources::scripts::ScriptRunner;

/// Default drawing layer for badguys.
pub const LAYER_OBJECTS: i32 = 50;
/// Layer a falling badguy is moved to, above every tilemap.
pub const LAYER_FOREMOST: i32 = 500;
/// Vertical slack when deciding whether a partner landed on top of us.
pub const SQUISH_TOLERANCE: f32 = 16.0;

/// Lifecycle of a badguy. `Squished` and `Falling` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadGuyState {
    Init,
    Inactive,
    Active,
    Squished,
    Falling,
}

impl BadGuyState {
    pub fn is_terminal(self) -> bool {
        matches!(self, BadGuyState::Squished | BadGuyState::Falling)
    }
}

/// At most one status effect at a time. The first one applied wins: igniting
/// a frozen badguy or freezing a burning one does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusEffect {
    #[default]
    None,
    Ignited,
    Frozen,
}

/// Side effects a handler wants applied to its collision partner. The
/// collision system applies them after the handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartnerEffect {
    HurtPlayer,
    BouncePlayer,
    RemoveBullet,
    RicochetBullet,
}

#[derive(Debug, Clone)]
pub struct BadGuyCore {
    pub sprite_name: String,
    pub layer: i32,
    /// Counted in level statistics.
    pub count_me: bool,
    pub dead_script: Option<String>,
    /// Current facing.
    pub dir: Direction,
    pub physic: RigidBody,
    start_position: Vec2,
    start_dir: Direction,
    bbox: Rect,
    movement: Vec2,
    state: BadGuyState,
    status: StatusEffect,
    is_initialized: bool,
    is_active_flag: bool,
    state_timer: Timer,
    on_ground_flag: bool,
    floor_normal: Vec2,
    colgroup_active: CollisionGroup,
    group: CollisionGroup,
    upside_down: bool,
    remove_me: bool,
    now: f32,
    tuning: BadGuyTuning,
    effects: SmallVec<[PartnerEffect; 2]>,
}

impl BadGuyCore {
    pub fn new(position: Vec2, size: Vec2, dir: Direction, sprite_name: impl Into<String>) -> Self {
        let tuning = BadGuyTuning::default();
        Self {
            sprite_name: sprite_name.into(),
            layer: LAYER_OBJECTS,
            count_me: true,
            dead_script: None,
            dir,
            physic: RigidBody::with_gravity(tuning.gravity, true),
            start_position: position,
            start_dir: dir,
            bbox: Rect::from_pos_size(position, size),
            movement: Vec2::ZERO,
            state: BadGuyState::Init,
            status: StatusEffect::None,
            is_initialized: false,
            is_active_flag: false,
            state_timer: Timer::new(),
            on_ground_flag: false,
            floor_normal: Vec2::ZERO,
            colgroup_active: CollisionGroup::Moving,
            group: CollisionGroup::Disabled,
            upside_down: false,
            remove_me: false,
            now: 0.0,
            tuning,
            effects: SmallVec::new(),
        }
    }

    pub fn with_tuning(mut self, tuning: BadGuyTuning) -> Self {
        self.tuning = tuning;
        self.physic.set_gravity(tuning.gravity);
        self
    }

    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    pub fn with_dead_script(mut self, script: impl Into<String>) -> Self {
        let script = script.into();
        self.dead_script = (!script.is_empty()).then_some(script);
        self
    }

    pub fn tuning(&self) -> &BadGuyTuning {
        &self.tuning
    }

    pub fn state(&self) -> BadGuyState {
        self.state
    }

    pub fn status(&self) -> StatusEffect {
        self.status
    }

    pub fn is_frozen(&self) -> bool {
        self.status == StatusEffect::Frozen
    }

    pub fn is_ignited(&self) -> bool {
        self.status == StatusEffect::Ignited
    }

    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    /// True if the badguy was active at the start of the last update.
    pub fn is_active(&self) -> bool {
        self.is_active_flag
    }

    /// True if a solid collision since the last update had us standing on
    /// something.
    pub fn on_ground(&self) -> bool {
        self.on_ground_flag
    }

    /// Normal of the floor we last stood on. Meaningful only while
    /// [`on_ground`](Self::on_ground) is true.
    pub fn floor_normal(&self) -> Vec2 {
        self.floor_normal
    }

    pub fn start_position(&self) -> Vec2 {
        self.start_position
    }

    pub fn set_start_position(&mut self, position: Vec2) {
        self.start_position = position;
    }

    pub fn start_dir(&self) -> Direction {
        self.start_dir
    }

    pub fn bbox(&self) -> Rect {
        self.bbox
    }

    pub fn position(&self) -> Vec2 {
        self.bbox.min
    }

    /// Move the badguy explicitly, e.g. back to its start position on
    /// deactivation.
    pub fn set_position(&mut self, position: Vec2) {
        let size = self.bbox.size();
        self.bbox = Rect::from_pos_size(position, size);
    }

    /// Displacement applied during the last update.
    pub fn movement(&self) -> Vec2 {
        self.movement
    }

    pub fn set_movement(&mut self, movement: Vec2) {
        self.movement = movement;
    }

    /// Let the physics body decide this tick's movement.
    pub fn integrate_physics(&mut self, elapsed_time: f32) {
        self.movement = self.physic.integrate(elapsed_time);
    }

    pub fn group(&self) -> CollisionGroup {
        self.group
    }

    pub fn colgroup_active(&self) -> CollisionGroup {
        self.colgroup_active
    }

    /// Change the group used while active, applying it right away if we
    /// are active.
    pub fn set_colgroup_active(&mut self, group: CollisionGroup) {
        self.colgroup_active = group;
        if self.state == BadGuyState::Active {
            self.group = self.active_group();
        }
    }

    pub fn is_upside_down(&self) -> bool {
        self.upside_down
    }

    /// Flag for removal at the end of the current pass.
    pub fn remove_me(&mut self) {
        if !self.remove_me {
            debug!("badguy '{}' flagged for removal", self.sprite_name);
        }
        self.remove_me = true;
    }

    pub fn is_removed(&self) -> bool {
        self.remove_me
    }

    pub(crate) fn set_now(&mut self, now: f32) {
        self.now = now;
    }

    pub(crate) fn set_active_flag(&mut self, active: bool) {
        self.is_active_flag = active;
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.is_initialized = true;
    }

    pub(crate) fn apply_movement(&mut self) {
        self.bbox = self.bbox.translated(self.movement);
    }

    pub(crate) fn clear_on_ground(&mut self) {
        self.on_ground_flag = false;
    }

    pub fn push_effect(&mut self, effect: PartnerEffect) {
        self.effects.push(effect);
    }

    pub fn drain_effects(&mut self) -> SmallVec<[PartnerEffect; 2]> {
        std::mem::take(&mut self.effects)
    }

    fn active_group(&self) -> CollisionGroup {
        match self.status {
            StatusEffect::Frozen => CollisionGroup::MovingStatic,
            StatusEffect::Ignited => CollisionGroup::MovingOnlyStatic,
            StatusEffect::None => self.colgroup_active,
        }
    }

    /// Change lifecycle state. Terminal states are never left for a live
    /// one; such requests are ignored.
    pub fn set_state(&mut self, state: BadGuyState) {
        if self.state == state {
            return;
        }
        if self.state.is_terminal() && !state.is_terminal() {
            debug!(
                "badguy '{}' ignores {:?} -> {:?}",
                self.sprite_name, self.state, state
            );
            return;
        }
        let last = self.state;
        self.state = state;
        match state {
            BadGuyState::Squished => {
                self.state_timer.start(self.now, self.tuning.squish_time);
                self.group = CollisionGroup::MovingOnlyStatic;
            }
            BadGuyState::Active => {
                self.group = self.active_group();
            }
            BadGuyState::Inactive | BadGuyState::Init => {
                self.group = CollisionGroup::Disabled;
            }
            BadGuyState::Falling => {
                self.state_timer.stop();
                self.group = CollisionGroup::Disabled;
            }
        }
        debug!("badguy '{}' {:?} -> {:?}", self.sprite_name, last, state);
    }

    /// Poll the dwell timer against the current tick's time.
    pub fn check_state_timer(&mut self) -> bool {
        self.state_timer.check(self.now)
    }

    pub fn state_timer(&self) -> &Timer {
        &self.state_timer
    }

    /// Record whether `hit` has us resting on top of something solid.
    pub fn update_on_ground_flag(&mut self, hit: &CollisionHit) {
        if hit.bottom() {
            self.on_ground_flag = true;
            self.floor_normal = hit.normal;
        } else {
            self.on_ground_flag = false;
        }
    }

    pub fn nearest_player(&self, env: &BadGuyEnv) -> Option<PlayerContact> {
        env.players.nearest(self.bbox.middle())
    }

    pub fn is_offscreen(&self, env: &BadGuyEnv) -> bool {
        !env.viewport.is_onscreen(&self.bbox)
    }

    /// Nearest player within the activation radius, and we are on screen.
    pub fn should_be_active(&self, env: &BadGuyEnv) -> bool {
        let Some(player) = self.nearest_player(env) else {
            return false;
        };
        let dist = (player.bbox.middle() - self.bbox.middle()).abs();
        dist.x <= self.tuning.activation_x
            && dist.y <= self.tuning.activation_y
            && !self.is_offscreen(env)
    }

    /// Resolve an `Auto` facing towards the nearest player, if any.
    pub fn face_nearest_player(&mut self, env: &BadGuyEnv) {
        if self.dir != Direction::Auto {
            return;
        }
        if let Some(player) = self.nearest_player(env) {
            self.dir = if player.bbox.min.x > self.bbox.max.x {
                Direction::Right
            } else {
                Direction::Left
            };
        }
    }

    /// True if walking on would drop us at least `height` pixels (minimum 1)
    /// right in front of our feet.
    pub fn might_fall(&self, env: &BadGuyEnv, height: i32) -> bool {
        let height = height.max(1) as f32;
        let y1 = self.bbox.max.y + 1.0;
        let y2 = y1 + height;
        let (x1, x2) = match self.dir {
            Direction::Right => (self.bbox.max.x, self.bbox.max.x + 1.0),
            Direction::Left | Direction::Auto => (self.bbox.min.x - 1.0, self.bbox.min.x),
        };
        env.solids
            .is_free_of_statics(&Rect::from_corners(Vec2::new(x1, y1), Vec2::new(x2, y2)))
    }

    pub fn run_dead_script(&self, scripts: &mut dyn ScriptRunner) {
        if let Some(script) = &self.dead_script {
            debug!("badguy '{}' runs dead script '{}'", self.sprite_name, script);
            scripts.run(script);
        }
    }

    /// Squish the badguy flat. Players get bounced off.
    pub fn kill_squished(&mut self, scripts: &mut dyn ScriptRunner, squisher: &Squisher) {
        if self.state.is_terminal() {
            return;
        }
        self.physic.enable_gravity(true);
        self.physic.set_velocity(Vec2::ZERO);
        self.status = StatusEffect::None;
        self.set_state(BadGuyState::Squished);
        if squisher.is_player() {
            self.push_effect(PartnerEffect::BouncePlayer);
        }
        self.run_dead_script(scripts);
    }

    /// Turn upside down and drop out of the level.
    pub fn kill_fall(&mut self, scripts: &mut dyn ScriptRunner) {
        if self.state == BadGuyState::Falling {
            return;
        }
        self.physic.set_velocity(Vec2::ZERO);
        self.physic.clear_accelerations();
        self.physic.enable_gravity(true);
        self.physic.frozen = false;
        self.status = StatusEffect::None;
        self.upside_down = true;
        self.layer = LAYER_FOREMOST;
        self.set_state(BadGuyState::Falling);
        self.run_dead_script(scripts);
    }

    /// Set the badguy on fire. No-op unless `flammable`, alive and free of
    /// other status effects.
    pub fn ignite(&mut self, flammable: bool) -> bool {
        if !flammable || self.status != StatusEffect::None || self.state.is_terminal() {
            return false;
        }
        self.status = StatusEffect::Ignited;
        self.physic.set_velocity(Vec2::ZERO);
        self.physic.enable_gravity(true);
        self.state_timer.start(self.now, self.tuning.burn_time);
        if self.state == BadGuyState::Active {
            self.group = self.active_group();
        }
        debug!("badguy '{}' ignited", self.sprite_name);
        true
    }

    /// Put the fire out. No-op unless ignited.
    pub fn extinguish(&mut self) -> bool {
        if self.status != StatusEffect::Ignited {
            return false;
        }
        self.status = StatusEffect::None;
        self.state_timer.stop();
        if self.state == BadGuyState::Active {
            self.group = self.active_group();
        }
        debug!("badguy '{}' extinguished", self.sprite_name);
        true
    }

    /// Freeze the badguy in place. No-op unless `freezable`, alive and free
    /// of other status effects.
    pub fn freeze(&mut self, freezable: bool) -> bool {
        if !freezable || self.status != StatusEffect::None || self.state.is_terminal() {
            return false;
        }
        self.status = StatusEffect::Frozen;
        self.physic.set_velocity_x(0.0);
        if self.state == BadGuyState::Active {
            self.group = self.active_group();
        }
        debug!("badguy '{}' frozen", self.sprite_name);
        true
    }

    /// Thaw. No-op unless frozen.
    pub fn unfreeze(&mut self) -> bool {
        if self.status != StatusEffect::Frozen {
            return false;
        }
        self.status = StatusEffect::None;
        if self.state == BadGuyState::Active {
            self.group = self.active_group();
        }
        debug!("badguy '{}' unfrozen", self.sprite_name);
        true
    }

    /// Base reaction to terrain: stop dead.
    pub fn default_collision_solid(&mut self, _hit: &CollisionHit) {
        self.physic.set_velocity(Vec2::ZERO);
    }

    /// Base reaction to touching a player: invincible players kill us,
    /// everyone else gets hurt.
    pub fn default_collision_player(
        &mut self,
        scripts: &mut dyn ScriptRunner,
        player: &PlayerContact,
    ) -> HitResponse {
        if player.invincible {
            self.kill_fall(scripts);
            return HitResponse::AbortMove;
        }
        self.unfreeze();
        self.push_effect(PartnerEffect::HurtPlayer);
        HitResponse::ForceMove
    }

    /// Base squish rule: only a frozen badguy, and only under a butt-jump.
    pub fn default_collision_squished(
        &mut self,
        scripts: &mut dyn ScriptRunner,
        squisher: &Squisher,
    ) -> bool {
        if self.is_frozen() && squisher.does_buttjump() {
            self.push_effect(PartnerEffect::BouncePlayer);
            self.kill_fall(scripts);
            return true;
        }
        false
    }

    /// Base reaction to projectiles.
    pub fn default_collision_bullet(
        &mut self,
        bullet: &BulletContact,
        flammable: bool,
        freezable: bool,
    ) -> HitResponse {
        match (self.status, bullet.kind) {
            (StatusEffect::Frozen, BulletKind::Fire) => {
                self.unfreeze();
                self.push_effect(PartnerEffect::RemoveBullet);
                HitResponse::AbortMove
            }
            (StatusEffect::Frozen, _) => {
                self.push_effect(PartnerEffect::RicochetBullet);
                HitResponse::ForceMove
            }
            (StatusEffect::Ignited, BulletKind::Ice) => {
                self.extinguish();
                self.push_effect(PartnerEffect::RemoveBullet);
                HitResponse::AbortMove
            }
            (StatusEffect::Ignited, _) => {
                self.push_effect(PartnerEffect::RemoveBullet);
                HitResponse::ForceMove
            }
            (StatusEffect::None, BulletKind::Fire) if flammable => {
                self.ignite(true);
                self.push_effect(PartnerEffect::RemoveBullet);
                HitResponse::AbortMove
            }
            (StatusEffect::None, BulletKind::Ice) if freezable => {
                self.freeze(true);
                self.push_effect(PartnerEffect::RemoveBullet);
                HitResponse::AbortMove
            }
            _ => {
                self.push_effect(PartnerEffect::RicochetBullet);
                HitResponse::ForceMove
            }
        }
    }
}
