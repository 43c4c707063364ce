//! Physics integrator owned by moving entities.
//!
//! A [`RigidBody`] stores velocity and a set of named acceleration forces.
//! Gravity is just the force named [`GRAVITY_FORCE`], so badguys can switch it
//! on and off (flying badguys, frozen fall, `kill_fall`) without losing its
//! configured magnitude.
//!
//! [`RigidBody::integrate`] is the only place time is applied: accelerations
//! go into velocity first, then the returned displacement is `velocity * dt`.
//! Callers add that displacement to their own position.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use rustc_hash::FxHashMap;

/// Name of the force toggled by [`RigidBody::enable_gravity`].
pub const GRAVITY_FORCE: &str = "gravity";

/// A named acceleration force that can be toggled on/off.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccelerationForce {
    /// Acceleration in world units per second squared.
    pub value: Vec2,
    pub enabled: bool,
}

impl AccelerationForce {
    pub fn new(value: Vec2) -> Self {
        Self {
            value,
            enabled: true,
        }
    }
}

/// Kinematic body with velocity and named accelerations.
///
/// # Fields
/// - `velocity` - current velocity in world units per second
/// - `forces` - named accelerations, summed when enabled
/// - `frozen` - when true, `integrate` returns zero and leaves velocity alone
#[derive(Component, Clone, Debug, Default)]
pub struct RigidBody {
    pub velocity: Vec2,
    pub forces: FxHashMap<String, AccelerationForce>,
    pub frozen: bool,
}

impl RigidBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body with a (possibly disabled) gravity force of magnitude `gravity`
    /// pointing down the screen.
    pub fn with_gravity(gravity: f32, enabled: bool) -> Self {
        let mut body = Self::new();
        body.forces.insert(
            GRAVITY_FORCE.to_string(),
            AccelerationForce {
                value: Vec2::new(0.0, gravity),
                enabled,
            },
        );
        body
    }

    /// Add or replace a named force (enabled).
    pub fn add_force(&mut self, name: &str, value: Vec2) {
        self.forces
            .insert(name.to_string(), AccelerationForce::new(value));
    }

    /// Enable or disable a force. Returns false if it does not exist.
    pub fn set_force_enabled(&mut self, name: &str, enabled: bool) -> bool {
        match self.forces.get_mut(name) {
            Some(force) => {
                force.enabled = enabled;
                true
            }
            None => false,
        }
    }

    pub fn is_force_enabled(&self, name: &str) -> bool {
        self.forces.get(name).is_some_and(|f| f.enabled)
    }

    /// Toggle gravity. A body created without gravity gets a zero-magnitude
    /// gravity force, so this never silently fails.
    pub fn enable_gravity(&mut self, enabled: bool) {
        if !self.set_force_enabled(GRAVITY_FORCE, enabled) {
            self.forces.insert(
                GRAVITY_FORCE.to_string(),
                AccelerationForce {
                    value: Vec2::ZERO,
                    enabled,
                },
            );
        }
    }

    pub fn gravity_enabled(&self) -> bool {
        self.is_force_enabled(GRAVITY_FORCE)
    }

    /// Set the magnitude of gravity, keeping its enabled state.
    pub fn set_gravity(&mut self, gravity: f32) {
        let enabled = self.gravity_enabled();
        self.forces.insert(
            GRAVITY_FORCE.to_string(),
            AccelerationForce {
                value: Vec2::new(0.0, gravity),
                enabled,
            },
        );
    }

    /// Sum of all enabled forces.
    pub fn total_acceleration(&self) -> Vec2 {
        self.forces
            .values()
            .filter(|f| f.enabled)
            .fold(Vec2::ZERO, |acc, f| acc + f.value)
    }

    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn set_velocity_x(&mut self, x: f32) {
        self.velocity.x = x;
    }

    pub fn set_velocity_y(&mut self, y: f32) {
        self.velocity.y = y;
    }

    /// Drop every force except gravity. Used when an entity loses control
    /// of its own motion.
    pub fn clear_accelerations(&mut self) {
        self.forces.retain(|name, _| name == GRAVITY_FORCE);
    }

    /// Advance the body by `dt` seconds and return the displacement.
    pub fn integrate(&mut self, dt: f32) -> Vec2 {
        if self.frozen || dt <= 0.0 {
            return Vec2::ZERO;
        }
        self.velocity += self.total_acceleration() * dt;
        self.velocity * dt
    }
}
