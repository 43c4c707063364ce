//! Integrate rigid bodies into positions.
//!
//! Badguys carry their physics inside [`BadGuy`](crate::components::badguy::BadGuy)
//! and move themselves in `badguy_update`; this system handles every other
//! body (players, bullets).
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

pub fn movement(mut query: Query<(&mut MapPosition, &mut RigidBody)>, time: Res<WorldTime>) {
    for (mut position, mut rigidbody) in query.iter_mut() {
        let delta = rigidbody.integrate(time.delta);
        position.pos += delta;
    }
}
