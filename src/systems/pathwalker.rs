//! Move path-following entities.
//!
//! Each [`PathWalker`] is polled exactly once per tick and its delta added to
//! the entity's [`MapPosition`].
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::pathwalker::PathWalker;
use crate::resources::worldtime::WorldTime;

pub fn path_walker_system(
    mut query: Query<(&mut MapPosition, &mut PathWalker)>,
    time: Res<WorldTime>,
) {
    for (mut position, mut walker) in query.iter_mut() {
        position.pos += walker.advance(time.delta);
    }
}
