//! Message queue maintenance.
use bevy_ecs::prelude::*;

/// Advance the double-buffered queue for `M`.
///
/// Bevy ECS' [`Messages`] API requires calling `update()` once per tick so
/// that messages older than one tick are dropped. Run it first in the
/// schedule.
pub fn update_messages<M: Message>(mut messages: ResMut<Messages<M>>) {
    messages.update();
}
