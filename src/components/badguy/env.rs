//! Collaborators a badguy talks to while it updates or collides.

use crate::resources::camera2d::Viewport;
use crate::resources::players::ActorRegistry;
use crate::resources::scripts::ScriptRunner;
use crate::resources::solidmap::SolidProbe;

/// Everything outside the badguy itself, borrowed for one call.
///
/// The engine builds one per tick from its resources. Tests build one from
/// whatever stand-ins they need.
pub struct BadGuyEnv<'a> {
    /// Simulation time of the current tick, in seconds.
    pub now: f32,
    pub players: &'a dyn ActorRegistry,
    pub viewport: &'a dyn Viewport,
    pub solids: &'a dyn SolidProbe,
    pub scripts: &'a mut dyn ScriptRunner,
}
