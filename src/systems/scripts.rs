//! Hand queued dead scripts to the scripting host.
//!
//! Badguys only record script names in [`ScriptQueue`]. This system drains
//! the queue at the end of the tick. With the `lua` feature and a
//! [`LuaScriptHost`](crate::resources::lua_host::LuaScriptHost) in the world
//! the scripts are run; otherwise they are only logged.
use bevy_ecs::prelude::*;
use log::info;

#[cfg(feature = "lua")]
use crate::resources::lua_host::LuaScriptHost;
use crate::resources::scripts::ScriptQueue;

#[cfg(feature = "lua")]
pub fn dispatch_dead_scripts(
    mut queue: ResMut<ScriptQueue>,
    host: Option<NonSend<LuaScriptHost>>,
) {
    for script in queue.drain() {
        match &host {
            Some(host) => host.run_script(&script),
            None => info!("dead script '{}' (no Lua host)", script),
        }
    }
}

#[cfg(not(feature = "lua"))]
pub fn dispatch_dead_scripts(mut queue: ResMut<ScriptQueue>) {
    for script in queue.drain() {
        info!("dead script '{}'", script);
    }
}
