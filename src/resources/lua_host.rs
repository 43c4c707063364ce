//! Lua host for dead scripts.
//!
//! A dead script is either the name of a global Lua function, which gets
//! called with no arguments, or a Lua chunk that is executed as-is. Errors are
//! logged and swallowed: a broken script must never stop the simulation.

use log::{info, warn};
use mlua::prelude::*;

/// Owns the Lua state. Not `Send`, so it lives in the world as a non-send
/// resource.
pub struct LuaScriptHost {
    lua: Lua,
}

impl LuaScriptHost {
    /// # Errors
    ///
    /// Returns an error if the Lua state cannot be created.
    pub fn new() -> LuaResult<Self> {
        let lua = Lua::new();
        lua.load(r#"package.path = "./assets/scripts/?.lua;" .. package.path"#)
            .exec()?;
        Ok(Self { lua })
    }

    /// Load and run a script file, typically defining the dead-script
    /// functions.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails to run.
    pub fn load_file(&self, path: &str) -> LuaResult<()> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| LuaError::ExternalError(std::sync::Arc::new(e)))?;
        self.lua.load(&source).set_name(path).exec()?;
        info!("Loaded Lua script {}", path);
        Ok(())
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.lua.globals().get::<LuaFunction>(name).is_ok()
    }

    /// Run one dead script; never fails.
    pub fn run_script(&self, script: &str) {
        let result = if self.has_function(script) {
            self.lua
                .globals()
                .get::<LuaFunction>(script)
                .and_then(|f| f.call::<()>(()))
        } else {
            self.lua.load(script).set_name("dead-script").exec()
        };
        if let Err(e) = result {
            warn!("[Lua] dead script '{}' failed: {}", script, e);
        }
    }

    pub fn lua(&self) -> &Lua {
        &self.lua
    }
}
