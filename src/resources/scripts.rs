//! Scripting collaborator.
//!
//! Badguys name a script to run when they die (`dead-script` in level data).
//! They hand that name to a [`ScriptRunner`] and forget about it: running is
//! fire-and-forget and failures stay on the scripting side.
//!
//! Inside the ECS world the runner is the [`ScriptQueue`] resource. The
//! [`dispatch_dead_scripts`](crate::systems::scripts::dispatch_dead_scripts)
//! system drains it at the end of the tick and, with the `lua` feature, hands
//! each entry to the [`LuaScriptHost`](crate::resources::lua_host::LuaScriptHost).

use bevy_ecs::prelude::Resource;

pub trait ScriptRunner {
    fn run(&mut self, script: &str);
}

/// Scripts requested during the current tick, in request order.
#[derive(Resource, Debug, Clone, Default)]
pub struct ScriptQueue {
    pending: Vec<String>,
}

impl ScriptQueue {
    pub fn pending(&self) -> &[String] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending)
    }
}

impl ScriptRunner for ScriptQueue {
    fn run(&mut self, script: &str) {
        self.pending.push(script.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_keeps_order_and_drains() {
        let mut q = ScriptQueue::default();
        q.run("a");
        q.run("b");
        assert_eq!(q.pending(), ["a".to_string(), "b".to_string()]);
        assert_eq!(q.drain(), vec!["a".to_string(), "b".to_string()]);
        assert!(q.is_empty());
    }
}
