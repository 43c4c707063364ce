//! Named, validated paths shared by every walker that follows them.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::resources::path::Path;

#[derive(Resource, Debug, Clone, Default)]
pub struct PathStore {
    paths: FxHashMap<String, Arc<Path>>,
}

impl PathStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, path: Path) {
        self.paths.insert(name.into(), Arc::new(path));
    }

    /// Shared handle to the path called `name`.
    pub fn get(&self, name: &str) -> Option<Arc<Path>> {
        self.paths.get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
