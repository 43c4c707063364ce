//! Player projectiles.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletKind {
    #[default]
    Plain,
    Fire,
    Ice,
}

#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bullet {
    pub kind: BulletKind,
}

impl Bullet {
    pub fn new(kind: BulletKind) -> Self {
        Self { kind }
    }
}
