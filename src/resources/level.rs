//! Level data loaded from JSON.
//!
//! A level lists the players, the static terrain, the named paths and the
//! badguys to spawn. Everything is validated while it is turned into engine
//! types: a bad direction, an unknown kind or a broken path is a
//! [`ConfigError`] and nothing of that badguy is spawned.
//!
//! ```json
//! {
//!   "players": [{ "x": 64, "y": 288 }],
//!   "solids": [{ "x": 0, "y": 320, "width": 800, "height": 32 }],
//!   "paths": {
//!     "patrol": {
//!       "mode": "ping_pong",
//!       "nodes": [{ "x": 300, "y": 100, "speed": 60 }, { "x": 500, "y": 100 }]
//!     }
//!   },
//!   "badguys": [
//!     { "kind": "walking", "x": 400, "y": 288, "direction": "left",
//!       "sprite": "snowball", "dead-script": "on_snowball_dead" },
//!     { "kind": "flying", "x": 300, "y": 100, "path": "patrol" }
//!   ]
//! }
//! ```

use std::path::Path as FsPath;
use std::sync::Arc;

use glam::Vec2;
use log::info;
use serde::{Deserialize, Serialize};

use crate::components::badguy::flying::FlyingBadGuy;
use crate::components::badguy::walking::WalkingBadGuy;
use crate::components::badguy::{BadGuy, BadGuyCore};
use crate::components::boxcollider::Rect;
use crate::components::bullet::BulletKind;
use crate::components::collision::tile_attributes;
use crate::components::direction::Direction;
use crate::components::pathwalker::PathWalker;
use crate::error::ConfigError;
use crate::resources::gameconfig::BadGuyTuning;
use crate::resources::path::{Path, PathMode, PathNode};
use crate::resources::pathstore::PathStore;

const DEFAULT_SIZE: f32 = 32.0;
const DEFAULT_NODE_SPEED: f32 = 100.0;
const DEFAULT_WALK_SPEED: f32 = 80.0;

fn default_size() -> f32 {
    DEFAULT_SIZE
}

fn default_node_speed() -> f32 {
    DEFAULT_NODE_SPEED
}

fn default_solid_attributes() -> u32 {
    tile_attributes::SOLID
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    #[serde(default)]
    pub players: Vec<PlayerData>,
    #[serde(default)]
    pub solids: Vec<SolidData>,
    #[serde(default)]
    pub paths: std::collections::BTreeMap<String, PathData>,
    #[serde(default)]
    pub badguys: Vec<BadGuyData>,
    #[serde(default)]
    pub bullets: Vec<BulletData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerData {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_size")]
    pub width: f32,
    #[serde(default = "default_size")]
    pub height: f32,
    #[serde(default)]
    pub invincible: bool,
    #[serde(default)]
    pub stone: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidData {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default = "default_solid_attributes")]
    pub attributes: u32,
}

impl SolidData {
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(Vec2::new(self.x, self.y), Vec2::new(self.width, self.height))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_node_speed")]
    pub speed: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    pub nodes: Vec<NodeData>,
    /// Explicit end-of-path policy. Wins over `cyclic`.
    #[serde(default)]
    pub mode: Option<PathMode>,
    #[serde(default)]
    pub cyclic: bool,
}

impl PathData {
    pub fn build(&self, name: &str) -> Result<Path, ConfigError> {
        let nodes = self
            .nodes
            .iter()
            .map(|n| PathNode::new(n.x, n.y, n.speed))
            .collect();
        let mode = self.mode.unwrap_or_else(|| PathMode::from_cyclic(self.cyclic));
        Path::new(nodes, mode).map_err(|source| ConfigError::InvalidPath {
            name: name.to_string(),
            source,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BadGuyData {
    pub kind: Option<String>,
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub direction: Option<String>,
    pub sprite: Option<String>,
    pub dead_script: Option<String>,
    pub layer: Option<i32>,
    pub path: Option<String>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub walk_speed: Option<f32>,
    pub max_drop_height: Option<i32>,
}

impl BadGuyData {
    /// Turn spawn data into a ready-to-spawn badguy.
    pub fn build(
        &self,
        index: usize,
        paths: &PathStore,
        tuning: BadGuyTuning,
    ) -> Result<BadGuy, ConfigError> {
        let context = format!("badguy #{index}");
        let missing = |field| ConfigError::MissingField {
            context: context.clone(),
            field,
        };
        let kind = self.kind.as_deref().ok_or_else(|| missing("kind"))?;
        let x = self.x.ok_or_else(|| missing("x"))?;
        let y = self.y.ok_or_else(|| missing("y"))?;
        let dir: Direction = match &self.direction {
            Some(s) => s.parse()?,
            None => Direction::Auto,
        };
        let size = Vec2::new(
            self.width.unwrap_or(DEFAULT_SIZE),
            self.height.unwrap_or(DEFAULT_SIZE),
        );
        let sprite = self.sprite.clone().unwrap_or_else(|| kind.to_string());

        let mut core = BadGuyCore::new(Vec2::new(x, y), size, dir, sprite).with_tuning(tuning);
        if let Some(layer) = self.layer {
            core = core.with_layer(layer);
        }
        if let Some(script) = &self.dead_script {
            core = core.with_dead_script(script.clone());
        }

        match kind {
            "walking" => {
                let mut walker =
                    WalkingBadGuy::new(self.walk_speed.unwrap_or(DEFAULT_WALK_SPEED));
                if let Some(height) = self.max_drop_height {
                    walker = walker.with_max_drop_height(height);
                }
                Ok(BadGuy::new(core, walker))
            }
            "flying" => {
                let flyer = match &self.path {
                    Some(name) => {
                        let path: Arc<Path> = paths
                            .get(name)
                            .ok_or_else(|| ConfigError::UnknownPath(name.clone()))?;
                        FlyingBadGuy::with_path(PathWalker::new(path))
                    }
                    None => FlyingBadGuy::new(),
                };
                Ok(BadGuy::new(core, flyer))
            }
            other => Err(ConfigError::UnknownKind(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletData {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub kind: BulletKind,
    #[serde(default)]
    pub vx: f32,
    #[serde(default)]
    pub vy: f32,
}

impl LevelData {
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_file(path: &FsPath) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let level = Self::from_json(&source)?;
        info!(
            "Loaded level {:?}: {} players, {} solids, {} paths, {} badguys",
            path,
            level.players.len(),
            level.solids.len(),
            level.paths.len(),
            level.badguys.len()
        );
        Ok(level)
    }

    /// Validate every named path.
    pub fn build_paths(&self) -> Result<PathStore, ConfigError> {
        let mut store = PathStore::new();
        for (name, data) in &self.paths {
            store.insert(name.clone(), data.build(name)?);
        }
        Ok(store)
    }

    /// Build every badguy, failing on the first invalid one.
    pub fn build_badguys(
        &self,
        paths: &PathStore,
        tuning: BadGuyTuning,
    ) -> Result<Vec<BadGuy>, ConfigError> {
        self.badguys
            .iter()
            .enumerate()
            .map(|(i, data)| data.build(i, paths, tuning))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::badguy::BadGuyState;

    const LEVEL: &str = r#"{
        "players": [{ "x": 64, "y": 288 }],
        "solids": [{ "x": 0, "y": 320, "width": 800, "height": 32 }],
        "paths": {
            "patrol": {
                "mode": "ping_pong",
                "nodes": [{ "x": 300, "y": 100, "speed": 60 }, { "x": 500, "y": 100 }]
            },
            "loop": {
                "cyclic": true,
                "nodes": [{ "x": 0, "y": 0 }, { "x": 10, "y": 0 }, { "x": 10, "y": 10 }]
            }
        },
        "badguys": [
            { "kind": "walking", "x": 400, "y": 288, "direction": "left",
              "sprite": "snowball", "dead-script": "on_snowball_dead", "max-drop-height": 16 },
            { "kind": "flying", "x": 300, "y": 100, "path": "patrol", "layer": 60 }
        ]
    }"#;

    #[test]
    fn parses_and_builds_everything() {
        let level = LevelData::from_json(LEVEL).unwrap();
        assert_eq!(level.players.len(), 1);
        assert_eq!(level.solids[0].attributes, tile_attributes::SOLID);

        let paths = level.build_paths().unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths.get("loop").unwrap().mode(), PathMode::Circular);

        let badguys = level.build_badguys(&paths, BadGuyTuning::default()).unwrap();
        assert_eq!(badguys.len(), 2);
        assert_eq!(badguys[0].kind(), "walking");
        assert_eq!(badguys[0].core().dir, Direction::Left);
        assert_eq!(badguys[0].core().dead_script.as_deref(), Some("on_snowball_dead"));
        assert_eq!(badguys[0].state(), BadGuyState::Init);
        assert_eq!(badguys[1].kind(), "flying");
        assert_eq!(badguys[1].core().layer, 60);
        assert_eq!(badguys[1].core().dir, Direction::Auto);
    }

    #[test]
    fn bad_direction_fails_construction() {
        let data = BadGuyData {
            kind: Some("walking".into()),
            x: Some(0.0),
            y: Some(0.0),
            direction: Some("up".into()),
            ..Default::default()
        };
        let err = data.build(0, &PathStore::new(), BadGuyTuning::default()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDirection(s) if s == "up"));
    }

    #[test]
    fn missing_position_is_reported() {
        let data = BadGuyData {
            kind: Some("walking".into()),
            x: Some(0.0),
            ..Default::default()
        };
        let err = data.build(3, &PathStore::new(), BadGuyTuning::default()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { field: "y", .. }));
        assert!(err.to_string().contains("badguy #3"));
    }

    #[test]
    fn unknown_kind_and_path_are_errors() {
        let mut data = BadGuyData {
            kind: Some("dragon".into()),
            x: Some(0.0),
            y: Some(0.0),
            ..Default::default()
        };
        let paths = PathStore::new();
        assert!(matches!(
            data.build(0, &paths, BadGuyTuning::default()),
            Err(ConfigError::UnknownKind(_))
        ));
        data.kind = Some("flying".into());
        data.path = Some("nowhere".into());
        assert!(matches!(
            data.build(0, &paths, BadGuyTuning::default()),
            Err(ConfigError::UnknownPath(_))
        ));
    }

    #[test]
    fn single_node_path_is_rejected_at_load() {
        let level = LevelData::from_json(
            r#"{ "paths": { "stub": { "nodes": [{ "x": 1, "y": 1 }] } } }"#,
        )
        .unwrap();
        let err = level.build_paths().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPath { ref name, .. } if name == "stub"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(LevelData::from_json("{ nope"), Err(ConfigError::Json(_))));
    }
}
