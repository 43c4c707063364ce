//! Authored routes for moving objects.
//!
//! A [`Path`] is an ordered list of [`PathNode`]s plus a [`PathMode`] telling
//! walkers what to do at the last node. Paths are validated once, when they
//! are built; walkers rely on that and never check indices at runtime.
//!
//! Segment `i -> i + 1` is travelled at node `i`'s speed, in both directions.
//! On a circular path the closing segment `n - 1 -> 0` uses the last node's
//! speed.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A waypoint and the speed (pixels per second) of the segment leaving it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathNode {
    pub position: Vec2,
    pub speed: f32,
}

impl PathNode {
    pub fn new(x: f32, y: f32, speed: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            speed,
        }
    }
}

/// End-of-path policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathMode {
    /// Walk back the same nodes in reverse order, forever.
    #[default]
    PingPong,
    /// Jump from the last node back to the first one.
    Circular,
    /// Stop at the last node.
    OneShot,
}

impl PathMode {
    /// Mode for the plain cyclic/non-cyclic authoring flag.
    pub fn from_cyclic(cyclic: bool) -> Self {
        if cyclic {
            PathMode::Circular
        } else {
            PathMode::PingPong
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("a path needs at least two nodes, got {0}")]
    TooFewNodes(usize),
    #[error("node {index} has invalid speed {speed}")]
    InvalidSpeed { index: usize, speed: f32 },
    #[error("node {index} has a non-finite position")]
    InvalidPosition { index: usize },
    #[error("all nodes sit on the same spot")]
    ZeroLength,
}

/// Validated, immutable route. Shared read-only between walkers.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    nodes: Vec<PathNode>,
    mode: PathMode,
}

impl Path {
    pub fn new(nodes: Vec<PathNode>, mode: PathMode) -> Result<Self, PathError> {
        if nodes.len() < 2 {
            return Err(PathError::TooFewNodes(nodes.len()));
        }
        for (index, node) in nodes.iter().enumerate() {
            if !node.position.is_finite() {
                return Err(PathError::InvalidPosition { index });
            }
            if !node.speed.is_finite() || node.speed <= 0.0 {
                return Err(PathError::InvalidSpeed {
                    index,
                    speed: node.speed,
                });
            }
        }
        let path = Self { nodes, mode };
        if path.open_length() <= 0.0 {
            return Err(PathError::ZeroLength);
        }
        Ok(path)
    }

    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    pub fn mode(&self) -> PathMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false for a validated path; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn first(&self) -> &PathNode {
        &self.nodes[0]
    }

    pub fn segment_length(&self, from: usize, to: usize) -> f32 {
        self.nodes[from].position.distance(self.nodes[to].position)
    }

    /// Length of the polyline from the first to the last node.
    pub fn open_length(&self) -> f32 {
        self.nodes
            .windows(2)
            .map(|w| w[0].position.distance(w[1].position))
            .sum()
    }

    /// Time to walk from the first to the last node.
    pub fn open_duration(&self) -> f32 {
        self.nodes
            .windows(2)
            .map(|w| w[0].position.distance(w[1].position) / w[0].speed)
            .sum()
    }

    /// Time after which a walker is back in exactly the same state, or
    /// `None` for paths that end.
    pub fn cycle_duration(&self) -> Option<f32> {
        match self.mode {
            PathMode::PingPong => Some(2.0 * self.open_duration()),
            PathMode::Circular => {
                let last = self.nodes.len() - 1;
                Some(self.open_duration() + self.segment_length(last, 0) / self.nodes[last].speed)
            }
            PathMode::OneShot => None,
        }
    }
}
