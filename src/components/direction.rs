//! Facing direction for badguys.
//!
//! Level data spells directions as strings (`"left"`, `"right"`, `"auto"`).
//! [`Direction::from_str`] is the only parser; anything else is a
//! configuration error and the badguy is never spawned.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Horizontal facing of an entity.
///
/// `Auto` is only meaningful as a *start* direction: it is resolved on the
/// first activation so the badguy faces the nearest player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Auto,
    Left,
    Right,
}

impl Direction {
    /// The opposite facing. `Auto` has no opposite and stays `Auto`.
    pub fn flipped(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Auto => Direction::Auto,
        }
    }

    /// Sign of the horizontal axis for this facing (`Auto` counts as left).
    pub fn sign(self) -> f32 {
        match self {
            Direction::Right => 1.0,
            Direction::Left | Direction::Auto => -1.0,
        }
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "auto" => Ok(Direction::Auto),
            _ => Err(ConfigError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Auto => "auto",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
