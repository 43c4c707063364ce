//! Engine tuning resource.
//!
//! Activation distances, dwell times and gravity are read from an INI file.
//! Every value has a safe default, so a missing file or key just keeps the
//! default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [badguy]
//! activation_x = 1280
//! activation_y = 800
//! squish_time = 2.0
//! burn_time = 1.0
//! gravity = 1000.0
//!
//! [viewport]
//! width = 800
//! height = 600
//! margin = 64
//! ```

use std::path::{Path, PathBuf};

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;

use crate::error::ConfigError;

const DEFAULT_ACTIVATION_X: f32 = 1280.0;
const DEFAULT_ACTIVATION_Y: f32 = 800.0;
const DEFAULT_SQUISH_TIME: f32 = 2.0;
const DEFAULT_BURN_TIME: f32 = 1.0;
const DEFAULT_GRAVITY: f32 = 1000.0;
const DEFAULT_VIEWPORT_WIDTH: u32 = 800;
const DEFAULT_VIEWPORT_HEIGHT: u32 = 600;
const DEFAULT_VIEWPORT_MARGIN: f32 = 64.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Per-badguy tuning, copied into every badguy at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadGuyTuning {
    /// Horizontal activation radius in pixels.
    pub activation_x: f32,
    /// Vertical activation radius in pixels.
    pub activation_y: f32,
    /// Seconds a squished badguy stays around before removal.
    pub squish_time: f32,
    /// Seconds an ignited badguy burns before it falls.
    pub burn_time: f32,
    /// Downward acceleration, pixels per second squared.
    pub gravity: f32,
}

#[derive(Debug, Clone, Copy)]
enum Bound {
    Positive,
    NonNegative,
    Finite,
}

impl Bound {
    fn admits(self, value: f32) -> bool {
        value.is_finite()
            && match self {
                Bound::Positive => value > 0.0,
                Bound::NonNegative => value >= 0.0,
                Bound::Finite => true,
            }
    }

    fn describe(self) -> &'static str {
        match self {
            Bound::Positive => "finite and greater than zero",
            Bound::NonNegative => "finite and not negative",
            Bound::Finite => "finite",
        }
    }
}

fn check(section: &'static str, key: &'static str, value: f32, bound: Bound) -> Result<(), ConfigError> {
    if bound.admits(value) {
        return Ok(());
    }
    Err(ConfigError::InvalidValue {
        section,
        key,
        value,
        expected: bound.describe(),
    })
}

impl BadGuyTuning {
    /// Dwell times must arm their timers; radii and gravity must be usable
    /// in arithmetic.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check("badguy", "activation_x", self.activation_x, Bound::NonNegative)?;
        check("badguy", "activation_y", self.activation_y, Bound::NonNegative)?;
        check("badguy", "squish_time", self.squish_time, Bound::Positive)?;
        check("badguy", "burn_time", self.burn_time, Bound::Positive)?;
        check("badguy", "gravity", self.gravity, Bound::Finite)
    }
}

impl Default for BadGuyTuning {
    fn default() -> Self {
        Self {
            activation_x: DEFAULT_ACTIVATION_X,
            activation_y: DEFAULT_ACTIVATION_Y,
            squish_time: DEFAULT_SQUISH_TIME,
            burn_time: DEFAULT_BURN_TIME,
            gravity: DEFAULT_GRAVITY,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub badguy: BadGuyTuning,
    pub viewport_width: u32,
    pub viewport_height: u32,
    /// Extra pixels around the viewport that still count as on screen.
    pub viewport_margin: f32,
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            badguy: BadGuyTuning::default(),
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            viewport_margin: DEFAULT_VIEWPORT_MARGIN,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load the INI file at `config_path` over the current values.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let source = std::fs::read_to_string(&self.config_path).map_err(|e| ConfigError::Io {
            path: self.config_path.clone(),
            source: e,
        })?;
        self.load_from_str(&source)?;
        info!(
            "Loaded config {:?}: activation {}x{}, squish {}s, burn {}s, gravity {}, viewport {}x{}",
            self.config_path,
            self.badguy.activation_x,
            self.badguy.activation_y,
            self.badguy.squish_time,
            self.badguy.burn_time,
            self.badguy.gravity,
            self.viewport_width,
            self.viewport_height
        );
        Ok(())
    }

    /// Parse INI text over the current values. Present-but-malformed values
    /// are errors; absent ones keep their defaults.
    pub fn load_from_str(&mut self, source: &str) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config.read(source.to_string()).map_err(ConfigError::Ini)?;

        let float = |section: &str, key: &str| -> Result<Option<f32>, ConfigError> {
            config
                .getfloat(section, key)
                .map(|v| v.map(|f| f as f32))
                .map_err(ConfigError::Ini)
        };
        let uint = |section: &str, key: &str| -> Result<Option<u32>, ConfigError> {
            match config.getuint(section, key).map_err(ConfigError::Ini)? {
                Some(u) => u32::try_from(u).map(Some).map_err(|_| {
                    ConfigError::Ini(format!("[{section}] {key} = {u} is too large"))
                }),
                None => Ok(None),
            }
        };

        // Parse into a copy so a bad file leaves the current values alone.
        let mut next = self.badguy;
        let mut width = self.viewport_width;
        let mut height = self.viewport_height;
        let mut margin = self.viewport_margin;

        // [badguy] section
        if let Some(v) = float("badguy", "activation_x")? {
            next.activation_x = v;
        }
        if let Some(v) = float("badguy", "activation_y")? {
            next.activation_y = v;
        }
        if let Some(v) = float("badguy", "squish_time")? {
            next.squish_time = v;
        }
        if let Some(v) = float("badguy", "burn_time")? {
            next.burn_time = v;
        }
        if let Some(v) = float("badguy", "gravity")? {
            next.gravity = v;
        }

        // [viewport] section
        if let Some(v) = uint("viewport", "width")? {
            width = v;
        }
        if let Some(v) = uint("viewport", "height")? {
            height = v;
        }
        if let Some(v) = float("viewport", "margin")? {
            margin = v;
        }

        next.validate()?;
        check("viewport", "margin", margin, Bound::NonNegative)?;

        self.badguy = next;
        self.viewport_width = width;
        self.viewport_height = height;
        self.viewport_margin = margin;
        Ok(())
    }

    /// Write the current values back as INI.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let mut config = Ini::new();

        config.set("badguy", "activation_x", Some(self.badguy.activation_x.to_string()));
        config.set("badguy", "activation_y", Some(self.badguy.activation_y.to_string()));
        config.set("badguy", "squish_time", Some(self.badguy.squish_time.to_string()));
        config.set("badguy", "burn_time", Some(self.badguy.burn_time.to_string()));
        config.set("badguy", "gravity", Some(self.badguy.gravity.to_string()));

        config.set("viewport", "width", Some(self.viewport_width.to_string()));
        config.set("viewport", "height", Some(self.viewport_height.to_string()));
        config.set("viewport", "margin", Some(self.viewport_margin.to_string()));

        config.write(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!("Saved config to {:?}", path);
        Ok(())
    }
}
