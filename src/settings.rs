//! Runtime settings
//!
//! Loaded from an optional JSON file by the headless runner. Missing fields
//! fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{BASE_HEIGHT, BASE_WIDTH, TICK_RATE};
use crate::error::SettingsError;
use crate::sim::Screen;

/// What happens to a running game when the screen size changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResizePolicy {
    /// Rebuild the level from scratch (score, lives and layout are lost)
    Reinit,
    /// Rescale every entity in place, keeping progress
    #[default]
    Rescale,
}

impl ResizePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResizePolicy::Reinit => "reinit",
            ResizePolicy::Rescale => "rescale",
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Initial screen size in pixels
    pub screen_width: i32,
    pub screen_height: i32,
    /// RNG seed; `None` derives one from the system clock
    pub seed: Option<u64>,
    pub resize_policy: ResizePolicy,
    /// Ticks per second when pacing to real time
    pub tick_rate: u32,
    /// Number of ticks the headless runner plays
    pub demo_ticks: u64,
    /// Sleep between ticks to match `tick_rate`
    pub pace: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: BASE_WIDTH as i32,
            screen_height: BASE_HEIGHT as i32,
            seed: None,
            resize_policy: ResizePolicy::Rescale,
            tick_rate: TICK_RATE,
            demo_ticks: 60 * u64::from(TICK_RATE),
            pace: false,
        }
    }
}

impl Settings {
    /// Validated initial screen
    pub fn screen(&self) -> Result<Screen, SettingsError> {
        Ok(Screen::new(self.screen_width, self.screen_height)?)
    }

    /// Seed to use for a new run
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    /// Parse settings from a JSON document and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.screen()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(path) => match Self::load_from_file(path) {
                Ok(settings) => settings,
                Err(err) => {
                    log::warn!("{err}; using default settings");
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
