//! Block Crusher - A single-screen block breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, power-ups, game state)
//! - `launcher`: Headless multi-game shell that hosts the simulation
//! - `settings`: Runtime configuration loaded from JSON
//! - `error`: Error types for screen validation and settings loading

pub mod error;
pub mod launcher;
pub mod settings;
pub mod sim;

pub use error::{SettingsError, SimError};
pub use launcher::{Launcher, MenuInput, Selection};
pub use settings::{ResizePolicy, Settings};

use glam::Vec2;

/// Game configuration constants
///
/// Every spatial value is expressed at the design resolution and converted
/// with [`scale`] before use.
pub mod consts {
    /// Design resolution
    pub const BASE_WIDTH: f32 = 800.0;
    pub const BASE_HEIGHT: f32 = 600.0;

    /// Nominal simulation rate (one tick per frame, no delta time)
    pub const TICK_RATE: u32 = 60;

    /// Pool capacities
    pub const MAX_BALLS: usize = 16;
    pub const MAX_POWER_UPS: usize = 10;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED: f32 = 5.0;
    pub const TRAIL_LENGTH: usize = 16;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;
    /// Distance from the bottom edge to the paddle's top edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 40.0;
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Block grid layout
    pub const BLOCK_ROWS: usize = 5;
    pub const BLOCK_COLS: usize = 10;
    pub const BLOCK_WIDTH: f32 = 70.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const BLOCK_GAP_X: f32 = 8.0;
    pub const BLOCK_GAP_Y: f32 = 8.0;
    pub const BLOCK_TOP_MARGIN: f32 = 70.0;

    /// Power-up defaults
    pub const POWER_UP_RADIUS: f32 = 8.0;
    pub const POWER_UP_FALL_SPEED: f32 = 3.0;
    /// Percent chance a destroyed block drops a power-up
    pub const POWER_UP_DROP_CHANCE: u32 = 30;
    /// Duplicated balls diverge by up to this many degrees either way
    pub const DUPLICATE_SPREAD_DEGREES: f32 = 60.0;

    /// Scoring
    pub const BLOCK_SCORE: u64 = 10;
    pub const POWER_UP_SCORE: u64 = 50;
    pub const LEVEL_CLEAR_BONUS: u64 = 100;
    pub const STARTING_LIVES: u8 = 3;
    /// Velocity multiplier rewarded on each level clear
    pub const LEVEL_CLEAR_SPEEDUP: f32 = 1.1;
}

/// Map a design-resolution value onto the current screen dimension
#[inline]
pub fn scale(value: f32, base_dimension: f32, current_dimension: f32) -> f32 {
    value * (current_dimension / base_dimension)
}

/// Rotate a vector by `degrees` (counter-clockwise in a y-up frame)
#[inline]
pub fn rotate_degrees(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}
