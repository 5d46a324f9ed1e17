//! Error types
//!
//! The simulation itself cannot fail once it holds a valid [`Screen`]; the
//! only rejected input is a degenerate screen size. Settings loading has the
//! usual I/O and parse failures.
//!
//! [`Screen`]: crate::sim::Screen

use std::fmt;
use std::io;

/// Errors raised at the simulation boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimError {
    /// Width or height was zero or negative
    InvalidScreen { width: i32, height: i32 },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScreen { width, height } => {
                write!(f, "invalid screen size {width}x{height}: both dimensions must be positive")
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Errors raised while loading [`Settings`](crate::Settings)
#[derive(Debug)]
pub enum SettingsError {
    Io(io::Error),
    Parse(serde_json::Error),
    Invalid(SimError),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read settings: {err}"),
            Self::Parse(err) => write!(f, "failed to parse settings: {err}"),
            Self::Invalid(err) => write!(f, "invalid settings: {err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<io::Error> for SettingsError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<SimError> for SettingsError {
    fn from(err: SimError) -> Self {
        Self::Invalid(err)
    }
}
