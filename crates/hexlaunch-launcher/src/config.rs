//! Launcher configuration.

use crate::error::{Error, Result};

/// Default distance from a hex centre to its corners, in pixels.
pub const DEFAULT_HEX_SIZE: f64 = 25.0;

/// Default viewport edge length, in pixels.
pub const DEFAULT_VIEWPORT: f64 = 400.0;

/// Geometry used to lay items out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LauncherConfig {
    /// Hex size (centre to corner)
    pub hex_size: f64,

    /// Viewport width in pixels
    pub viewport_width: f64,

    /// Viewport height in pixels
    pub viewport_height: f64,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            hex_size: DEFAULT_HEX_SIZE,
            viewport_width: DEFAULT_VIEWPORT,
            viewport_height: DEFAULT_VIEWPORT,
        }
    }
}

impl LauncherConfig {
    /// Create config from environment variables, falling back to defaults
    /// for unset ones.
    ///
    /// Reads `HEXLAUNCH_HEX_SIZE`, `HEXLAUNCH_VIEWPORT_WIDTH` and
    /// `HEXLAUNCH_VIEWPORT_HEIGHT`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let read = |key: &str, default: f64| -> Result<f64> {
            match lookup(key) {
                Some(raw) => parse_number(key, &raw),
                None => Ok(default),
            }
        };

        let config = Self {
            hex_size: read("HEXLAUNCH_HEX_SIZE", defaults.hex_size)?,
            viewport_width: read("HEXLAUNCH_VIEWPORT_WIDTH", defaults.viewport_width)?,
            viewport_height: read("HEXLAUNCH_VIEWPORT_HEIGHT", defaults.viewport_height)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every dimension is finite and positive.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("hex_size", self.hex_size),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

fn parse_number(key: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse()
        .map_err(|_| Error::InvalidConfig(format!("{key}: `{raw}` is not a number")))
}
