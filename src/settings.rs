//! Runtime settings
//!
//! Read from a JSON file at startup. Nothing is written back.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SUBSTEPS, TICK_RATE_HZ};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation ticks per second
    pub tick_rate_hz: f64,
    /// Most ticks run in a single frame
    pub max_substeps: u32,
    /// Target time between presented frames (also the input poll timeout)
    pub frame_interval_ms: u64,
    /// Draw the playfield border
    pub border: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_hz: TICK_RATE_HZ,
            max_substeps: MAX_SUBSTEPS,
            frame_interval_ms: 16,
            border: true,
        }
    }
}

impl Settings {
    /// Environment variable that overrides the settings path
    pub const PATH_ENV: &'static str = "BLOCK_BREAKER_SETTINGS";
    /// Settings file looked up in the working directory
    pub const DEFAULT_FILE: &'static str = "block_breaker.json";

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }

    /// Settings path from the environment, or the default file name
    pub fn path() -> PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_FILE))
    }

    /// Load settings, falling back to defaults on any problem
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        log::info!("Loaded settings: {:?}", settings);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.tick_rate_hz, 60.0);
        assert_eq!(settings.max_substeps, 8);
        assert_eq!(settings.frame_interval(), Duration::from_millis(16));
        assert!(settings.border);
    }

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json(r#"{ "tick_rate_hz": 120.0 }"#).unwrap();
        assert_eq!(settings.tick_rate_hz, 120.0);
        assert_eq!(settings.max_substeps, 8);
    }

    #[test]
    fn test_malformed_json() {
        assert!(Settings::from_json("{ tick_rate_hz: fast }").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::load_from(Path::new("/nonexistent/block_breaker.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_zero_frame_interval_is_clamped() {
        let settings = Settings {
            frame_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(settings.frame_interval(), Duration::from_millis(1));
    }
}
