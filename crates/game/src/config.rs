//! Simulation configuration. Loaded from sim.ron at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Headless run settings. Loaded from `sim.ron` in the current directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Fixed RNG seed; `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Number of waves to play.
    #[serde(default = "default_waves")]
    pub waves: u32,
    /// Difficulty delta of the first wave.
    #[serde(default = "default_base_difficulty")]
    pub base_difficulty: f32,
    /// Added to the delta on every following wave.
    #[serde(default = "default_difficulty_step")]
    pub difficulty_step: f32,
    /// Chance the player picks up each live chest between waves.
    #[serde(default = "default_pickup_chance")]
    pub pickup_chance: f32,
    /// Room layout to load instead of the built-in living room.
    #[serde(default)]
    pub room_path: Option<PathBuf>,
}

fn default_waves() -> u32 {
    10
}
fn default_base_difficulty() -> f32 {
    4.0
}
fn default_difficulty_step() -> f32 {
    1.5
}
fn default_pickup_chance() -> f32 {
    0.35
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            waves: default_waves(),
            base_difficulty: default_base_difficulty(),
            difficulty_step: default_difficulty_step(),
            pickup_chance: default_pickup_chance(),
            room_path: None,
        }
    }
}

impl SimConfig {
    /// Load config from `sim.ron`. If the file is missing or invalid, returns default config.
    pub fn load() -> Self {
        Self::load_or_default(config_path())
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if let Ok(data) = std::fs::read_to_string(path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid sim config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Difficulty delta carried by `wave` (1-based).
    pub fn difficulty_for(&self, wave: u32) -> f32 {
        self.base_difficulty + self.difficulty_step * wave.saturating_sub(1) as f32
    }
}

fn config_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("sim.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config: SimConfig = ron::from_str("(waves: 3, seed: Some(42))").unwrap();
        assert_eq!(config.waves, 3);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.pickup_chance, default_pickup_chance());
        assert!(config.room_path.is_none());
    }

    #[test]
    fn difficulty_ramps_linearly() {
        let config = SimConfig {
            base_difficulty: 4.0,
            difficulty_step: 1.5,
            ..Default::default()
        };
        assert_eq!(config.difficulty_for(1), 4.0);
        assert_eq!(config.difficulty_for(3), 7.0);
        assert_eq!(config.difficulty_for(0), 4.0);
    }

    #[test]
    fn missing_file_falls_back() {
        let config = SimConfig::load_or_default("does/not/exist/sim.ron");
        assert_eq!(config, SimConfig::default());
    }
}
