//! Chest tuning. Loaded from `chest_settings.ron` at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Default settings file, looked up in the current directory.
pub const SETTINGS_FILE: &str = "chest_settings.ron";

/// Visual/physical description of the chest object that gets placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChestTemplate {
    /// Asset name handed to the renderer.
    pub name: String,
    /// Edge clearance the chest needs on a surface (metres).
    #[serde(default = "default_footprint")]
    pub footprint: f32,
    /// Uniform scale applied to the spawned chest.
    #[serde(default = "default_scale")]
    pub scale: f32,
}

impl Default for ChestTemplate {
    fn default() -> Self {
        Self {
            name: "supply_chest".to_string(),
            footprint: default_footprint(),
            scale: default_scale(),
        }
    }
}

/// Chest spawning and reward tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChestSettings {
    /// Difficulty an empty chest is worth.
    #[serde(default = "default_chest_value")]
    pub chest_difficulty_value: f32,
    /// Difficulty each torpedo inside a chest is worth.
    #[serde(default = "default_torpedo_value")]
    pub chest_torpedo_difficulty_value: f32,
    /// Difficulty each health pack inside a chest is worth.
    #[serde(default = "default_health_value")]
    pub chest_health_difficulty_value: f32,
    /// Fraction of a wave's difficulty delta that may be handed back as chests.
    #[serde(default = "default_wave_contribution")]
    pub chest_max_wave_contribution: f32,
    /// Most chests spawned by a single wave.
    #[serde(default = "default_max_spawn_per_wave")]
    pub chest_max_spawn_per_wave: u32,
    /// Most chests alive at once.
    #[serde(default = "default_chest_max")]
    pub chest_max: u32,
    /// Torpedo capacity of one chest.
    #[serde(default = "default_max_torpedoes")]
    pub chest_max_torpedoes: u32,
    /// Health capacity of one chest.
    #[serde(default = "default_max_health")]
    pub chest_max_health: u32,
    /// Chest object to place. Without one the spawner disables itself.
    #[serde(default = "default_template")]
    pub chest_template: Option<ChestTemplate>,
}

fn default_footprint() -> f32 {
    0.5
}
fn default_scale() -> f32 {
    1.0
}
fn default_chest_value() -> f32 {
    2.0
}
fn default_torpedo_value() -> f32 {
    1.0
}
fn default_health_value() -> f32 {
    0.5
}
fn default_wave_contribution() -> f32 {
    0.5
}
fn default_max_spawn_per_wave() -> u32 {
    3
}
fn default_chest_max() -> u32 {
    6
}
fn default_max_torpedoes() -> u32 {
    4
}
fn default_max_health() -> u32 {
    4
}
fn default_template() -> Option<ChestTemplate> {
    Some(ChestTemplate::default())
}

impl Default for ChestSettings {
    fn default() -> Self {
        Self {
            chest_difficulty_value: default_chest_value(),
            chest_torpedo_difficulty_value: default_torpedo_value(),
            chest_health_difficulty_value: default_health_value(),
            chest_max_wave_contribution: default_wave_contribution(),
            chest_max_spawn_per_wave: default_max_spawn_per_wave(),
            chest_max: default_chest_max(),
            chest_max_torpedoes: default_max_torpedoes(),
            chest_max_health: default_max_health(),
            chest_template: default_template(),
        }
    }
}

/// Per-item difficulty weights, used to score what is lying around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyWeights {
    pub chest: f32,
    pub torpedo: f32,
    pub health: f32,
}

impl ChestSettings {
    /// Check the invariants the allocator divides by. Call once at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("chest_difficulty_value", self.chest_difficulty_value)?;
        positive("chest_torpedo_difficulty_value", self.chest_torpedo_difficulty_value)?;
        positive("chest_health_difficulty_value", self.chest_health_difficulty_value)?;
        let contribution = self.chest_max_wave_contribution;
        if !(contribution.is_finite() && contribution >= 0.0) {
            return Err(ConfigError::Negative {
                name: "chest_max_wave_contribution",
                value: self.chest_max_wave_contribution,
            });
        }
        let divisor = self.max_single_item_chest_value();
        if divisor <= 0.0 {
            return Err(ConfigError::NonPositiveChestDivisor { value: divisor });
        }
        if let Some(template) = &self.chest_template {
            if !(template.footprint.is_finite() && template.footprint >= 0.0) {
                return Err(ConfigError::Negative {
                    name: "chest_template.footprint",
                    value: template.footprint,
                });
            }
        }
        Ok(())
    }

    /// Difficulty of a chest holding only the cheaper reward type, minus that reward.
    pub fn max_single_item_chest_value(&self) -> f32 {
        self.chest_difficulty_value
            - self
                .chest_torpedo_difficulty_value
                .min(self.chest_health_difficulty_value)
    }

    pub fn difficulty_weights(&self) -> DifficultyWeights {
        DifficultyWeights {
            chest: self.chest_difficulty_value,
            torpedo: self.chest_torpedo_difficulty_value,
            health: self.chest_health_difficulty_value,
        }
    }

    /// Strict parse; errors are returned, not defaulted.
    pub fn from_ron_str(data: &str) -> Result<Self, ConfigError> {
        ron::from_str(data).map_err(|e| ConfigError::Ron(e.to_string()))
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_ron_str(&data)
    }

    /// Load settings from `path`. If the file is missing or invalid, returns defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if let Ok(data) = std::fs::read_to_string(path) {
            match Self::from_ron_str(&data) {
                Ok(s) => return s,
                Err(e) => log::warn!("Invalid chest settings at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Load from [`SETTINGS_FILE`] in the current directory.
    pub fn load() -> Self {
        Self::load_or_default(settings_path())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositiveCost { name, value })
    }
}

fn settings_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(SETTINGS_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        ChestSettings::default().validate().unwrap();
    }

    #[test]
    fn zero_cost_is_rejected() {
        let settings = ChestSettings {
            chest_health_difficulty_value: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::NonPositiveCost { name: "chest_health_difficulty_value", .. })
        ));
    }

    #[test]
    fn chest_cheaper_than_its_contents_is_rejected() {
        let settings = ChestSettings {
            chest_difficulty_value: 0.5,
            chest_torpedo_difficulty_value: 1.0,
            chest_health_difficulty_value: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::NonPositiveChestDivisor { .. })
        ));
    }

    #[test]
    fn negative_contribution_is_rejected() {
        let settings = ChestSettings {
            chest_max_wave_contribution: -1.0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(ConfigError::Negative { .. })));
    }

    #[test]
    fn partial_ron_fills_defaults() {
        let settings =
            ChestSettings::from_ron_str("(chest_max: 10, chest_template: None)").unwrap();
        assert_eq!(settings.chest_max, 10);
        assert_eq!(settings.chest_template, None);
        assert_eq!(settings.chest_max_spawn_per_wave, default_max_spawn_per_wave());
    }

    #[test]
    fn template_fields_default() {
        let settings =
            ChestSettings::from_ron_str(r#"(chest_template: Some((name: "crate")))"#).unwrap();
        let template = settings.chest_template.unwrap();
        assert_eq!(template.name, "crate");
        assert_eq!(template.footprint, 0.5);
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("loot_invalid_chest_settings.ron");
        std::fs::write(&path, "(chest_max: \"lots\")").unwrap();
        assert_eq!(ChestSettings::load_or_default(&path), ChestSettings::default());
        assert!(matches!(ChestSettings::load_from(&path), Err(ConfigError::Ron(_))));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn divisor_uses_cheaper_reward() {
        let settings = ChestSettings::default();
        assert_eq!(settings.max_single_item_chest_value(), 1.5);
    }
}
