/// Tunable game parameters, loadable from a RON file.
///
/// Every field has a default matching the classic game, so a missing or
/// unreadable config file silently falls back to stock behavior.

use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Countdown length in seconds; reaching 0 ends the game.
    pub countdown_start: u32,
    /// Delay between reaching the winning row and the point being awarded.
    /// 0 awards immediately; 250 reproduces the delayed-confirmation variant.
    pub goal_delay_ms: u64,
    /// Min/max milliseconds between enemy spawns.
    pub spawn_interval_ms: (u64, u64),
    /// Min/max enemy speed in pixels per second.
    pub enemy_speed: (f32, f32),
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            countdown_start: 60,
            goal_delay_ms: 0,
            spawn_interval_ms: (500, 1500),
            enemy_speed: (200.0, 600.0),
        }
    }
}

impl GameConfig {
    /// Goal-confirmation delay as fractional seconds.
    pub fn goal_delay_secs(&self) -> f32 {
        self.goal_delay_ms as f32 / 1000.0
    }

    /// Parse a config from RON text.
    pub fn from_ron(ron_str: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(ron_str)
    }

    /// Load from a RON file, falling back to defaults if the file is absent
    /// or malformed.  Configuration problems must never stop the game.
    pub fn load_or_default(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| Self::from_ron(&s).ok())
            .unwrap_or_default()
    }
}
