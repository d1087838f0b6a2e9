// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Engine configuration loaded from environment variables.

/// Engine configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Upper bound on regeneration passes for one logical edit.
    pub max_passes: u32,
    /// Wall opening used for windows placed without a region.
    pub opening_width: f64,
    pub opening_height: f64,
    /// Wall opening used for doors and balconies placed without a region.
    pub door_width: f64,
    pub door_height: f64,
}

impl EngineConfig {
    /// Built-in defaults, ignoring the environment.
    pub fn builtin() -> Self {
        Self {
            max_passes: 4,
            opening_width: 1.0,
            opening_height: 1.0,
            door_width: 1.0,
            door_height: 2.0,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let builtin = Self::builtin();
        Self {
            max_passes: std::env::var("CYNTHIA_MAX_PASSES")
                .unwrap_or_else(|_| builtin.max_passes.to_string())
                .parse()
                .unwrap_or(builtin.max_passes)
                .max(1),
            opening_width: env_length("CYNTHIA_OPENING_WIDTH", builtin.opening_width),
            opening_height: env_length("CYNTHIA_OPENING_HEIGHT", builtin.opening_height),
            door_width: env_length("CYNTHIA_DOOR_WIDTH", builtin.door_width),
            door_height: env_length("CYNTHIA_DOOR_HEIGHT", builtin.door_height),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_length(name: &str, default: f64) -> f64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_defaults() {
        let config = EngineConfig::builtin();
        assert_eq!(config.max_passes, 4);
        assert_eq!(config.door_height, 2.0);
    }

    #[test]
    fn unset_length_falls_back() {
        assert_eq!(env_length("CYNTHIA_TEST_UNSET_LENGTH", 1.5), 1.5);
    }
}
