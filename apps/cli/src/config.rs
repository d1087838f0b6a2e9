// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI configuration loaded from environment variables.

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the OBJ file to write.
    pub output: String,
    /// Number of storeys in the demo building.
    pub floors: i64,
    /// Windows along the front wall of every storey.
    pub windows_per_floor: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            output: std::env::var("CYNTHIA_OUTPUT").unwrap_or_else(|_| "building.obj".into()),
            floors: std::env::var("CYNTHIA_FLOORS")
                .unwrap_or_else(|_| "2".into())
                .parse()
                .unwrap_or(2),
            windows_per_floor: std::env::var("CYNTHIA_WINDOWS_PER_FLOOR")
                .unwrap_or_else(|_| "3".into())
                .parse()
                .unwrap_or(3),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
