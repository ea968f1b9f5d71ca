// SPDX-License-Identifier: MPL-2.0
//! This module handles the feed's configuration, including loading and saving
//! settings to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use pilgrim_feed::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Make the generator fire on every tick
//! config.generator.probability = 1.0;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::domain::diagnostics::BufferCapacity;
use crate::domain::feed::{DropdownLimit, Probability, TickPeriod};
use crate::error::Result;
use crate::feed::{default_candidates, Candidate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PilgrimFeed";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Settings of the synthetic notification generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub enabled: bool,
    pub tick_period_secs: u64,
    pub probability: f64,
    pub candidates: Vec<Candidate>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_GENERATOR_ENABLED,
            tick_period_secs: DEFAULT_TICK_PERIOD_SECS,
            probability: DEFAULT_TICK_PROBABILITY,
            candidates: default_candidates(),
        }
    }
}

impl GeneratorConfig {
    /// Tick period, clamped to its valid range.
    #[must_use]
    pub fn tick_period(&self) -> TickPeriod {
        TickPeriod::new(self.tick_period_secs)
    }

    /// Per-tick probability, clamped to `[0, 1]`.
    #[must_use]
    pub fn probability(&self) -> Probability {
        Probability::new(self.probability)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub dropdown_limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            dropdown_limit: DEFAULT_DROPDOWN_LIMIT,
        }
    }
}

impl DisplayConfig {
    #[must_use]
    pub fn dropdown_limit(&self) -> DropdownLimit {
        DropdownLimit::new(self.dropdown_limit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    pub buffer_capacity: usize,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY,
        }
    }
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn buffer_capacity(&self) -> BufferCapacity {
        BufferCapacity::new(self.buffer_capacity)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Parses the contents of a settings file.
///
/// # Errors
///
/// Returns [`Error::Config`](crate::error::Error::Config) naming the first
/// offending key, e.g. an unknown candidate category.
pub fn parse_settings(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// Reads settings from `path`. Unparseable TOML is reported on stderr and
/// yields the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(parse_settings(&content).unwrap_or_else(|err| {
        eprintln!(
            "Ignoring settings in {}, using defaults: {err}",
            path.display()
        );
        Config::default()
    }))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::feed::{Category, Priority};
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_generator_settings() {
        let mut config = Config::default();
        config.generator.tick_period_secs = 5;
        config.generator.probability = 1.0;
        config.generator.candidates = vec![Candidate::new(
            "Darshan queue reopened",
            Category::Queue,
            Priority::Low,
        )];
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn unknown_category_in_candidates_falls_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            r#"
[[generator.candidates]]
message = "Fireworks tonight"
category = "festival"
priority = "low"
"#,
        )
        .expect("failed to write toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.generator.candidates, default_candidates());
    }

    #[test]
    fn parse_settings_reports_bad_candidate() {
        let err = parse_settings(
            r#"
[generator]
probability = 1.0

[[generator.candidates]]
message = "Fireworks tonight"
category = "festival"
priority = "low"
"#,
        )
        .unwrap_err();

        match err {
            Error::Config(message) => assert!(message.contains("festival"), "{message}"),
            other => panic!("expected Config variant, got {other:?}"),
        }
    }

    #[test]
    fn parse_settings_accepts_valid_file() {
        let config = parse_settings("[display]\ndropdown_limit = 3\n").expect("valid settings");
        assert_eq!(config.display.dropdown_limit, 3);
        assert_eq!(config.generator, GeneratorConfig::default());
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[generator]\nprobability = 0.0\n").expect("failed to write");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded.generator.probability(), Probability::NEVER);
        assert_eq!(loaded.generator.tick_period_secs, DEFAULT_TICK_PERIOD_SECS);
        assert_eq!(loaded.generator.candidates.len(), 4);
        assert_eq!(loaded.display.dropdown_limit, DEFAULT_DROPDOWN_LIMIT);
    }

    #[test]
    fn load_from_missing_path_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(crate::error::Error::Io(_))));
    }

    #[test]
    fn out_of_range_values_are_clamped_by_accessors() {
        let mut config = Config::default();
        config.generator.tick_period_secs = 0;
        config.generator.probability = 7.0;
        config.display.dropdown_limit = 0;
        config.diagnostics.buffer_capacity = 1;

        assert_eq!(config.generator.tick_period().value(), MIN_TICK_PERIOD_SECS);
        assert_eq!(config.generator.probability(), Probability::ALWAYS);
        assert_eq!(config.display.dropdown_limit().value(), MIN_DROPDOWN_LIMIT);
        assert_eq!(
            config.diagnostics.buffer_capacity().value(),
            MIN_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }
}
