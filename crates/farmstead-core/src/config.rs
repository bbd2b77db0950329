//! Configuration loading and typed config structures for the Farmstead simulation.
//!
//! The optional configuration file is `farmstead-config.yaml`. This module
//! defines strongly-typed structs that mirror the YAML structure, and
//! provides a loader that reads it. Every field has a default, so an empty
//! file (or no file at all) plays the standard ten-day challenge.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use farmstead_types::{CropType, GameMode, GridPos, ItemName, LivestockType};
use farmstead_world::starting_farm;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "FARMSTEAD_CONFIG";

/// Environment variable overriding `game.mode`.
pub const MODE_ENV: &str = "FARMSTEAD_MODE";

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "farmstead-config.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but describes an impossible farm.
    #[error("invalid configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level farm configuration.
///
/// Mirrors the structure of `farmstead-config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FarmConfig {
    /// Mode and budget settings.
    #[serde(default)]
    pub game: GameConfig,

    /// Crop and livestock definitions.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Livestock type names, one entry per animal, in feeding order.
    #[serde(default = "starting_farm::default_herd")]
    pub herd: Vec<String>,

    /// Starting balances. Items not listed start at zero.
    #[serde(default = "starting_farm::default_starting_inventory")]
    pub inventory: BTreeMap<ItemName, u32>,

    /// Goal thresholds, in the order they are written.
    #[serde(
        default = "starting_farm::default_goal",
        deserialize_with = "ordered_thresholds"
    )]
    pub goal: Vec<(ItemName, u32)>,

    /// Grid layout for the spatial variant.
    #[serde(default)]
    pub grid: GridConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for FarmConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            catalog: CatalogConfig::default(),
            herd: starting_farm::default_herd(),
            inventory: starting_farm::default_starting_inventory(),
            goal: starting_farm::default_goal(),
            grid: GridConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl FarmConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// The `FARMSTEAD_MODE` environment variable overrides `game.mode`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if the mode override is not recognized.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Override settings from environment variables when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `FARMSTEAD_MODE` holds an
    /// unknown mode.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        let mode = std::env::var(MODE_ENV).ok();
        self.apply_mode_override(mode.as_deref())
    }

    /// Override `game.mode` from a raw string (`menu` or `grid`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for any other value.
    pub fn apply_mode_override(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        let Some(raw) = value else {
            return Ok(());
        };
        self.game.mode = match raw.trim().to_lowercase().as_str() {
            "menu" => GameMode::Menu,
            "grid" => GameMode::Grid,
            other => {
                return Err(ConfigError::Invalid {
                    reason: format!("unknown game mode: {other}"),
                });
            }
        };
        Ok(())
    }

    /// Check that the configuration describes a playable farm.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        crate::farm::Farm::from_config(self)
            .map(|_farm| ())
            .map_err(|e| ConfigError::Invalid {
                reason: e.to_string(),
            })
    }
}

/// Mode and budget settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Interaction model.
    #[serde(default)]
    pub mode: GameMode,

    /// Last playable day.
    #[serde(default = "default_day_limit")]
    pub day_limit: u32,

    /// Actions granted each day.
    #[serde(default = "default_actions_per_day")]
    pub actions_per_day: u32,

    /// Number of field plots in the menu variant. The grid variant uses
    /// one plot per `grid.fields` entry instead.
    #[serde(default = "default_field_count")]
    pub field_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Menu,
            day_limit: default_day_limit(),
            actions_per_day: default_actions_per_day(),
            field_count: default_field_count(),
        }
    }
}

/// Crop and livestock definitions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogConfig {
    /// The item consumed when feeding.
    #[serde(default = "default_feed_item")]
    pub feed_item: ItemName,

    /// Plantable crops in menu order.
    #[serde(default = "starting_farm::default_crops")]
    pub crops: Vec<CropType>,

    /// Livestock types.
    #[serde(default = "starting_farm::default_livestock_types")]
    pub livestock_types: Vec<LivestockType>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            feed_item: default_feed_item(),
            crops: starting_farm::default_crops(),
            livestock_types: starting_farm::default_livestock_types(),
        }
    }
}

/// Grid layout for the spatial variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GridConfig {
    /// Number of columns.
    #[serde(default = "default_grid_width")]
    pub width: u32,

    /// Number of rows.
    #[serde(default = "default_grid_height")]
    pub height: u32,

    /// Where the player starts.
    #[serde(default = "starting_farm::default_start")]
    pub start: GridPos,

    /// Where the barn is.
    #[serde(default = "starting_farm::default_barn")]
    pub barn: GridPos,

    /// One cell per field plot.
    #[serde(default = "starting_farm::default_field_positions")]
    pub fields: Vec<GridPos>,

    /// Whether each step on the grid costs an action.
    #[serde(default)]
    pub steps_consume_actions: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: default_grid_width(),
            height: default_grid_height(),
            start: starting_farm::default_start(),
            barn: starting_farm::default_barn(),
            fields: starting_farm::default_field_positions(),
            steps_consume_actions: false,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error) used when `RUST_LOG`
    /// is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Read a YAML mapping as `(key, value)` pairs in document order.
fn ordered_thresholds<'de, D>(deserializer: D) -> Result<Vec<(ItemName, u32)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct Ordered;

    impl<'de> Visitor<'de> for Ordered {
        type Value = Vec<(ItemName, u32)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of item names to quantities")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(pair) = map.next_entry()? {
                pairs.push(pair);
            }
            Ok(pairs)
        }
    }

    deserializer.deserialize_map(Ordered)
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_day_limit() -> u32 {
    starting_farm::DEFAULT_DAY_LIMIT
}

const fn default_actions_per_day() -> u32 {
    starting_farm::DEFAULT_ACTIONS_PER_DAY
}

const fn default_field_count() -> usize {
    starting_farm::DEFAULT_FIELD_COUNT
}

fn default_feed_item() -> ItemName {
    ItemName::new(starting_farm::FEED_ITEM)
}

const fn default_grid_width() -> u32 {
    starting_farm::DEFAULT_GRID_WIDTH
}

const fn default_grid_height() -> u32 {
    starting_farm::DEFAULT_GRID_HEIGHT
}

fn default_log_level() -> String {
    "warn".to_owned()
}
