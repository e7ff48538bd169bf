// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for test case trackers.
//!
//! The config is read from TOML:
//!
//! ```toml
//! [tracker]
//! repeated-property-initial-index = 1
//! ```

use crate::errors::ConfigError;
use camino::Utf8Path;
use serde::Deserialize;
use std::{collections::BTreeSet, io};
use tracing::{debug, warn};

/// The suffix appended to the first export of a repeated property.
pub const DEFAULT_REPEATED_PROPERTY_INITIAL_INDEX: usize = 1;

/// Settings shared by all trackers in a run.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TrackerConfig {
    /// The index appended to the first export of a repeated property. Later exports of the same
    /// name count up from here.
    #[serde(default = "default_initial_index")]
    pub repeated_property_initial_index: usize,
}

fn default_initial_index() -> usize {
    DEFAULT_REPEATED_PROPERTY_INITIAL_INDEX
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            repeated_property_initial_index: DEFAULT_REPEATED_PROPERTY_INITIAL_INDEX,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct DeserializedConfig {
    #[serde(default)]
    tracker: TrackerConfig,
}

/// Receives warnings produced while loading a config.
pub trait ConfigWarnings {
    /// Called with the keys in the config that were not recognized.
    fn unknown_config_keys(&mut self, config_file: Option<&Utf8Path>, unknown: &BTreeSet<String>);
}

/// Logs config warnings through `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultConfigWarnings;

impl ConfigWarnings for DefaultConfigWarnings {
    fn unknown_config_keys(&mut self, config_file: Option<&Utf8Path>, unknown: &BTreeSet<String>) {
        let keys = unknown.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
        match config_file {
            Some(path) => warn!("ignoring unknown tracker config keys in {path}: {keys}"),
            None => warn!("ignoring unknown tracker config keys: {keys}"),
        }
    }
}

impl TrackerConfig {
    /// Parses a config from TOML, logging unknown keys.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Self::from_toml_str_with_warnings(contents, &mut DefaultConfigWarnings)
    }

    /// Parses a config from TOML, reporting unknown keys to `warnings`.
    pub fn from_toml_str_with_warnings(
        contents: &str,
        warnings: &mut impl ConfigWarnings,
    ) -> Result<Self, ConfigError> {
        Self::parse(contents, None, warnings)
    }

    /// Loads a config from `path`, logging unknown keys.
    ///
    /// A missing file yields the default config.
    pub fn from_path(path: &Utf8Path) -> Result<Self, ConfigError> {
        Self::from_path_with_warnings(path, &mut DefaultConfigWarnings)
    }

    /// Loads a config from `path`, reporting unknown keys to `warnings`.
    ///
    /// A missing file yields the default config.
    pub fn from_path_with_warnings(
        path: &Utf8Path,
        warnings: &mut impl ConfigWarnings,
    ) -> Result<Self, ConfigError> {
        debug!("tracker config: attempting to load from {path}");
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                debug!("tracker config: file does not exist at {path}, using defaults");
                return Ok(Self::default());
            }
            Err(error) => {
                return Err(ConfigError::Read {
                    path: path.to_owned(),
                    error,
                });
            }
        };

        let config = Self::parse(&contents, Some(path), warnings)?;
        debug!("tracker config: loaded successfully from {path}");
        Ok(config)
    }

    fn parse(
        contents: &str,
        path: Option<&Utf8Path>,
        warnings: &mut impl ConfigWarnings,
    ) -> Result<Self, ConfigError> {
        let (config, unknown) = deserialize_toml(contents).map_err(|error| ConfigError::Parse {
            path: path.map(ToOwned::to_owned),
            error,
        })?;

        if !unknown.is_empty() {
            warnings.unknown_config_keys(path, &unknown);
        }

        Ok(config.tracker)
    }
}

fn deserialize_toml(
    contents: &str,
) -> Result<(DeserializedConfig, BTreeSet<String>), toml::de::Error> {
    let deserializer = toml::Deserializer::parse(contents)?;
    let mut unknown = BTreeSet::new();
    let config: DeserializedConfig = serde_ignored::deserialize(deserializer, |path| {
        unknown.insert(path.to_string());
    })?;
    Ok((config, unknown))
}
