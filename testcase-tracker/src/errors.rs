// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced by the tracker.
//!
//! Lifecycle transitions never fail: a transition that loses a race is reported through its
//! return value. The only fallible operations are around loading configuration.

use camino::Utf8PathBuf;
use thiserror::Error;

/// An error that occurred while loading a [`TrackerConfig`](crate::config::TrackerConfig).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read tracker config at `{path}`")]
    Read {
        /// The path to the config file.
        path: Utf8PathBuf,

        /// The underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// The config file is not valid TOML, or does not match the expected schema.
    #[error("failed to parse tracker config{}", .path.as_ref().map_or_else(String::new, |path| format!(" at `{path}`")))]
    Parse {
        /// The path to the config file, if the config was read from disk.
        path: Option<Utf8PathBuf>,

        /// The underlying TOML error.
        #[source]
        error: toml::de::Error,
    },
}
