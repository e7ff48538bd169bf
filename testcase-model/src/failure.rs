// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::error;
use swrite::{SWrite, swrite};

/// A failure captured while a test was running.
///
/// This mirrors what a JUnit report records for a non-successful test: a short message, the type
/// of the failure, and a longer free-form description such as a backtrace.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestFailure {
    /// The failure message.
    pub message: Option<String>,

    /// The type of the failure, e.g. the name of the error or panic type.
    pub kind: Option<String>,

    /// The long-form description of the failure.
    pub description: Option<String>,
}

impl TestFailure {
    /// Creates a new failure with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            kind: None,
            description: None,
        }
    }

    /// Creates a failure from an error, rendering its chain of sources into the description.
    pub fn from_error(err: &(dyn error::Error + 'static)) -> Self {
        let mut description = err.to_string();
        let mut source = err.source();
        while let Some(next) = source {
            swrite!(description, "\n  caused by: {next}");
            source = next.source();
        }

        Self {
            message: Some(err.to_string()),
            kind: None,
            description: Some(description),
        }
    }

    /// Sets the type of the failure.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Sets the long-form description of the failure.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
