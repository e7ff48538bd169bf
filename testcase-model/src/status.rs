// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::StatusParseError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The outcome category of a test, as recorded in a [`TestResult`](crate::TestResult).
///
/// Whether a test passed is not part of the status: a `Completed` test may still carry failures.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestResultStatus {
    /// The test never ran, or was skipped by the framework after starting.
    Skipped,

    /// The test started but was stopped before it could finish.
    Interrupted,

    /// The test was suppressed before it started.
    Suppressed,

    /// The test was cancelled before it started.
    Cancelled,

    /// The test ran to completion.
    Completed,
}

impl TestResultStatus {
    /// Returns string representations of all known variants.
    pub fn variants() -> &'static [&'static str] {
        &[
            "skipped",
            "interrupted",
            "suppressed",
            "cancelled",
            "completed",
        ]
    }

    /// Returns true if the body of the test was executed, even partially.
    pub fn was_run(self) -> bool {
        match self {
            TestResultStatus::Interrupted | TestResultStatus::Completed => true,
            TestResultStatus::Skipped
            | TestResultStatus::Suppressed
            | TestResultStatus::Cancelled => false,
        }
    }
}

impl fmt::Display for TestResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestResultStatus::Skipped => write!(f, "skipped"),
            TestResultStatus::Interrupted => write!(f, "interrupted"),
            TestResultStatus::Suppressed => write!(f, "suppressed"),
            TestResultStatus::Cancelled => write!(f, "cancelled"),
            TestResultStatus::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for TestResultStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let val = match s {
            "skipped" => TestResultStatus::Skipped,
            "interrupted" => TestResultStatus::Interrupted,
            "suppressed" => TestResultStatus::Suppressed,
            "cancelled" => TestResultStatus::Cancelled,
            "completed" => TestResultStatus::Completed,
            other => return Err(StatusParseError::new(other)),
        };
        Ok(val)
    }
}
