// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::TestResultStatus;
use thiserror::Error;

/// An error returned when a [`TestInterval`](crate::TestInterval) would end before it starts.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("interval start ({start_millis} ms) is after its end ({end_millis} ms)")]
pub struct IntervalError {
    start_millis: u64,
    end_millis: u64,
}

impl IntervalError {
    pub(crate) fn new(start_millis: u64, end_millis: u64) -> Self {
        Self {
            start_millis,
            end_millis,
        }
    }

    /// The requested start time, in milliseconds since the Unix epoch.
    pub fn start_millis(&self) -> u64 {
        self.start_millis
    }

    /// The requested end time, in milliseconds since the Unix epoch.
    pub fn end_millis(&self) -> u64 {
        self.end_millis
    }
}

/// Error returned while parsing a [`TestResultStatus`] value from a string.
#[derive(Clone, Debug, Error)]
#[error(
    "unrecognized value for test result status: {input}\n(known values: {})",
    TestResultStatus::variants().join(", "),
)]
pub struct StatusParseError {
    input: String,
}

impl StatusParseError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
