// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wall-clock intervals during which a test was active.
//!
//! Times are recorded as milliseconds since the Unix epoch, as reported by whoever drives the
//! test. An interval is opened at its first recorded instant and only ever grows at the end.

use crate::IntervalError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// An immutable `[start, end]` span of wall-clock time, in milliseconds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawInterval")]
pub struct TestInterval {
    start_millis: u64,
    end_millis: u64,
}

/// The unchecked form of a [`TestInterval`], validated on deserialization.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInterval {
    start_millis: u64,
    end_millis: u64,
}

impl TryFrom<RawInterval> for TestInterval {
    type Error = IntervalError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Self::new(raw.start_millis, raw.end_millis)
    }
}

impl TestInterval {
    /// Creates a new interval, failing if `start_millis` is after `end_millis`.
    pub fn new(start_millis: u64, end_millis: u64) -> Result<Self, IntervalError> {
        if start_millis > end_millis {
            return Err(IntervalError::new(start_millis, end_millis));
        }
        Ok(Self {
            start_millis,
            end_millis,
        })
    }

    /// Creates a zero-length interval starting and ending at `now`.
    pub fn instant(now: u64) -> Self {
        Self {
            start_millis: now,
            end_millis: now,
        }
    }

    /// Returns a copy of this interval that ends at `end_millis` instead.
    pub fn with_end_millis(&self, end_millis: u64) -> Result<Self, IntervalError> {
        Self::new(self.start_millis, end_millis)
    }

    /// The start of the interval, in milliseconds since the Unix epoch.
    #[inline]
    pub fn start_millis(&self) -> u64 {
        self.start_millis
    }

    /// The end of the interval, in milliseconds since the Unix epoch.
    #[inline]
    pub fn end_millis(&self) -> u64 {
        self.end_millis
    }

    /// The length of the interval.
    pub fn run_time(&self) -> Duration {
        Duration::from_millis(self.end_millis - self.start_millis)
    }

    /// The start of the interval as a UTC timestamp.
    ///
    /// Returns `None` if the start time can't be represented as a date.
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.start_millis)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }
}
