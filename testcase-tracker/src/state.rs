// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;
use testcase_model::TestResultStatus;

/// The lifecycle state of a tracked test case.
///
/// Transitions never lead back to [`Initial`](Self::Initial):
///
/// ```text
/// Initial --start--> Started --finish--> Finished
///    |                  |----skip-----> Skipped
///    |                  `--interrupt--> Interrupted
///    |--suppress--> Suppressed
///    |--interrupt-> Cancelled
///    `--failure---> Finished
/// ```
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum TestCaseState {
    /// No lifecycle event has been recorded yet.
    Initial,

    /// The test has started and not yet ended.
    Started,

    /// The test started, then was skipped.
    Skipped,

    /// The test was suppressed before starting.
    Suppressed,

    /// The test was cancelled before starting.
    Cancelled,

    /// The test was interrupted while running.
    Interrupted,

    /// The test finished, successfully or not.
    Finished,
}

impl TestCaseState {
    /// The status a result reports if the test is observed in this state.
    ///
    /// A test caught in [`Started`](Self::Started) is reported as interrupted.
    pub const fn result_status(self) -> TestResultStatus {
        match self {
            TestCaseState::Initial => TestResultStatus::Skipped,
            TestCaseState::Started => TestResultStatus::Interrupted,
            TestCaseState::Skipped => TestResultStatus::Skipped,
            TestCaseState::Suppressed => TestResultStatus::Suppressed,
            TestCaseState::Cancelled => TestResultStatus::Cancelled,
            TestCaseState::Interrupted => TestResultStatus::Interrupted,
            TestCaseState::Finished => TestResultStatus::Completed,
        }
    }

    /// Returns true if no further transitions are possible from this state.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, TestCaseState::Initial | TestCaseState::Started)
    }
}

impl fmt::Display for TestCaseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestCaseState::Initial => write!(f, "initial"),
            TestCaseState::Started => write!(f, "started"),
            TestCaseState::Skipped => write!(f, "skipped"),
            TestCaseState::Suppressed => write!(f, "suppressed"),
            TestCaseState::Cancelled => write!(f, "cancelled"),
            TestCaseState::Interrupted => write!(f, "interrupted"),
            TestCaseState::Finished => write!(f, "finished"),
        }
    }
}
