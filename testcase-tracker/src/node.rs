// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interfaces through which a test framework talks to tracked tests.

use crate::description::{TestDescription, TestId};
use testcase_model::{TestFailure, TestResult};

/// A node in a tree of tracked tests.
///
/// Suites aggregate their children's results through this interface. All notifications take the
/// current time in milliseconds since the Unix epoch. Notifications that don't apply to the node's
/// current state are ignored.
pub trait TestNode: Send + Sync {
    /// The description this node was created for.
    fn description(&self) -> &dyn TestDescription;

    /// Returns true if this node is a leaf representing a single test case.
    fn is_test_case(&self) -> bool;

    /// The test, or a test inside this node, was interrupted.
    fn test_interrupted(&self, now: u64);

    /// The test was skipped after starting.
    fn test_skipped(&self, now: u64);

    /// The test was suppressed before starting.
    fn test_suppressed(&self, now: u64);

    /// The test failed as a whole.
    fn test_failure(&self, failure: TestFailure, now: u64);

    /// The dynamic test `test` failed.
    fn dynamic_test_failure(&self, test: &TestId, failure: TestFailure, now: u64);

    /// Renders the current state of this node.
    fn build_result(&self) -> TestResult;
}

/// Receives properties exported by a running test.
pub trait PropertyExporter: Send + Sync {
    /// Exports a property, replacing any earlier value exported under the same name.
    fn export_property(&self, name: &str, value: &str);

    /// Exports a property that may be exported many times under the same base name.
    ///
    /// Each export is stored under a new name made by appending a running index to `name`. The
    /// name actually used is returned.
    fn export_repeated_property(&self, name: &str, value: &str) -> String;
}
