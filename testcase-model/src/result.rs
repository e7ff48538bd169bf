// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{TestFailure, TestInterval, TestResultStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The fields that make up a [`TestResult`].
///
/// This is a plain bag of values passed to [`TestResult::new`] in one go.
#[derive(Clone, Debug)]
pub struct TestResultParts {
    /// The name of the test.
    pub name: String,

    /// The name of the class, or other grouping, that owns the test.
    pub class_name: String,

    /// Properties exported while the test was running.
    pub properties: BTreeMap<String, String>,

    /// Failures attributed to this result.
    pub failures: Vec<TestFailure>,

    /// When the test was active, if it was ever active.
    pub run_time_interval: Option<TestInterval>,

    /// How the test ended.
    pub status: TestResultStatus,

    /// The number of test units this result represents.
    pub num_tests: usize,

    /// The number of test units in this result that failed.
    pub num_failures: usize,

    /// Results for dynamic tests discovered while this test ran.
    pub child_results: Vec<TestResult>,
}

/// An immutable, rendered result for a test and any dynamic tests it spawned.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    name: String,
    class_name: String,
    properties: BTreeMap<String, String>,
    failures: Vec<TestFailure>,
    run_time_interval: Option<TestInterval>,
    status: TestResultStatus,
    num_tests: usize,
    num_failures: usize,
    child_results: Vec<TestResult>,
}

impl TestResult {
    /// Creates a new result from its parts.
    pub fn new(parts: TestResultParts) -> Self {
        let TestResultParts {
            name,
            class_name,
            properties,
            failures,
            run_time_interval,
            status,
            num_tests,
            num_failures,
            child_results,
        } = parts;
        Self {
            name,
            class_name,
            properties,
            failures,
            run_time_interval,
            status,
            num_tests,
            num_failures,
            child_results,
        }
    }

    /// The name of the test.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name of the class, or other grouping, that owns the test.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Properties exported while the test was running, ordered by name.
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Failures attributed to this result, in the order they were recorded.
    pub fn failures(&self) -> &[TestFailure] {
        &self.failures
    }

    /// When the test was active, or `None` if it never transitioned out of its initial state.
    pub fn run_time_interval(&self) -> Option<TestInterval> {
        self.run_time_interval
    }

    /// How the test ended.
    pub fn status(&self) -> TestResultStatus {
        self.status
    }

    /// The number of test units this result represents.
    pub fn num_tests(&self) -> usize {
        self.num_tests
    }

    /// The number of test units in this result that failed.
    ///
    /// Without failures of its own, a result counts every dynamic test a failure was recorded
    /// for, including ones it never listed as children. This can exceed
    /// [`num_tests`](Self::num_tests).
    pub fn num_failures(&self) -> usize {
        self.num_failures
    }

    /// Results for dynamic tests, in the order they were discovered.
    pub fn child_results(&self) -> &[TestResult] {
        &self.child_results
    }

    /// Returns true if the body of the test was executed.
    pub fn was_run(&self) -> bool {
        self.status.was_run()
    }

    /// Returns true if any test unit in this result failed.
    pub fn has_failures(&self) -> bool {
        self.num_failures > 0
    }

    /// Serializes this result, including its children, to JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
