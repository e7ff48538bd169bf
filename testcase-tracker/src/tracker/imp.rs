// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    config::TrackerConfig,
    description::{ParentSuite, TestDescription, TestId},
    helpers::lock,
    node::{PropertyExporter, TestNode},
    state::TestCaseState,
};
use debug_ignore::DebugIgnore;
use indexmap::IndexMap;
use std::{
    collections::{BTreeMap, HashMap},
    sync::{Arc, Mutex},
};
use testcase_model::{TestFailure, TestInterval, TestResult, TestResultStatus};
use tracing::{debug, trace, warn};

/// Tracks the lifecycle of a single test case and the dynamic tests it spawns.
///
/// A tracker is shared between the threads of a test framework. Lifecycle notifications may race
/// with each other: each one is an atomic compare-and-set on the current state, and at most one
/// of several racing notifications from the same state wins. The losers are ignored.
///
/// Failures and properties are collected independently of the lifecycle and are never removed.
/// Call [`build_result`](Self::build_result) to render what has been recorded so far.
#[derive(Debug)]
pub struct TestCaseTracker {
    pub(super) description: DebugIgnore<Arc<dyn TestDescription>>,
    pub(super) parent: DebugIgnore<Arc<dyn ParentSuite>>,
    config: TrackerConfig,
    // The state and the interval are always updated together.
    pub(super) lifecycle: Mutex<Lifecycle>,
    pub(super) properties: Mutex<BTreeMap<String, String>>,
    repeated_property_counts: Mutex<HashMap<String, usize>>,
    pub(super) global_failures: Mutex<Vec<TestFailure>>,
    pub(super) dynamic_failures: Mutex<IndexMap<TestId, Vec<TestFailure>>>,
}

#[derive(Clone, Copy, Debug)]
pub(super) struct Lifecycle {
    pub(super) state: TestCaseState,
    pub(super) interval: Option<TestInterval>,
}

impl TestCaseTracker {
    /// Creates a tracker for `description`, contained in `parent`, with the default config.
    pub fn new(description: Arc<dyn TestDescription>, parent: Arc<dyn ParentSuite>) -> Self {
        Self::with_config(description, parent, &TrackerConfig::default())
    }

    /// Creates a tracker for `description`, contained in `parent`.
    pub fn with_config(
        description: Arc<dyn TestDescription>,
        parent: Arc<dyn ParentSuite>,
        config: &TrackerConfig,
    ) -> Self {
        Self {
            description: DebugIgnore(description),
            parent: DebugIgnore(parent),
            config: *config,
            lifecycle: Mutex::new(Lifecycle {
                state: TestCaseState::Initial,
                interval: None,
            }),
            properties: Mutex::new(BTreeMap::new()),
            repeated_property_counts: Mutex::new(HashMap::new()),
            global_failures: Mutex::new(Vec::new()),
            dynamic_failures: Mutex::new(IndexMap::new()),
        }
    }

    /// The description of the tracked test.
    pub fn description(&self) -> &dyn TestDescription {
        &**self.description
    }

    /// The test started. Returns true if this call moved the test out of its initial state.
    pub fn started(&self, now: u64) -> bool {
        self.compare_and_set_state(TestCaseState::Initial, TestCaseState::Started, now)
    }

    /// The test finished normally. Returns true if the test was running.
    pub fn finished(&self, now: u64) -> bool {
        self.compare_and_set_state(TestCaseState::Started, TestCaseState::Finished, now)
    }

    /// The test was skipped after starting. Returns true if the test was running.
    pub fn skipped(&self, now: u64) -> bool {
        self.compare_and_set_state(TestCaseState::Started, TestCaseState::Skipped, now)
    }

    /// The test was suppressed. Returns true if the test had not started yet.
    pub fn suppressed(&self, now: u64) -> bool {
        self.compare_and_set_state(TestCaseState::Initial, TestCaseState::Suppressed, now)
    }

    /// The test was interrupted.
    ///
    /// A running test becomes interrupted, and a test that has not started yet becomes
    /// cancelled. Returns false if the test had already ended.
    pub fn interrupted(&self, now: u64) -> bool {
        if self.compare_and_set_state(TestCaseState::Started, TestCaseState::Interrupted, now) {
            return true;
        }
        self.compare_and_set_state(TestCaseState::Initial, TestCaseState::Cancelled, now)
    }

    /// Records a failure of the test as a whole.
    ///
    /// A test that fails before it starts is considered finished. The failure is recorded
    /// whatever the current state is. Returns true if this call finished the test.
    pub fn failure(&self, failure: TestFailure, now: u64) -> bool {
        let transitioned =
            self.compare_and_set_state(TestCaseState::Initial, TestCaseState::Finished, now);
        lock(&self.global_failures).push(failure);
        transitioned
    }

    /// Records a failure of the dynamic test `test`.
    ///
    /// As with [`failure`](Self::failure), a test that fails before it starts is considered
    /// finished, and the failure is recorded whatever the current state is.
    pub fn dynamic_failure(&self, test: &TestId, failure: TestFailure, now: u64) -> bool {
        let transitioned =
            self.compare_and_set_state(TestCaseState::Initial, TestCaseState::Finished, now);
        lock(&self.dynamic_failures)
            .entry(test.clone())
            .or_default()
            .push(failure);
        transitioned
    }

    /// The current lifecycle state.
    pub fn state(&self) -> TestCaseState {
        lock(&self.lifecycle).state
    }

    /// The status a result would report for the current state.
    pub fn status(&self) -> TestResultStatus {
        self.state().result_status()
    }

    /// The interval during which the test was active, or `None` if no transition has happened.
    pub fn runtime(&self) -> Option<TestInterval> {
        lock(&self.lifecycle).interval
    }

    fn next_repetition(&self, name: &str) -> usize {
        let mut counts = lock(&self.repeated_property_counts);
        let count = counts.entry(name.to_owned()).or_insert(0);
        let previous = *count;
        *count += 1;
        previous
    }

    fn compare_and_set_state(&self, from: TestCaseState, to: TestCaseState, now: u64) -> bool {
        debug_assert_ne!(from, to, "a transition must change the state");

        let mut lifecycle = lock(&self.lifecycle);
        if lifecycle.state != from {
            trace!(
                test = %self.description.id(),
                current = %lifecycle.state,
                %from,
                %to,
                "ignoring transition from a state the test is not in"
            );
            return false;
        }

        lifecycle.state = to;
        lifecycle.interval = Some(match lifecycle.interval {
            None => TestInterval::instant(now),
            Some(interval) => self.extend_interval(interval, now),
        });
        debug!(test = %self.description.id(), %from, %to, now, "test transitioned");
        true
    }

    fn extend_interval(&self, interval: TestInterval, now: u64) -> TestInterval {
        if now < interval.end_millis() {
            warn!(
                test = %self.description.id(),
                end = interval.end_millis(),
                now,
                "clock went backwards, keeping the current end of the interval"
            );
            return interval;
        }
        // now >= end >= start, so this is always valid.
        interval.with_end_millis(now).unwrap_or(interval)
    }
}

impl PropertyExporter for TestCaseTracker {
    fn export_property(&self, name: &str, value: &str) {
        debug!(test = %self.description.id(), name, "exported property");
        lock(&self.properties).insert(name.to_owned(), value.to_owned());
    }

    fn export_repeated_property(&self, name: &str, value: &str) -> String {
        let index = self.next_repetition(name) + self.config.repeated_property_initial_index;
        let property_name = format!("{name}{index}");
        debug!(
            test = %self.description.id(),
            name = %property_name,
            "exported repeated property"
        );
        lock(&self.properties).insert(property_name.clone(), value.to_owned());
        property_name
    }
}

impl TestNode for TestCaseTracker {
    fn description(&self) -> &dyn TestDescription {
        TestCaseTracker::description(self)
    }

    fn is_test_case(&self) -> bool {
        true
    }

    fn test_interrupted(&self, now: u64) {
        self.interrupted(now);
    }

    fn test_skipped(&self, now: u64) {
        self.skipped(now);
    }

    fn test_suppressed(&self, now: u64) {
        self.suppressed(now);
    }

    fn test_failure(&self, failure: TestFailure, now: u64) {
        self.failure(failure, now);
    }

    fn dynamic_test_failure(&self, test: &TestId, failure: TestFailure, now: u64) {
        self.dynamic_failure(test, failure, now);
    }

    fn build_result(&self) -> TestResult {
        TestCaseTracker::build_result(self)
    }
}
