// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::imp::TestCaseTracker;
use crate::{
    description::{DynamicTest, TestDescription},
    helpers::lock,
};
use std::collections::BTreeMap;
use testcase_model::{TestFailure, TestInterval, TestResult, TestResultParts, TestResultStatus};
use tracing::trace;

impl TestCaseTracker {
    /// Renders a result from everything recorded so far.
    ///
    /// Results are not cached: each call reflects the tracker at the time of the call. Dynamic
    /// tests share the interval and status of this test, and fail if this test has any failure of
    /// its own or if a failure was recorded for them.
    pub fn build_result(&self) -> TestResult {
        let description = self.description();

        // Descriptions shaped like suites have no method name. Use the class name as the name of
        // the test, and the suite's name as its class.
        let (name, class_name) = match description.method_name() {
            Some(method_name) => (
                method_name.to_owned(),
                description.class_name().to_owned(),
            ),
            None => (
                description.class_name().to_owned(),
                self.parent.display_name().to_owned(),
            ),
        };

        let (status, interval) = {
            let lifecycle = lock(&self.lifecycle);
            (lifecycle.state.result_status(), lifecycle.interval)
        };
        let properties = lock(&self.properties).clone();
        let global_failures = lock(&self.global_failures).clone();
        let dynamic_failures = lock(&self.dynamic_failures).clone();

        let children = description.children();
        let display_name = TestDescription::display_name(description);
        let has_global_failures = !global_failures.is_empty();
        let num_tests = if description.is_test() {
            1
        } else {
            children.len()
        };
        let num_failures = if has_global_failures {
            num_tests
        } else {
            dynamic_failures.len()
        };

        let child_results = children
            .iter()
            .map(|child| {
                let failures = dynamic_failures
                    .get(child.id())
                    .cloned()
                    .unwrap_or_default();
                build_dynamic_result(
                    child,
                    display_name,
                    interval,
                    status,
                    has_global_failures,
                    failures,
                )
            })
            .collect();

        trace!(
            test = %description.id(),
            %status,
            num_tests,
            num_failures,
            "built test result"
        );

        TestResult::new(TestResultParts {
            name,
            class_name,
            properties,
            failures: global_failures,
            run_time_interval: interval,
            status,
            num_tests,
            num_failures,
            child_results,
        })
    }
}

fn build_dynamic_result(
    test: &DynamicTest,
    parent_display_name: &str,
    interval: Option<TestInterval>,
    status: TestResultStatus,
    parent_failed: bool,
    failures: Vec<TestFailure>,
) -> TestResult {
    let failed = parent_failed || !failures.is_empty();
    TestResult::new(TestResultParts {
        name: test.display_name().to_owned(),
        class_name: parent_display_name.to_owned(),
        properties: BTreeMap::new(),
        failures,
        run_time_interval: interval,
        status,
        num_tests: 1,
        num_failures: usize::from(failed),
        child_results: Vec::new(),
    })
}
