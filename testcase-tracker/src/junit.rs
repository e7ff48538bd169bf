// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion of rendered results into JUnit test cases and suites.
//!
//! This only builds the in-memory JUnit model. Serializing it is left to the caller, through
//! [`quick_junit::Report`].

use quick_junit::{NonSuccessKind, TestCase, TestCaseStatus, TestSuite};
use testcase_model::{TestFailure, TestResult, TestResultStatus};

static INTERRUPTED_TYPE: &str = "interrupted";
static PARENT_FAILED: &str = "(the parent test failed)";

/// Converts a result into a JUnit test case.
///
/// Dynamic children of `result` are not included; see [`to_junit_test_suite`].
pub fn to_junit_test_case(result: &TestResult) -> TestCase {
    let failures = result.failures();
    let status = match result.status() {
        TestResultStatus::Completed if result.has_failures() => {
            let mut status = TestCaseStatus::non_success(NonSuccessKind::Failure);
            if failures.is_empty() {
                // A dynamic test without failures of its own fails because its parent did.
                status.set_message(PARENT_FAILED);
            } else {
                set_failure_props(&mut status, failures);
            }
            status
        }
        TestResultStatus::Completed => TestCaseStatus::success(),
        TestResultStatus::Interrupted => {
            let mut status = TestCaseStatus::non_success(NonSuccessKind::Error);
            set_failure_props(&mut status, failures);
            status.set_type(INTERRUPTED_TYPE);
            status
        }
        TestResultStatus::Skipped
        | TestResultStatus::Suppressed
        | TestResultStatus::Cancelled => {
            let mut status = TestCaseStatus::skipped();
            status.set_message(result.status().to_string());
            if let Some(description) = joined_descriptions(failures) {
                status.set_description(description);
            }
            status
        }
    };

    let mut testcase = TestCase::new(result.name(), status);
    testcase.set_classname(result.class_name());
    if let Some(interval) = result.run_time_interval() {
        testcase.set_time(interval.run_time());
        if let Some(start_time) = interval.start_time() {
            testcase.set_timestamp(start_time);
        }
    }
    testcase
}

/// Converts a list of results into a JUnit test suite named `name`.
///
/// A result with dynamic children contributes one test case per child, and a result without
/// children contributes a single test case. Properties of every result become properties of the
/// suite.
pub fn to_junit_test_suite<'a>(
    name: &str,
    results: impl IntoIterator<Item = &'a TestResult>,
) -> TestSuite {
    let mut suite = TestSuite::new(name);
    for result in results {
        if result.child_results().is_empty() {
            suite.add_test_case(to_junit_test_case(result));
        } else {
            suite.add_test_cases(result.child_results().iter().map(to_junit_test_case));
        }
        suite.add_properties(
            result
                .properties()
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        );
    }
    suite
}

fn set_failure_props(status: &mut TestCaseStatus, failures: &[TestFailure]) {
    let Some(first) = failures.first() else {
        return;
    };

    if let Some(message) = &first.message {
        status.set_message(message.as_str());
    }
    if let Some(kind) = &first.kind {
        status.set_type(kind.as_str());
    }
    if let Some(description) = joined_descriptions(failures) {
        status.set_description(description);
    }
}

fn joined_descriptions(failures: &[TestFailure]) -> Option<String> {
    let description = failures
        .iter()
        .filter_map(|failure| failure.description.as_deref().or(failure.message.as_deref()))
        .collect::<Vec<_>>()
        .join("\n\n");
    (!description.is_empty()).then_some(description)
}
