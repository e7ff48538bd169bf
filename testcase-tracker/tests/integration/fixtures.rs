// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::{Arc, Once};
use testcase_tracker::{
    config::TrackerConfig,
    description::{Description, DynamicTest},
    tracker::TestCaseTracker,
};

pub(crate) static CLASS_NAME: &str = "com.example.CalculatorTest";
pub(crate) static SUITE_NAME: &str = "CalculatorSuite";

/// Installs a tracing subscriber that writes to the test harness's captured output.
pub(crate) fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .init();
    });
}

pub(crate) fn parent() -> Arc<Description> {
    Arc::new(Description::suite(SUITE_NAME))
}

/// A tracker for a plain test, along with its description.
pub(crate) fn leaf_tracker(method: &str) -> (Arc<Description>, Arc<TestCaseTracker>) {
    let description = Arc::new(Description::test(CLASS_NAME, method));
    let tracker = Arc::new(TestCaseTracker::new(description.clone(), parent()));
    (description, tracker)
}

/// A tracker for a test that has already discovered `children` dynamic tests.
pub(crate) fn parameterized_tracker(
    method: &str,
    children: usize,
    config: &TrackerConfig,
) -> (Arc<Description>, Arc<TestCaseTracker>) {
    let description = Arc::new(Description::test(CLASS_NAME, method));
    for index in 0..children {
        description.add_dynamic_child(DynamicTest::new(format!("{method}[{index}]")));
    }
    let tracker = Arc::new(TestCaseTracker::with_config(
        description.clone(),
        parent(),
        config,
    ));
    (description, tracker)
}
