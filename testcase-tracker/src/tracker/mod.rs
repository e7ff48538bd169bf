// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lifecycle tracking for individual test cases.
//!
//! [`TestCaseTracker`] is the state machine a test framework drives while a test runs. Rendering
//! its contents into a [`TestResult`](testcase_model::TestResult) lives in `result_builder`.

mod imp;
mod result_builder;

pub use imp::*;
