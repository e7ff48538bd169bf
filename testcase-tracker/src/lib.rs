// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Lifecycle tracking for individual test cases.
//!
//! A [`TestCaseTracker`](tracker::TestCaseTracker) is created for each test case when a suite is
//! assembled. While the suite runs, the test framework notifies it of lifecycle events (start,
//! finish, skip, interrupt and so on), failures, and exported properties, possibly from several
//! threads at once. At any point, the tracker can render an immutable
//! [`TestResult`](testcase_model::TestResult) describing the test and any dynamic tests it
//! spawned.
//!
//! The data model lives in the `testcase-model` crate and is re-exported as [`model`].

pub mod config;
pub mod description;
pub mod errors;
mod helpers;
pub mod junit;
pub mod node;
pub mod state;
pub mod tracker;

pub use testcase_model as model;
