// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Data model for the results of a single tracked test case.
//!
//! The types in this crate are plain values: a [`TestInterval`] recording when a test ran, a
//! [`TestResultStatus`] describing how it ended, [`TestFailure`]s captured along the way, and the
//! immutable [`TestResult`] tree rendered from them. Producing these values is the job of
//! `testcase-tracker`.

mod errors;
mod failure;
mod interval;
mod result;
mod status;

pub use errors::*;
pub use failure::*;
pub use interval::*;
pub use result::*;
pub use status::*;
