// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Descriptions of tests and the suites that contain them.
//!
//! A tracker only needs a handful of capabilities from a test description: a stable identity,
//! the method and class names, a display name and the list of dynamic tests discovered so far.
//! These are captured by [`TestDescription`]. The suite containing a test is only consulted for
//! its display name, through [`ParentSuite`].

use crate::helpers::lock;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::{fmt, sync::Mutex};

/// The stable identity of a test or dynamic test.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestId(SmolStr);

impl TestId {
    /// Creates a new identifier.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(SmolStr::new(id))
    }

    /// Returns the identifier as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TestId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A test discovered while its parent test was running.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DynamicTest {
    id: TestId,
    display_name: String,
}

impl DynamicTest {
    /// Creates a dynamic test whose identity is its display name.
    pub fn new(display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        Self {
            id: TestId::new(&display_name),
            display_name,
        }
    }

    /// Creates a dynamic test with an identity distinct from its display name.
    pub fn with_id(id: TestId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }

    /// The stable identity of this dynamic test.
    pub fn id(&self) -> &TestId {
        &self.id
    }

    /// The name shown for this dynamic test.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// The capabilities a tracker needs from the description of the test it tracks.
pub trait TestDescription: Send + Sync {
    /// The stable identity of the test.
    fn id(&self) -> &TestId;

    /// The method name, or `None` for descriptions that are shaped like suites even though they
    /// describe a single test.
    fn method_name(&self) -> Option<&str>;

    /// The name of the class, or other grouping, that owns the test.
    fn class_name(&self) -> &str;

    /// The name shown for the test.
    fn display_name(&self) -> &str;

    /// The dynamic tests discovered so far, in discovery order.
    fn children(&self) -> Vec<DynamicTest>;

    /// Returns true if this description represents a single test unit.
    ///
    /// A description with dynamic children represents one unit per child instead.
    fn is_test(&self) -> bool {
        self.children().is_empty()
    }
}

/// The suite that contains a tracked test.
pub trait ParentSuite: Send + Sync {
    /// The name shown for the suite.
    fn display_name(&self) -> &str;
}

impl<T: TestDescription + ?Sized> ParentSuite for T {
    fn display_name(&self) -> &str {
        TestDescription::display_name(self)
    }
}

/// A description of a test or suite that can gain dynamic children while it is shared.
#[derive(Debug)]
pub struct Description {
    id: TestId,
    display_name: String,
    class_name: String,
    method_name: Option<String>,
    children: Mutex<Vec<DynamicTest>>,
}

impl Description {
    /// Creates a description for the test `method` in `class`.
    ///
    /// The display name is `method(class)`.
    pub fn test(class: impl Into<String>, method: impl Into<String>) -> Self {
        let class = class.into();
        let method = method.into();
        let display_name = format!("{method}({class})");
        Self {
            id: TestId::new(&display_name),
            display_name,
            class_name: class,
            method_name: Some(method),
            children: Mutex::new(Vec::new()),
        }
    }

    /// Creates a suite-shaped description with no method name.
    ///
    /// The class name and the display name are both `name`.
    pub fn suite(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: TestId::new(&name),
            display_name: name.clone(),
            class_name: name,
            method_name: None,
            children: Mutex::new(Vec::new()),
        }
    }

    /// Records a dynamic test discovered while this test is running.
    pub fn add_dynamic_child(&self, child: DynamicTest) {
        lock(&self.children).push(child);
    }
}

impl TestDescription for Description {
    fn id(&self) -> &TestId {
        &self.id
    }

    fn method_name(&self) -> Option<&str> {
        self.method_name.as_deref()
    }

    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn children(&self) -> Vec<DynamicTest> {
        lock(&self.children).clone()
    }
}
