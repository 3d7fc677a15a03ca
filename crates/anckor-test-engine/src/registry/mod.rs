// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Test descriptor registry.
//!
//! Tests are registered at build time as `static` descriptors, each owning a
//! private [`TaskStack`]. A [`TestRegistry`] is an ordered slice of
//! references to them; the engine walks it exactly once, front to back.
//!
//! ```
//! use anckor_test_engine::{declare_test, TestDescriptor, TestRegistry};
//!
//! fn timer_ticks() {}
//! fn uart_loopback() {}
//!
//! declare_test!(static TIMER: "timer_ticks", timer_ticks, 3);
//! declare_test!(static UART: "uart_loopback", uart_loopback, 3);
//!
//! static TESTS: [&TestDescriptor; 2] = [&TIMER, &UART];
//!
//! let registry = TestRegistry::new(&TESTS);
//! assert_eq!(registry.len(), 2);
//! ```

use crate::kernel::{StackRegion, TaskEntry, TaskSpec};
use anckor_abi::layout::{TASK_STACK_SIZE, TASK_STACK_WORDS};
use anckor_abi::{Paddr, Priority, TaskHandle};
use core::cell::UnsafeCell;
use core::fmt;


/// Private execution stack of one test task.
///
/// The engine never touches the memory itself; it only hands the region to
/// the kernel. The base address doubles as the task's identity.
#[repr(C, align(16))]
pub struct TaskStack {
    words: UnsafeCell<[u64; TASK_STACK_WORDS]>,
}

// SAFETY: The engine only reads the region's address. The memory is used
// exclusively by the one task the kernel runs on it.
unsafe impl Sync for TaskStack {}

impl TaskStack {
    /// Create a zeroed stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: UnsafeCell::new([0; TASK_STACK_WORDS]),
        }
    }

    /// The memory region of this stack.
    #[must_use]
    pub fn region(&self) -> StackRegion {
        StackRegion {
            base: Paddr::new(self.words.get().addr() as u64),
            len: TASK_STACK_SIZE,
        }
    }

    /// Identity handle of the task running on this stack.
    #[must_use]
    pub fn handle(&self) -> TaskHandle {
        self.region().handle()
    }
}

impl Default for TaskStack {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TaskStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TaskStack({})", self.region().base)
    }
}

/// One registered test case.
#[derive(Debug, Clone, Copy)]
pub struct TestDescriptor {
    name: &'static str,
    entry: TaskEntry,
    stack: &'static TaskStack,
    priority: Priority,
}

impl TestDescriptor {
    /// Describe a test.
    ///
    /// `stack` must not be shared with any other descriptor; use
    /// [`declare_test!`](crate::declare_test) to get a private one.
    #[must_use]
    pub const fn new(
        name: &'static str,
        entry: TaskEntry,
        stack: &'static TaskStack,
        priority: Priority,
    ) -> Self {
        Self {
            name,
            entry,
            stack,
            priority,
        }
    }

    /// Name used for reporting.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Function the test task executes.
    #[inline]
    #[must_use]
    pub const fn entry(&self) -> TaskEntry {
        self.entry
    }

    /// Private stack of the test task.
    #[inline]
    #[must_use]
    pub const fn stack(&self) -> &'static TaskStack {
        self.stack
    }

    /// Scheduling priority of the test task.
    #[inline]
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Identity handle used to tear the test task down.
    #[must_use]
    pub fn handle(&self) -> TaskHandle {
        self.stack.handle()
    }

    /// Task creation parameters for this test.
    #[must_use]
    pub fn task_spec(&self) -> TaskSpec<'static> {
        TaskSpec {
            name: self.name,
            entry: self.entry,
            stack: self.stack.region(),
            priority: self.priority,
        }
    }
}

/// Iterator over a [`TestRegistry`], in registration order.
pub type Iter<'a> = core::iter::Copied<core::slice::Iter<'a, &'a TestDescriptor>>;

/// Ordered, immutable sequence of registered tests.
#[derive(Debug, Clone, Copy)]
pub struct TestRegistry<'a> {
    tests: &'a [&'a TestDescriptor],
}

impl<'a> TestRegistry<'a> {
    /// A registry over the given descriptors, in order.
    #[must_use]
    pub const fn new(tests: &'a [&'a TestDescriptor]) -> Self {
        Self { tests }
    }

    /// A registry without tests.
    #[must_use]
    pub const fn empty() -> Self {
        Self { tests: &[] }
    }

    /// Number of registered tests.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tests.len()
    }

    /// Returns true if no tests are registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// The test at `index`, in registration order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a TestDescriptor> {
        self.tests.get(index).copied()
    }

    /// Iterate over the tests in registration order.
    pub fn iter(&self) -> Iter<'a> {
        self.tests.iter().copied()
    }
}

impl<'a> IntoIterator for TestRegistry<'a> {
    type Item = &'a TestDescriptor;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.tests.iter().copied()
    }
}

/// Declare a `static` [`TestDescriptor`] with its own private stack.
///
/// ```
/// use anckor_test_engine::declare_test;
///
/// fn gpio_toggle() {}
///
/// declare_test!(pub static GPIO_TOGGLE: "gpio_toggle", gpio_toggle, 4);
///
/// assert_eq!(GPIO_TOGGLE.name(), "gpio_toggle");
/// assert_eq!(GPIO_TOGGLE.priority().as_u8(), 4);
/// ```
#[macro_export]
macro_rules! declare_test {
    ($(#[$meta:meta])* $vis:vis static $ident:ident : $name:expr, $entry:path, $priority:expr) => {
        $(#[$meta])*
        $vis static $ident: $crate::registry::TestDescriptor = {
            static STACK: $crate::registry::TaskStack = $crate::registry::TaskStack::new();
            $crate::registry::TestDescriptor::new(
                $name,
                $entry,
                &STACK,
                $crate::Priority::new($priority),
            )
        };
    };
}
