// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Handle types for kernel channels and tasks, and task priorities.

use core::fmt;

/// Handle to a kernel channel endpoint.
///
/// Returned by channel creation and by name lookup. Handles are opaque to
/// the engine; only the kernel port interprets the raw value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct ChannelHandle(u64);

impl ChannelHandle {
    /// Creates a channel handle from a raw kernel value.
    #[inline]
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw kernel value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ChannelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChannelHandle({})", self.0)
    }
}

impl fmt::Display for ChannelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chan:{}", self.0)
    }
}

/// Identity of a running task.
///
/// A task is identified by the base address of its private stack region.
/// The stack is exclusively owned by one descriptor, so the address is
/// unique for as long as the task lives and is what task teardown takes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct TaskHandle(u64);

impl TaskHandle {
    /// Creates a task handle from a stack base address.
    #[inline]
    #[must_use]
    pub const fn from_stack_base(base: u64) -> Self {
        Self(base)
    }

    /// Returns the stack base address this handle refers to.
    #[inline]
    #[must_use]
    pub const fn stack_base(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TaskHandle({:#x})", self.0)
    }
}

impl fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task@{:#x}", self.0)
    }
}

/// Scheduling priority passed to task creation.
///
/// The engine forwards the value unchanged; its ordering semantics belong
/// to the kernel's scheduler.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Priority(u8);

impl Priority {
    /// Creates a priority from a raw scheduler level.
    #[inline]
    #[must_use]
    pub const fn new(level: u8) -> Self {
        Self(level)
    }

    /// Returns the raw scheduler level.
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }
}

impl fmt::Debug for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Priority({})", self.0)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "prio:{}", self.0)
    }
}
