// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Error flag shared between the engine and the running test task.

use core::sync::atomic::{AtomicBool, Ordering};

/// Marks the currently running test as failed.
///
/// The running test task writes the flag, the engine reads and clears it
/// after the task's completion message arrived. Only one test task is alive
/// at a time, so there is never more than one writer.
#[derive(Debug)]
pub struct ErrorFlag(AtomicBool);

impl ErrorFlag {
    /// Create a cleared flag.
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Set the flag to `state`.
    pub fn set(&self, state: bool) {
        self.0.store(state, Ordering::Release);
    }

    /// Returns true if the flag is set.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Clear the flag.
    pub fn clear(&self) {
        self.set(false);
    }

    /// Clear the flag, returning whether it was set.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

impl Default for ErrorFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// The error flag test tasks on the target write to.
pub static TEST_ERROR: ErrorFlag = ErrorFlag::new();

/// Mark the running test as failed (`true`) or not failed (`false`).
///
/// Call from within a test task, before signalling completion.
pub fn set_test_error(error_state: bool) {
    TEST_ERROR.set(error_state);
}
