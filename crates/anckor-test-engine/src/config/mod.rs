// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Engine configuration.
//!
//! The defaults match the shared contract in `anckor-abi`: test tasks look up
//! [`TEST_CHANNEL_NAME`] and send [`TEST_END_WORD`]. Only change them
//! together with the tests that rely on them.

use crate::kernel::{StackRegion, TaskEntry, TaskSpec};
use anckor_abi::layout::{ENGINE_PRIORITY, ENGINE_TASK_NAME};
use anckor_abi::{Priority, TEST_CHANNEL_NAME, TEST_END_WORD};


/// Configuration of a [`TestEngine`](crate::TestEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Name of the completion channel the engine creates.
    pub channel_name: &'static str,
    /// Word a test sends on normal completion.
    pub sentinel: u64,
    /// Clear the error flag before each test starts.
    ///
    /// When disabled, a flag set by one test stays set for every following
    /// test until some test clears it with `set_test_error(false)`.
    pub reset_error_per_test: bool,
    /// Task name the engine itself runs under.
    pub engine_name: &'static str,
    /// Scheduling priority of the engine task.
    pub engine_priority: Priority,
}

impl EngineConfig {
    /// The default configuration.
    pub const DEFAULT: Self = Self {
        channel_name: TEST_CHANNEL_NAME,
        sentinel: TEST_END_WORD,
        reset_error_per_test: true,
        engine_name: ENGINE_TASK_NAME,
        engine_priority: ENGINE_PRIORITY,
    };

    /// Create the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Use a different completion channel name.
    #[must_use]
    pub const fn with_channel_name(mut self, name: &'static str) -> Self {
        self.channel_name = name;
        self
    }

    /// Use a different completion sentinel.
    #[must_use]
    pub const fn with_sentinel(mut self, sentinel: u64) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Enable or disable clearing the error flag before each test.
    #[must_use]
    pub const fn with_error_reset(mut self, reset: bool) -> Self {
        self.reset_error_per_test = reset;
        self
    }

    /// Register the engine task under a different name and priority.
    #[must_use]
    pub const fn with_engine_task(mut self, name: &'static str, priority: Priority) -> Self {
        self.engine_name = name;
        self.engine_priority = priority;
        self
    }

    /// Task creation parameters for the engine task itself.
    ///
    /// The kernel port uses this to start the engine at boot.
    #[must_use]
    pub const fn engine_task(&self, entry: TaskEntry, stack: StackRegion) -> TaskSpec<'static> {
        TaskSpec {
            name: self.engine_name,
            entry,
            stack,
            priority: self.engine_priority,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
