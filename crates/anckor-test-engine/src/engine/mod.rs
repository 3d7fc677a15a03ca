// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Test orchestration.
//!
//! The [`TestEngine`] runs every registered test exactly once, in order:
//!
//! 1. Clear the error flag
//! 2. Spawn the test's task on its private stack
//! 3. Block on the completion channel for exactly one message
//! 4. Latch the error flag if the message is not the sentinel
//! 5. Destroy the task
//! 6. Classify and report the test
//!
//! The next test is not spawned before the previous task is destroyed, so at
//! most one test task is ever alive. A test that never signals blocks the
//! engine forever; there is no timeout.

mod flag;
mod outcome;


pub use flag::{ErrorFlag, TEST_ERROR, set_test_error};
pub use outcome::{FailureCause, Outcome};

use crate::config::EngineConfig;
use crate::console::Console;
use crate::error::EngineError;
use crate::kernel::Kernel;
use crate::registry::{TestDescriptor, TestRegistry};
use crate::report::{Reporter, Summary};
use anckor_abi::ChannelHandle;
use tracing::{debug, error, info, warn};

/// Runs registered tests as kernel tasks and reports their results.
pub struct TestEngine<'f, K: Kernel, C: Console> {
    kernel: K,
    console: C,
    config: EngineConfig,
    error_flag: &'f ErrorFlag,
    summary: Summary,
}

impl<K: Kernel, C: Console> TestEngine<'static, K, C> {
    /// Create an engine with the default configuration.
    ///
    /// Tests report failures through the global [`set_test_error`].
    #[must_use]
    pub fn new(kernel: K, console: C) -> Self {
        Self::with_config(kernel, console, EngineConfig::DEFAULT)
    }

    /// Create an engine with the given configuration.
    ///
    /// Tests report failures through the global [`set_test_error`].
    #[must_use]
    pub fn with_config(kernel: K, console: C, config: EngineConfig) -> Self {
        TestEngine::with_error_flag(kernel, console, config, &TEST_ERROR)
    }
}

impl<'f, K: Kernel, C: Console> TestEngine<'f, K, C> {
    /// Create an engine that reads test failures from `error_flag`.
    #[must_use]
    pub const fn with_error_flag(
        kernel: K,
        console: C,
        config: EngineConfig,
        error_flag: &'f ErrorFlag,
    ) -> Self {
        Self {
            kernel,
            console,
            config,
            error_flag,
            summary: Summary::new(),
        }
    }

    /// Run every test in `registry`, in order, and print the results.
    ///
    /// Returns the counters of this run. A failing test is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the completion channel cannot be created or a
    /// kernel task primitive fails. The run stops at that point.
    pub fn run(&mut self, registry: TestRegistry<'_>) -> Result<Summary, EngineError> {
        self.summary = Summary::new();
        Reporter::new(&mut self.console).banner();
        info!(tests = registry.len(), "starting test run");

        let channel = self
            .kernel
            .create_channel(self.config.channel_name)
            .map_err(|source| {
                error!(channel = self.config.channel_name, %source, "cannot create test channel");
                EngineError::ChannelCreate(source)
            })?;

        for test in registry {
            let outcome = self.run_test(channel, test)?;
            self.summary.record(outcome);
            Reporter::new(&mut self.console).outcome(test.name(), outcome);
        }

        Reporter::new(&mut self.console).summary(&self.summary);
        info!(
            passed = self.summary.passed,
            failed = self.summary.failed,
            "test run finished"
        );
        Ok(self.summary)
    }

    /// Run a single test to completion and tear its task down.
    fn run_test(
        &mut self,
        channel: ChannelHandle,
        test: &TestDescriptor,
    ) -> Result<Outcome, EngineError> {
        let name = test.name();
        if self.config.reset_error_per_test {
            self.error_flag.clear();
        }

        debug!(test = name, priority = test.priority().as_u8(), "spawning test task");
        self.kernel
            .create_task(&test.task_spec())
            .map_err(|source| {
                error!(test = name, %source, "cannot create test task");
                EngineError::TaskCreate { test: name, source }
            })?;

        let message = match self.kernel.receive(channel) {
            Ok(message) => message,
            Err(source) => {
                error!(test = name, %source, "cannot receive test completion");
                // The task is still alive; do not leave it behind
                if let Err(cleanup) = self.kernel.destroy_task(test.handle()) {
                    error!(test = name, source = %cleanup, "cannot destroy test task");
                }
                return Err(EngineError::Receive { test: name, source });
            }
        };
        debug!(test = name, payload = message.payload, len = message.len, "test signalled");

        if !message.is_test_end(self.config.sentinel) {
            warn!(
                test = name,
                payload = message.payload,
                len = message.len,
                "unexpected completion message"
            );
            self.error_flag.set(true);
        }

        self.kernel.destroy_task(test.handle()).map_err(|source| {
            error!(test = name, %source, "cannot destroy test task");
            EngineError::TaskDestroy { test: name, source }
        })?;

        let flagged = if self.config.reset_error_per_test {
            self.error_flag.take()
        } else {
            self.error_flag.is_set()
        };
        Ok(Outcome::classify(message, self.config.sentinel, flagged))
    }

    /// Counters of the current (or last) run.
    #[must_use]
    pub const fn summary(&self) -> Summary {
        self.summary
    }

    /// The engine's configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The kernel the engine runs on.
    #[must_use]
    pub const fn kernel(&self) -> &K {
        &self.kernel
    }

    /// The console the engine reports to.
    #[must_use]
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Give back the kernel and console.
    #[must_use]
    pub fn into_parts(self) -> (K, C) {
        (self.kernel, self.console)
    }
}
