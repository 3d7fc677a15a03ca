// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Shared test infrastructure for integration tests.
//!
//! This module provides:
//! - [`run_registry`] - Run a registry against a mock kernel and capture everything
//! - [`RunRecord`] - What a run printed and what it left behind in the kernel
//!
//! # Design
//!
//! This module is **not** a test file, so it must comply with full clippy rules.
//! Test-specific allowances (like `unwrap_used`) are only permitted in `*_test.rs` files.

use anckor_test_engine::console::MockConsole;
use anckor_test_engine::kernel::{KernelEvent, MockKernel};
use anckor_test_engine::{
    EngineConfig, EngineError, ErrorFlag, Summary, TestDescriptor, TestEngine, TestRegistry,
};

/// Everything observable after one engine run.
#[derive(Debug)]
pub struct RunRecord {
    /// Result returned by the engine.
    pub result: Result<Summary, EngineError>,
    /// Console output split into lines.
    pub lines: Vec<String>,
    /// Kernel calls in order.
    pub events: Vec<KernelEvent>,
    /// Highest number of simultaneously live tasks.
    pub max_live: usize,
    /// Tasks still alive after the run.
    pub live_after: usize,
}

impl RunRecord {
    /// The summary of a successful run.
    ///
    /// # Panics
    ///
    /// Panics if the run returned an error.
    #[expect(clippy::panic, reason = "test helper")]
    #[must_use]
    pub fn summary(&self) -> Summary {
        match &self.result {
            Ok(summary) => *summary,
            Err(err) => panic!("engine run failed: {err}"),
        }
    }

    /// The last console line.
    #[must_use]
    pub fn last_line(&self) -> &str {
        self.lines.last().map_or("", String::as_str)
    }
}

/// Run `tests` on a fresh mock kernel prepared by `setup`.
///
/// Each call uses its own error flag, so runs are independent of each other
/// and of the global flag.
pub fn run_registry<S>(tests: &[&TestDescriptor], config: EngineConfig, setup: S) -> RunRecord
where
    S: for<'f> FnOnce(MockKernel<'f>) -> MockKernel<'f>,
{
    let flag = ErrorFlag::new();
    let kernel = setup(MockKernel::new(&flag));
    let mut engine = TestEngine::with_error_flag(kernel, MockConsole::new(), config, &flag);

    let result = engine.run(TestRegistry::new(tests));

    let (kernel, console) = engine.into_parts();
    RunRecord {
        result,
        lines: console.lines().into_iter().map(String::from).collect(),
        events: kernel.events().to_vec(),
        max_live: kernel.max_live_tasks(),
        live_after: kernel.live_tasks().len(),
    }
}

/// Run `tests` with the default configuration.
pub fn run_default<S>(tests: &[&TestDescriptor], setup: S) -> RunRecord
where
    S: for<'f> FnOnce(MockKernel<'f>) -> MockKernel<'f>,
{
    run_registry(tests, EngineConfig::DEFAULT, setup)
}
