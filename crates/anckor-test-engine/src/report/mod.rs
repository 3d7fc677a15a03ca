// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Result counting and console reporting.
//!
//! ## Output Protocol
//!
//! Every line is terminated with `\r\n`:
//!
//! ```text
//! ATE - Anckor test engine
//! ATE - <name> - passed
//! ATE - <name> - failed
//! ATE - PASSED - <passed> passed - <failed> failed
//! ATE - FAILED - <passed> passed - <failed> failed
//! ```
//!
//! The last line is the overall verdict: `FAILED` if any test failed,
//! `PASSED` otherwise (including an empty run).

use crate::console::{Console, ConsoleExt};
use crate::engine::Outcome;
use core::fmt;


/// Prefix of every console line.
pub const PREFIX: &str = "ATE";

/// First line printed by a run.
pub const BANNER: &str = "ATE - Anckor test engine";

/// Overall result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No test failed.
    Passed,
    /// At least one test failed.
    Failed,
}

impl Verdict {
    /// Word used for this verdict in console output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Passed => "PASSED",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pass/fail counters of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of passed tests.
    pub passed: u64,
    /// Number of failed tests.
    pub failed: u64,
}

impl Summary {
    /// A summary with no tests.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            passed: 0,
            failed: 0,
        }
    }

    /// Count one test outcome.
    pub const fn record(&mut self, outcome: Outcome) {
        if outcome.is_passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Number of classified tests.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.passed + self.failed
    }

    /// Overall verdict, decided solely by the failure count.
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        if self.failed == 0 {
            Verdict::Passed
        } else {
            Verdict::Failed
        }
    }

    /// Process exit status for hosts that run the engine: `0` or `1`.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self.verdict() {
            Verdict::Passed => 0,
            Verdict::Failed => 1,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{PREFIX} - {} - {} passed - {} failed",
            self.verdict(),
            self.passed,
            self.failed
        )
    }
}

/// Writes the run's progress to a console.
pub struct Reporter<'c, C: Console + ?Sized> {
    console: &'c mut C,
}

impl<'c, C: Console + ?Sized> Reporter<'c, C> {
    /// Report to `console`.
    pub const fn new(console: &'c mut C) -> Self {
        Self { console }
    }

    /// Print the banner line.
    pub fn banner(&mut self) {
        self.console.write_line(BANNER);
    }

    /// Print the result line of one test.
    pub fn outcome(&mut self, name: &str, outcome: Outcome) {
        self.console
            .write_fmt_line(format_args!("{PREFIX} - {name} - {outcome}"));
    }

    /// Print the final summary line.
    pub fn summary(&mut self, summary: &Summary) {
        self.console.write_fmt_line(format_args!("{summary}"));
    }
}
