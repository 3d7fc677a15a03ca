// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Mock console for testing.
//!
//! This provides a console implementation backed by an in-memory buffer,
//! allowing unit tests to verify engine output without hardware.

use super::{Console, LINE_END};
use std::vec::Vec;

/// Mock console backed by an in-memory buffer.
#[derive(Debug)]
pub struct MockConsole {
    /// Output buffer (data that was written)
    output: Vec<u8>,
}

impl MockConsole {
    /// Create an empty mock console.
    #[must_use]
    pub const fn new() -> Self {
        Self { output: Vec::new() }
    }

    /// Get the output that has been written.
    #[must_use]
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Get the output as text.
    #[expect(
        clippy::expect_used,
        reason = "test mock panics intentionally on non-UTF-8 output"
    )]
    #[must_use]
    pub fn output_str(&self) -> &str {
        core::str::from_utf8(&self.output).expect("MockConsole: output is not UTF-8")
    }

    /// Get the complete output lines, without terminators.
    ///
    /// A trailing partial line (no terminator yet) is not included.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        let text = self.output_str();
        let mut lines: Vec<&str> = text.split(LINE_END).collect();
        // The segment after the last terminator is incomplete (or empty)
        lines.pop();
        lines
    }

    /// Clear the output buffer.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }
}

impl Default for MockConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for MockConsole {
    fn write_byte(&mut self, byte: u8) {
        self.output.push(byte);
    }
}
