// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Console abstraction for engine output.
//!
//! Provides a trait-based interface for the byte-oriented console the engine
//! reports to, allowing both the target's output device and a mock
//! implementation for testing.

use core::fmt;

#[cfg(test)]
mod console_test;

#[cfg(any(test, feature = "std"))]
mod mock;

#[cfg(any(test, feature = "std"))]
pub use mock::MockConsole;

/// Line terminator used for every console line.
pub const LINE_END: &str = "\r\n";

/// Console interface for byte-level output.
pub trait Console {
    /// Write a single byte.
    fn write_byte(&mut self, byte: u8);
}

impl<C: Console + ?Sized> Console for &mut C {
    fn write_byte(&mut self, byte: u8) {
        (**self).write_byte(byte);
    }
}

/// Extension trait providing higher-level string operations.
pub trait ConsoleExt: Console {
    /// Write a string.
    fn write_str(&mut self, s: &str) {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
    }

    /// Write a string followed by [`LINE_END`].
    fn write_line(&mut self, s: &str) {
        self.write_str(s);
        self.write_str(LINE_END);
    }

    /// Write formatted text followed by [`LINE_END`].
    fn write_fmt_line(&mut self, args: fmt::Arguments<'_>) {
        let mut writer = ConsoleWriter::new(self);
        // ConsoleWriter never reports an error
        let _ = fmt::write(&mut writer, args);
        self.write_str(LINE_END);
    }
}

// Blanket implementation for all Console types
impl<T: Console + ?Sized> ConsoleExt for T {}

/// Adapter implementing [`fmt::Write`] on top of a [`Console`].
pub struct ConsoleWriter<'a, C: Console + ?Sized> {
    console: &'a mut C,
}

impl<'a, C: Console + ?Sized> ConsoleWriter<'a, C> {
    /// Wrap a console.
    pub const fn new(console: &'a mut C) -> Self {
        Self { console }
    }
}

impl<C: Console + ?Sized> fmt::Write for ConsoleWriter<'_, C> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for byte in s.bytes() {
            self.console.write_byte(byte);
        }
        Ok(())
    }
}
