// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for the console abstraction.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

#[test]
fn test_write_str() {
    let mut console = MockConsole::new();
    console.write_str("ATE");
    assert_eq!(console.output(), b"ATE");
}

#[test]
fn test_write_line_uses_crlf() {
    let mut console = MockConsole::new();
    console.write_line("hello");
    assert_eq!(console.output(), b"hello\r\n");
}

#[test]
fn test_write_fmt_line() {
    let mut console = MockConsole::new();
    console.write_fmt_line(format_args!("{} - {}", "a", 42));
    assert_eq!(console.output_str(), "a - 42\r\n");
}

#[test]
fn test_lines_excludes_partial() {
    let mut console = MockConsole::new();
    console.write_line("one");
    console.write_line("two");
    console.write_str("partial");
    assert_eq!(console.lines(), ["one", "two"]);
}

#[test]
fn test_lines_empty() {
    let console = MockConsole::new();
    assert!(console.lines().is_empty());
}

#[test]
fn test_clear_output() {
    let mut console = MockConsole::new();
    console.write_line("x");
    console.clear_output();
    assert!(console.output().is_empty());
}

#[test]
fn test_console_through_mut_ref() {
    fn emit<C: Console>(mut console: C) {
        console.write_line("via ref");
    }

    let mut console = MockConsole::new();
    emit(&mut console);
    assert_eq!(console.lines(), ["via ref"]);
}

#[test]
fn test_console_writer() {
    use core::fmt::Write;

    let mut console = MockConsole::new();
    let mut writer = ConsoleWriter::new(&mut console);
    write!(writer, "{:#x}", 255).unwrap();
    assert_eq!(console.output_str(), "0xff");
}
