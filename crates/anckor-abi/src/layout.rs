// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Fixed sizes and registration constants.
//!
//! All values here are part of the contract between the engine, the kernel
//! port and the test tasks. Changing one means rebuilding all three.

use crate::types::Priority;

/// One kilobyte in bytes.
const KB: usize = 1024;

/// Size of one machine word in bytes.
///
/// Registers, channel payloads and stack slots are all this wide.
pub const DOUBLE_WORD_SIZE: usize = core::mem::size_of::<u64>();

/// Size of a test task's private stack in bytes.
pub const TASK_STACK_SIZE: usize = 4 * KB;

/// Number of machine words in a test task's stack.
pub const TASK_STACK_WORDS: usize = TASK_STACK_SIZE / DOUBLE_WORD_SIZE;

// =============================================================================
// Engine Task Registration
// =============================================================================

/// Task name the engine itself is registered under.
pub const ENGINE_TASK_NAME: &str = "test_engine";

/// Scheduling priority of the engine task.
pub const ENGINE_PRIORITY: Priority = Priority::new(2);

// Compile-time layout checks
const _: () = {
    assert!(DOUBLE_WORD_SIZE == 8);
    assert!(TASK_STACK_SIZE % DOUBLE_WORD_SIZE == 0);
    assert!(TASK_STACK_WORDS > 0);
};
