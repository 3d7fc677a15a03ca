// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Shared contract between the Anckor test engine and the test tasks it runs.
//!
//! The test engine and every registered test task agree on:
//! - Handle types for channels and tasks, and task priorities
//! - The name of the shared completion channel
//! - The "test end" sentinel word and the completion message format
//! - Kernel status codes returned by the task/channel primitives
//! - Fixed sizes (machine word, task stack)
//!
//! # Design Principles
//!
//! - **No dependencies**: Pure data types, 100% host-testable
//! - **Stable layout**: Handles use `#[repr(transparent)]`
//! - **64-bit only**: One machine word is one `u64`
//!
//! # Modules
//!
//! - [`types`]: Handle and priority types, kernel status codes, addresses
//! - [`ipc`]: Completion channel name, sentinel word, [`Message`]
//! - [`layout`]: Word and stack sizes, engine task registration constants

#![cfg_attr(not(test), no_std)]

pub mod ipc;
pub mod layout;
pub mod types;

// Re-export commonly used types at crate root
pub use ipc::{Message, TEST_CHANNEL_NAME, TEST_END_WORD};
pub use layout::{DOUBLE_WORD_SIZE, TASK_STACK_SIZE};
pub use types::{ChannelHandle, KernelStatus, Paddr, Priority, TaskHandle};
