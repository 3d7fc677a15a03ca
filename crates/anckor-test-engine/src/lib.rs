// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! # Anckor Test Engine
//!
//! Runs a statically registered set of tests, each as its own kernel task,
//! and collects pass/fail outcomes over a rendezvous channel.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   spawn    ┌──────────────┐
//! │  TestEngine  │ ─────────▶ │  test task   │
//! │ (one task)   │ ◀───────── │ (one alive)  │
//! └──────────────┘  TEST_END  └──────────────┘
//!        │            word
//!        ▼
//! ┌──────────────┐
//! │   Reporter   │ ──▶ console
//! └──────────────┘
//! ```
//!
//! The engine talks to the kernel only through the [`Kernel`] trait and to
//! the console only through the [`Console`] trait, so the whole
//! orchestration loop runs on the development host against mocks.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` by default on the target. The `std` feature
//! (enabled by default, and always during testing) provides the mock
//! kernel, console and register implementations.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod kernel;
pub mod mmio;
pub mod registry;
pub mod report;

// Re-export commonly used types at crate root
pub use anckor_abi::{ChannelHandle, Message, Paddr, Priority, TaskHandle, TEST_END_WORD};
pub use config::EngineConfig;
pub use console::{Console, ConsoleExt};
pub use engine::{ErrorFlag, Outcome, TEST_ERROR, TestEngine, set_test_error};
pub use error::EngineError;
pub use kernel::{Kernel, KernelError, TaskEntry, TaskSpec, signal_test_end};
pub use mmio::{ByteOffset, RegisterSpace};
pub use registry::{TaskStack, TestDescriptor, TestRegistry};
pub use report::{Reporter, Summary, Verdict};

/// Crate version.
pub const VERSION: &str = match option_env!("ANCKOR_VERSION") {
    Some(v) => v,
    None => "unknown",
};
