// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Kernel abstraction layer.
//!
//! The engine needs exactly four things from the kernel: create a named
//! channel, block on it, create a task and destroy it again. Test tasks
//! additionally look the channel up by name and send on it. This module
//! captures that contract in the [`Kernel`] trait so the engine runs on the
//! target kernel in production and against [`MockKernel`] on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │           TestEngine / test task helpers                │
//! └─────────────────────────────────────────────────────────┘
//!                           │
//!                           ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                   Kernel trait                          │
//! │   (channels: create/lookup/send/receive, tasks)         │
//! └─────────────────────────────────────────────────────────┘
//!            │                              │
//!            ▼                              ▼
//! ┌─────────────────────┐      ┌─────────────────────────────┐
//! │    `MockKernel`     │      │     target kernel port      │
//! │    (for testing)    │      │     (for production)        │
//! └─────────────────────┘      └─────────────────────────────┘
//! ```

#[cfg(any(test, feature = "std"))]
mod mock;

#[cfg(any(test, feature = "std"))]
pub use mock::{KernelEvent, MockKernel, TaskScript};

use anckor_abi::{
    ChannelHandle, KernelStatus, Message, Paddr, Priority, TEST_CHANNEL_NAME, TEST_END_WORD,
    TaskHandle,
};
use core::fmt;

/// Entry point of a kernel task.
pub type TaskEntry = fn();

/// A memory region used as a task's execution stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackRegion {
    /// Lowest address of the region.
    pub base: Paddr,
    /// Size of the region in bytes.
    pub len: usize,
}

impl StackRegion {
    /// Identity handle of the task running on this stack.
    #[inline]
    #[must_use]
    pub const fn handle(self) -> TaskHandle {
        TaskHandle::from_stack_base(self.base.as_u64())
    }

    /// One past the highest address of the region.
    #[inline]
    #[must_use]
    pub const fn top(self) -> Paddr {
        self.base.add(self.len as u64)
    }
}

/// Everything the kernel needs to create a task.
#[derive(Debug, Clone, Copy)]
pub struct TaskSpec<'a> {
    /// Task name, for the kernel's bookkeeping and diagnostics.
    pub name: &'a str,
    /// Function the task executes.
    pub entry: TaskEntry,
    /// Private stack region.
    pub stack: StackRegion,
    /// Scheduling priority.
    pub priority: Priority,
}

impl TaskSpec<'_> {
    /// Identity handle of the task this spec creates.
    #[inline]
    #[must_use]
    pub const fn handle(&self) -> TaskHandle {
        self.stack.handle()
    }
}

/// Errors reported by kernel primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// No free channel or task slot.
    ResourceExhausted,
    /// No channel with the given name or handle exists.
    NoSuchChannel,
    /// No live task with the given handle exists.
    NoSuchTask,
    /// A task is already running on the given stack.
    TaskExists,
    /// The kernel returned a raw error status.
    Status(i64),
}

impl KernelError {
    /// Convert a raw kernel status code into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::Status`] for every code other than `K_OK`.
    pub const fn check(code: i64) -> Result<(), Self> {
        match KernelStatus::from_raw(code) {
            KernelStatus::Ok => Ok(()),
            KernelStatus::Error(code) => Err(Self::Status(code)),
        }
    }
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceExhausted => write!(f, "kernel resources exhausted"),
            Self::NoSuchChannel => write!(f, "no such channel"),
            Self::NoSuchTask => write!(f, "no such task"),
            Self::TaskExists => write!(f, "task already exists on this stack"),
            Self::Status(code) => write!(f, "kernel error status {code}"),
        }
    }
}

/// Task and channel primitives provided by the kernel.
///
/// All methods are called from task context. [`Kernel::receive`] is the only
/// blocking call.
pub trait Kernel {
    /// Create a named channel endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if no channel can be allocated.
    fn create_channel(&mut self, name: &'static str) -> Result<ChannelHandle, KernelError>;

    /// Look up a channel by name.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::NoSuchChannel`] if no channel has this name.
    fn lookup_channel(&self, name: &str) -> Result<ChannelHandle, KernelError>;

    /// Send one word on a channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel does not exist.
    fn send(&mut self, channel: ChannelHandle, payload: u64) -> Result<(), KernelError>;

    /// Block until a message arrives on a channel.
    ///
    /// There is no timeout: the caller is suspended until a sender shows up.
    ///
    /// # Errors
    ///
    /// Returns an error if the channel does not exist.
    fn receive(&mut self, channel: ChannelHandle) -> Result<Message, KernelError>;

    /// Create and start a task.
    ///
    /// # Errors
    ///
    /// Returns an error if the task cannot be created.
    fn create_task(&mut self, task: &TaskSpec<'_>) -> Result<(), KernelError>;

    /// Destroy a task, releasing its scheduling slot and stack.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::NoSuchTask`] if no task runs on that stack.
    fn destroy_task(&mut self, task: TaskHandle) -> Result<(), KernelError>;
}

/// Send `payload` on the channel called `channel_name`.
///
/// # Errors
///
/// Returns an error if the channel does not exist or the send fails.
pub fn signal<K: Kernel + ?Sized>(
    kernel: &mut K,
    channel_name: &str,
    payload: u64,
) -> Result<(), KernelError> {
    let channel = kernel.lookup_channel(channel_name)?;
    kernel.send(channel, payload)
}

/// Signal normal completion of the running test.
///
/// Every test task calls this exactly once, as its last action. Call
/// [`crate::set_test_error`] before it to mark the test as failed.
///
/// # Errors
///
/// Returns an error if the engine's channel does not exist or the send fails.
pub fn signal_test_end<K: Kernel + ?Sized>(kernel: &mut K) -> Result<(), KernelError> {
    signal(kernel, TEST_CHANNEL_NAME, TEST_END_WORD)
}
