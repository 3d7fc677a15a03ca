// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Core type definitions for kernel handles, priorities, status codes and addresses.
//!
//! These newtypes prevent accidentally mixing a channel handle with a task
//! handle, or a raw status code with a priority, at compile time.

mod addr;
mod id;
mod status;

#[cfg(test)]
mod status_test;

pub use addr::Paddr;
pub use id::{ChannelHandle, Priority, TaskHandle};
pub use status::{K_ERROR, K_OK, KernelStatus};
