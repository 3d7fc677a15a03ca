// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Fatal engine errors.
//!
//! A failing test is not an error: it is counted and reported. These errors
//! cover kernel failures after which the run cannot continue.

use crate::kernel::KernelError;
use core::fmt;


/// Errors that abort a test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The completion channel could not be created. No test was run.
    ChannelCreate(KernelError),
    /// The task for a test could not be created.
    TaskCreate {
        /// Name of the test.
        test: &'static str,
        /// Kernel error.
        source: KernelError,
    },
    /// Receiving the completion message of a test failed.
    Receive {
        /// Name of the test.
        test: &'static str,
        /// Kernel error.
        source: KernelError,
    },
    /// The task of a finished test could not be destroyed.
    TaskDestroy {
        /// Name of the test.
        test: &'static str,
        /// Kernel error.
        source: KernelError,
    },
}

impl EngineError {
    /// The kernel error underlying this failure.
    #[must_use]
    pub const fn kernel_error(&self) -> KernelError {
        match self {
            Self::ChannelCreate(source)
            | Self::TaskCreate { source, .. }
            | Self::Receive { source, .. }
            | Self::TaskDestroy { source, .. } => *source,
        }
    }

    /// Name of the test that was running, if any.
    #[must_use]
    pub const fn test(&self) -> Option<&'static str> {
        match self {
            Self::ChannelCreate(_) => None,
            Self::TaskCreate { test, .. }
            | Self::Receive { test, .. }
            | Self::TaskDestroy { test, .. } => Some(*test),
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChannelCreate(source) => {
                write!(f, "failed to create test channel: {source}")
            }
            Self::TaskCreate { test, source } => {
                write!(f, "failed to create task for test {test}: {source}")
            }
            Self::Receive { test, source } => {
                write!(f, "failed to receive completion of test {test}: {source}")
            }
            Self::TaskDestroy { test, source } => {
                write!(f, "failed to destroy task of test {test}: {source}")
            }
        }
    }
}
