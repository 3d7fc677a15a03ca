// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Kernel status codes.
//!
//! Task and channel primitives report success or failure with a signed
//! machine word. Zero is success, every negative value is an error.

use core::fmt;

/// Raw status code for a successful kernel call.
pub const K_OK: i64 = 0;

/// Raw status code for a generic kernel failure.
pub const K_ERROR: i64 = -1;

/// Decoded kernel status code.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum KernelStatus {
    /// The call succeeded.
    Ok,
    /// The call failed with the given raw code.
    Error(i64),
}

impl KernelStatus {
    /// Decode a raw status code.
    ///
    /// Only [`K_OK`] decodes as success. Positive values are never produced
    /// by the kernel and decode as errors.
    #[inline]
    #[must_use]
    pub const fn from_raw(code: i64) -> Self {
        if code == K_OK {
            Self::Ok
        } else {
            Self::Error(code)
        }
    }

    /// Returns the raw status code.
    #[inline]
    #[must_use]
    pub const fn as_raw(self) -> i64 {
        match self {
            Self::Ok => K_OK,
            Self::Error(code) => code,
        }
    }

    /// Returns true if the call succeeded.
    #[inline]
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Debug for KernelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "Ok"),
            Self::Error(code) => write!(f, "Error({code})"),
        }
    }
}
