// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Completion protocol between test tasks and the engine.
//!
//! The engine creates one channel named [`TEST_CHANNEL_NAME`] before it runs
//! the first test. Every test task looks the channel up by name and sends
//! exactly one word when it is done.
//!
//! # Completion Message
//!
//! | Field | Content |
//! |-------|---------|
//! | payload | [`TEST_END_WORD`] on normal completion |
//! | len | [`DOUBLE_WORD_SIZE`] |
//!
//! Anything else received on the channel is a protocol violation and the
//! running test is classified as failed.

use crate::layout::DOUBLE_WORD_SIZE;
use core::fmt;


/// Name of the shared completion channel.
pub const TEST_CHANNEL_NAME: &str = "test_channel";

/// Sentinel word a test task sends to signal normal completion.
pub const TEST_END_WORD: u64 = 0x7E57_0000_0000_E0D5;

/// A message received from a channel.
///
/// Channels carry one machine word per message. `len` is the number of
/// payload bytes the sender actually wrote.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct Message {
    /// The received word.
    pub payload: u64,
    /// Number of valid payload bytes.
    pub len: u64,
}

impl Message {
    /// Create a full-word message.
    #[inline]
    #[must_use]
    pub const fn word(payload: u64) -> Self {
        Self {
            payload,
            len: DOUBLE_WORD_SIZE as u64,
        }
    }

    /// Create the normal completion message.
    #[inline]
    #[must_use]
    pub const fn test_end() -> Self {
        Self::word(TEST_END_WORD)
    }

    /// Returns true if this message carries a full machine word.
    #[inline]
    #[must_use]
    pub const fn is_full_word(self) -> bool {
        self.len == DOUBLE_WORD_SIZE as u64
    }

    /// Returns true if this message is the completion signal for `sentinel`.
    ///
    /// A short message never matches, even if its payload bits happen to.
    #[inline]
    #[must_use]
    pub const fn is_test_end(self, sentinel: u64) -> bool {
        self.is_full_word() && self.payload == sentinel
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Message({:#x}, len={})", self.payload, self.len)
    }
}
