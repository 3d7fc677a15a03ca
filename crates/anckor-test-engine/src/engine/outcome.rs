// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Classification of a finished test.

use anckor_abi::Message;
use core::fmt;

/// Why a test was classified as failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    /// The error flag was set when the test finished.
    Flagged,
    /// The test sent something other than the completion sentinel.
    UnexpectedMessage(Message),
}

/// Result of one test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The test sent the sentinel and the error flag was clear.
    Passed,
    /// The test failed.
    Failed(FailureCause),
}

impl Outcome {
    /// Classify a finished test.
    ///
    /// Anything other than the exact sentinel is a failure, whether or not
    /// the error flag is set.
    #[must_use]
    pub const fn classify(message: Message, sentinel: u64, flagged: bool) -> Self {
        if !message.is_test_end(sentinel) {
            Self::Failed(FailureCause::UnexpectedMessage(message))
        } else if flagged {
            Self::Failed(FailureCause::Flagged)
        } else {
            Self::Passed
        }
    }

    /// Returns true if the test passed.
    #[inline]
    #[must_use]
    pub const fn is_passed(self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Word used for this outcome in console output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
