// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Register access primitive.
//!
//! Tests poke device registers through a [`RegisterSpace`]. Registers are
//! 64-bit double words; single bytes are updated with a read-modify-write of
//! the containing double word so the other seven bytes are preserved.
//!
//! Byte offset 0 is the least significant byte.

#[cfg(any(test, feature = "std"))]
mod mock;
#[cfg(test)]
mod mmio_test;

#[cfg(any(test, feature = "std"))]
pub use mock::MockRegisters;

use anckor_abi::{DOUBLE_WORD_SIZE, Paddr};
use core::fmt;
use core::ptr::{read_volatile, write_volatile};

/// Index of a byte within a double word, always in `0..8`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ByteOffset(u8);

impl ByteOffset {
    /// Least significant byte.
    pub const LOW: Self = Self(0);

    /// Most significant byte.
    pub const HIGH: Self = Self(7);

    /// Create a byte offset, rejecting anything outside the double word.
    #[inline]
    #[must_use]
    pub const fn new(offset: u8) -> Option<Self> {
        if (offset as usize) < DOUBLE_WORD_SIZE {
            Some(Self(offset))
        } else {
            None
        }
    }

    /// Raw offset.
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Bit position of the byte's least significant bit.
    #[inline]
    #[must_use]
    pub const fn shift(self) -> u32 {
        self.0 as u32 * 8
    }

    /// Iterate all offsets from least to most significant.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::LOW.0..=Self::HIGH.0).map(Self)
    }
}

impl fmt::Debug for ByteOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteOffset({})", self.0)
    }
}

impl fmt::Display for ByteOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}

impl TryFrom<u8> for ByteOffset {
    type Error = u8;

    fn try_from(offset: u8) -> Result<Self, Self::Error> {
        Self::new(offset).ok_or(offset)
    }
}

/// Mask selecting the byte at `offset`.
#[inline]
#[must_use]
pub const fn byte_mask(offset: ByteOffset) -> u64 {
    0xFF_u64 << offset.shift()
}

/// Replace the byte at `offset` in `word` with `value`.
#[inline]
#[must_use]
pub const fn insert_byte(word: u64, offset: ByteOffset, value: u8) -> u64 {
    (word & !byte_mask(offset)) | ((value as u64) << offset.shift())
}

/// Extract the byte at `offset` from `word`.
#[inline]
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "value is masked to a single byte"
)]
pub const fn extract_byte(word: u64, offset: ByteOffset) -> u8 {
    ((word & byte_mask(offset)) >> offset.shift()) as u8
}

/// A space of 64-bit memory-mapped registers.
pub trait RegisterSpace {
    /// Read the double word at `addr`.
    fn read_double_word(&self, addr: Paddr) -> u64;

    /// Write the double word at `addr`.
    fn write_double_word(&mut self, addr: Paddr, value: u64);

    /// Overwrite one byte of the double word at `addr`.
    ///
    /// Performs a read-modify-write; the other bytes are written back
    /// unchanged. Not atomic with respect to other writers.
    fn write_byte(&mut self, addr: Paddr, offset: ByteOffset, value: u8) {
        let word = self.read_double_word(addr);
        self.write_double_word(addr, insert_byte(word, offset, value));
    }

    /// Read one byte of the double word at `addr`.
    fn read_byte(&self, addr: Paddr, offset: ByteOffset) -> u8 {
        extract_byte(self.read_double_word(addr), offset)
    }
}

/// Direct volatile access to physical addresses.
///
/// Only usable where addresses are identity mapped.
#[derive(Debug)]
pub struct VolatileRegisters {
    _private: (),
}

impl VolatileRegisters {
    /// Create a handle for raw register access.
    ///
    /// # Safety
    ///
    /// Every address later passed to this handle must be mapped, 8-byte
    /// aligned and valid for volatile 64-bit reads and writes.
    #[must_use]
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl RegisterSpace for VolatileRegisters {
    fn read_double_word(&self, addr: Paddr) -> u64 {
        // SAFETY: guaranteed by the contract of `VolatileRegisters::new`
        unsafe { read_volatile(addr.as_ptr::<u64>()) }
    }

    fn write_double_word(&mut self, addr: Paddr, value: u64) {
        // SAFETY: guaranteed by the contract of `VolatileRegisters::new`
        unsafe { write_volatile(addr.as_mut_ptr::<u64>(), value) }
    }
}
