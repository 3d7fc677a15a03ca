// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Mock register space for testing.

use super::RegisterSpace;
use anckor_abi::{DOUBLE_WORD_SIZE, Paddr};
use core::cell::Cell;
use std::vec;
use std::vec::Vec;

/// A register space backed by a buffer of double words.
///
/// Panics on unaligned or out-of-range addresses, where real hardware would
/// fault.
#[derive(Debug, Clone)]
pub struct MockRegisters {
    base: Paddr,
    words: Vec<u64>,
    reads: Cell<usize>,
    writes: usize,
}

impl MockRegisters {
    /// Create `count` zeroed registers starting at `base`.
    #[must_use]
    pub fn new(base: Paddr, count: usize) -> Self {
        Self {
            base,
            words: vec![0; count],
            reads: Cell::new(0),
            writes: 0,
        }
    }

    /// Base address of the first register.
    #[must_use]
    pub const fn base(&self) -> Paddr {
        self.base
    }

    /// Address of register number `index`.
    #[must_use]
    pub const fn addr(&self, index: usize) -> Paddr {
        self.base.add((index * DOUBLE_WORD_SIZE) as u64)
    }

    /// Preload a register without counting it as an access.
    pub fn preload(&mut self, addr: Paddr, value: u64) {
        let index = self.index(addr);
        self.words[index] = value;
    }

    /// Number of double word reads so far.
    #[must_use]
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Number of double word writes so far.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }

    #[expect(
        clippy::panic,
        reason = "test mock panics intentionally on invalid address"
    )]
    fn index(&self, addr: Paddr) -> usize {
        assert!(
            addr >= self.base,
            "register address {addr} is below base {}",
            self.base
        );
        let offset = addr.as_u64() - self.base.as_u64();
        assert!(
            offset % DOUBLE_WORD_SIZE as u64 == 0,
            "register address {addr} is not double word aligned"
        );
        let index = usize::try_from(offset / DOUBLE_WORD_SIZE as u64)
            .unwrap_or_else(|_| panic!("register address {addr} out of range"));
        assert!(
            index < self.words.len(),
            "register address {addr} beyond last register"
        );
        index
    }
}

impl RegisterSpace for MockRegisters {
    fn read_double_word(&self, addr: Paddr) -> u64 {
        let value = self.words[self.index(addr)];
        self.reads.set(self.reads.get() + 1);
        value
    }

    fn write_double_word(&mut self, addr: Paddr, value: u64) {
        let index = self.index(addr);
        self.words[index] = value;
        self.writes += 1;
    }
}
