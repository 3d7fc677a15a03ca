// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for register access.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use proptest::prelude::*;

const WORD: u64 = 0x1122_3344_5566_7788;

fn offset(raw: u8) -> ByteOffset {
    ByteOffset::new(raw).unwrap()
}

fn registers() -> MockRegisters {
    MockRegisters::new(Paddr::new(0x4000_0000), 4)
}

// =============================================================================
// ByteOffset
// =============================================================================

#[test]
fn test_offset_range() {
    for raw in 0..8 {
        assert_eq!(ByteOffset::new(raw).map(ByteOffset::as_u8), Some(raw));
    }
    assert_eq!(ByteOffset::new(8), None);
    assert_eq!(ByteOffset::new(u8::MAX), None);
}

#[test]
fn test_offset_try_from() {
    assert_eq!(ByteOffset::try_from(3_u8), Ok(offset(3)));
    assert_eq!(ByteOffset::try_from(9_u8), Err(9));
}

#[test]
fn test_offset_shift() {
    assert_eq!(ByteOffset::LOW.shift(), 0);
    assert_eq!(offset(2).shift(), 16);
    assert_eq!(ByteOffset::HIGH.shift(), 56);
}

#[test]
fn test_offset_all() {
    let all: Vec<u8> = ByteOffset::all().map(ByteOffset::as_u8).collect();
    assert_eq!(all, [0, 1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_offset_format() {
    assert_eq!(format!("{:?}", offset(5)), "ByteOffset(5)");
    assert_eq!(format!("{}", offset(5)), "+5");
}

// =============================================================================
// Byte arithmetic
// =============================================================================

#[test]
fn test_byte_mask_each_offset() {
    let expected = [
        0x0000_0000_0000_00FF,
        0x0000_0000_0000_FF00,
        0x0000_0000_00FF_0000,
        0x0000_0000_FF00_0000,
        0x0000_00FF_0000_0000,
        0x0000_FF00_0000_0000,
        0x00FF_0000_0000_0000,
        0xFF00_0000_0000_0000,
    ];
    for (offset, mask) in ByteOffset::all().zip(expected) {
        assert_eq!(byte_mask(offset), mask, "offset {offset}");
    }
}

#[test]
fn test_insert_byte_at_offset_two() {
    assert_eq!(insert_byte(WORD, offset(2), 0xAB), 0x1122_3344_55AB_7788);
}

#[test]
fn test_insert_byte_each_offset() {
    let expected = [
        0x1122_3344_5566_77AB,
        0x1122_3344_5566_AB88,
        0x1122_3344_55AB_7788,
        0x1122_3344_AB66_7788,
        0x1122_33AB_5566_7788,
        0x1122_AB44_5566_7788,
        0x11AB_3344_5566_7788,
        0xAB22_3344_5566_7788,
    ];
    for (offset, word) in ByteOffset::all().zip(expected) {
        assert_eq!(insert_byte(WORD, offset, 0xAB), word, "offset {offset}");
    }
}

#[test]
fn test_insert_clears_before_setting() {
    assert_eq!(insert_byte(u64::MAX, offset(0), 0x00), 0xFFFF_FFFF_FFFF_FF00);
    assert_eq!(insert_byte(0, ByteOffset::HIGH, 0x80), 0x8000_0000_0000_0000);
}

#[test]
fn test_extract_byte() {
    assert_eq!(extract_byte(WORD, ByteOffset::LOW), 0x88);
    assert_eq!(extract_byte(WORD, ByteOffset::HIGH), 0x11);
}

// =============================================================================
// RegisterSpace
// =============================================================================

#[test]
fn test_write_byte_read_modify_write() {
    let mut regs = registers();
    let addr = regs.addr(1);
    regs.preload(addr, WORD);

    regs.write_byte(addr, offset(2), 0xAB);

    assert_eq!(regs.read_double_word(addr), 0x1122_3344_55AB_7788);
    assert_eq!(regs.writes(), 1);
    assert_eq!(regs.reads(), 2);
}

#[test]
fn test_write_byte_leaves_neighbours_alone() {
    let mut regs = registers();
    regs.preload(regs.addr(0), 1);
    regs.preload(regs.addr(2), 2);

    regs.write_byte(regs.addr(1), ByteOffset::HIGH, 0xFF);

    assert_eq!(regs.read_double_word(regs.addr(0)), 1);
    assert_eq!(regs.read_double_word(regs.addr(1)), 0xFF00_0000_0000_0000);
    assert_eq!(regs.read_double_word(regs.addr(2)), 2);
}

#[test]
fn test_read_byte() {
    let mut regs = registers();
    regs.write_double_word(regs.addr(3), WORD);
    assert_eq!(regs.read_byte(regs.addr(3), offset(6)), 0x22);
}

#[test]
fn test_mock_addresses() {
    let regs = registers();
    assert_eq!(regs.base(), Paddr::new(0x4000_0000));
    assert_eq!(regs.addr(3), Paddr::new(0x4000_0018));
}

#[test]
#[should_panic(expected = "not double word aligned")]
fn test_mock_rejects_unaligned() {
    let regs = registers();
    let _ = regs.read_double_word(Paddr::new(0x4000_0004));
}

#[test]
#[should_panic(expected = "beyond last register")]
fn test_mock_rejects_out_of_range() {
    let regs = registers();
    let _ = regs.read_double_word(regs.addr(4));
}

#[test]
fn test_volatile_registers_on_local_word() {
    let mut cell = WORD;
    let addr = Paddr::new(core::ptr::addr_of_mut!(cell).expose_provenance() as u64);
    // SAFETY: addr points to a live, aligned u64 for the whole test
    let mut regs = unsafe { VolatileRegisters::new() };

    regs.write_byte(addr, offset(2), 0xAB);

    assert_eq!(regs.read_double_word(addr), 0x1122_3344_55AB_7788);
}

proptest! {
    #[test]
    fn prop_insert_then_extract(word in any::<u64>(), raw in 0u8..8, value in any::<u8>()) {
        let offset = offset(raw);
        let updated = insert_byte(word, offset, value);
        prop_assert_eq!(extract_byte(updated, offset), value);
        prop_assert_eq!(updated & !byte_mask(offset), word & !byte_mask(offset));
    }

    #[test]
    fn prop_out_of_range_rejected(raw in 8u8..=u8::MAX) {
        prop_assert!(ByteOffset::new(raw).is_none());
    }
}
