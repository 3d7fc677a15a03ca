// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Tests for kernel status codes.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::status::{K_ERROR, K_OK, KernelStatus};

#[test]
fn zero_is_ok() {
    assert_eq!(KernelStatus::from_raw(K_OK), KernelStatus::Ok);
    assert!(KernelStatus::from_raw(0).is_ok());
}

#[test]
fn negative_is_error() {
    assert_eq!(KernelStatus::from_raw(K_ERROR), KernelStatus::Error(-1));
    assert!(!KernelStatus::from_raw(-12).is_ok());
}

#[test]
fn positive_is_error() {
    assert_eq!(KernelStatus::from_raw(3), KernelStatus::Error(3));
}

#[test]
fn raw_round_trip() {
    for code in [K_OK, K_ERROR, -22, 5] {
        assert_eq!(KernelStatus::from_raw(code).as_raw(), code);
    }
}
