//! Packed-Decimal Conversion Tests
//!
//! Run with: cargo test --target x86_64-unknown-linux-gnu --no-default-features --features std --test bcd_tests

use ds1307_rtc::bcd::{bcd_to_bin, bin_to_bcd, bin_to_bcd_slice, try_bin_to_bcd, BCD_MAX};

#[test]
fn bin_to_bcd_examples() {
    assert_eq!(bin_to_bcd(0), 0x00);
    assert_eq!(bin_to_bcd(9), 0x09);
    assert_eq!(bin_to_bcd(10), 0x10);
    assert_eq!(bin_to_bcd(45), 0x45);
    assert_eq!(bin_to_bcd(59), 0x59);
    assert_eq!(bin_to_bcd(99), 0x99);
}

#[test]
fn bin_to_bcd_matches_digit_formula() {
    for v in 0..=BCD_MAX {
        assert_eq!(bin_to_bcd(v), (v / 10) * 16 + (v % 10), "value {v}");
    }
}

#[test]
fn bin_to_bcd_nibbles_are_decimal_digits() {
    for v in 0..=BCD_MAX {
        let bcd = bin_to_bcd(v);
        assert!((bcd >> 4) <= 9);
        assert!((bcd & 0x0F) <= 9);
    }
}

#[test]
fn bin_to_bcd_truncates_above_99() {
    assert_eq!(bin_to_bcd(100), 0xA0);
    assert_eq!(bin_to_bcd(123), 0xC3);
    // Tens digit 25 overflows the high nibble
    assert_eq!(bin_to_bcd(255), 0x95);
}

#[test]
fn try_bin_to_bcd_rejects_above_99() {
    assert_eq!(try_bin_to_bcd(99), Some(0x99));
    assert_eq!(try_bin_to_bcd(0), Some(0x00));
    assert_eq!(try_bin_to_bcd(100), None);
    assert_eq!(try_bin_to_bcd(255), None);
}

#[test]
fn slice_conversion_in_place() {
    let mut data = [34, 59, 12];
    bin_to_bcd_slice(&mut data);
    assert_eq!(data, [0x34, 0x59, 0x12]);
}

#[test]
fn slice_conversion_empty() {
    let mut data: [u8; 0] = [];
    bin_to_bcd_slice(&mut data);
}

#[test]
fn bcd_to_bin_decodes_register_values() {
    assert_eq!(bcd_to_bin(0x00), 0);
    assert_eq!(bcd_to_bin(0x23), 23);
    assert_eq!(bcd_to_bin(0x59), 59);
    assert_eq!(bcd_to_bin(0x99), 99);
}
