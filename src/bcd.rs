//! Packed-decimal (BCD) conversion
//!
//! Packs the tens digit of a value into the high nibble and the units
//! digit into the low nibble. The conversion is only meaningful for
//! 0-99; for larger inputs the tens digit no longer fits in a nibble and
//! the result is truncated to 8 bits.

/// Largest value with a packed-decimal representation
pub const BCD_MAX: u8 = 99;

/// Convert a binary value to packed decimal
///
/// `45` becomes `0x45`. Inputs above [`BCD_MAX`] are truncated
/// (`100` becomes `0xA0`, `255` becomes `0x95`).
#[must_use]
pub const fn bin_to_bcd(value: u8) -> u8 {
    ((value / 10) << 4) | (value % 10)
}

/// Convert a binary value to packed decimal, rejecting values above 99
#[must_use]
pub const fn try_bin_to_bcd(value: u8) -> Option<u8> {
    if value > BCD_MAX {
        None
    } else {
        Some(bin_to_bcd(value))
    }
}

/// Convert every byte of `data` to packed decimal in place
pub fn bin_to_bcd_slice(data: &mut [u8]) {
    for byte in data.iter_mut() {
        *byte = bin_to_bcd(*byte);
    }
}

/// Convert a packed-decimal byte back to binary
///
/// Nibbles above 9 are not rejected; `0xA0` decodes to `100`.
#[must_use]
pub const fn bcd_to_bin(value: u8) -> u8 {
    (value >> 4) * 10 + (value & 0x0F)
}
