//! Bit manipulation helpers for unsigned integers of any width.
//!
//! The short aliases (`popcnt`, `blsi`, ...) follow the names of the
//! corresponding x86 BMI/TBM instructions.

use num_traits::{PrimInt, Unsigned, WrappingAdd, WrappingNeg, WrappingSub};

/// Unsigned primitive integers: `u8`, `u16`, `u32`, `u64`, `u128` and `usize`.
pub trait UnsignedBits: PrimInt + Unsigned + WrappingAdd + WrappingSub + WrappingNeg {}

impl<T> UnsignedBits for T where T: PrimInt + Unsigned + WrappingAdd + WrappingSub + WrappingNeg {}

/// Number of bits in `T`.
#[inline]
pub fn bit_width<T: UnsignedBits>() -> u32 {
    T::zero().count_zeros()
}

/// Creates a bitmask of `bits` set bits shifted left by `shift`.
/// E.g. `mask::<u8>(2, 2) == 0b1100`
///
/// # Panics
///
/// If `bits + shift` is larger than the width of `T`.
pub fn mask<T: UnsignedBits>(bits: u32, shift: u32) -> T {
    let width = bit_width::<T>();
    assert!(
        bits <= width && shift <= width - bits,
        "mask of {} bits shifted by {} does not fit in {} bits",
        bits,
        shift,
        width
    );
    if bits == 0 {
        return T::zero();
    }
    (T::max_value() >> (width - bits) as usize) << shift as usize
}

/// Sets `bits` bits starting at `shift`.
/// E.g. `set_bits(0b1100u8, 2, 0) == 0b1111`
#[inline]
pub fn set_bits<T: UnsignedBits>(value: T, bits: u32, shift: u32) -> T {
    value | mask::<T>(bits, shift)
}

/// Clears `bits` bits starting at `shift`.
/// E.g. `clear_bits(0b1111u8, 2, 1) == 0b1001`
#[inline]
pub fn clear_bits<T: UnsignedBits>(value: T, bits: u32, shift: u32) -> T {
    value & !mask::<T>(bits, shift)
}

/// Population count, runs once per set bit.
/// E.g. `count_bits_set(0b11u8) == 2`
pub fn count_bits_set<T: UnsignedBits>(mut value: T) -> u32 {
    let mut count = 0;
    while !value.is_zero() {
        value = clear_lowest_set_bit(value);
        count += 1;
    }
    count
}

#[inline]
pub fn popcnt<T: UnsignedBits>(value: T) -> u32 {
    count_bits_set(value)
}

/// E.g. `leading_zeroes_count(0b0000_1111u8) == 4`, the full width for zero.
#[inline]
pub fn leading_zeroes_count<T: UnsignedBits>(value: T) -> u32 {
    value.leading_zeros()
}

#[inline]
pub fn lzcnt<T: UnsignedBits>(value: T) -> u32 {
    leading_zeroes_count(value)
}

/// E.g. `trailing_zeroes_count(0b1100u8) == 2`, the full width for zero.
#[inline]
pub fn trailing_zeroes_count<T: UnsignedBits>(value: T) -> u32 {
    value.trailing_zeros()
}

#[inline]
pub fn tzcnt<T: UnsignedBits>(value: T) -> u32 {
    trailing_zeroes_count(value)
}

/// Sets every bit except the lowest clear one.
/// E.g. `isolate_lowest_clear_bit(0b1110_0011u8) == 0b1111_1011`
#[inline]
pub fn isolate_lowest_clear_bit<T: UnsignedBits>(v: T) -> T {
    v | !v.wrapping_add(&T::one())
}

#[inline]
pub fn blci<T: UnsignedBits>(v: T) -> T {
    isolate_lowest_clear_bit(v)
}

/// Keeps only the lowest set bit.
/// E.g. `isolate_lowest_set_bit(0b1110_0110u8) == 0b0000_0010`
#[inline]
pub fn isolate_lowest_set_bit<T: UnsignedBits>(v: T) -> T {
    v & v.wrapping_neg()
}

#[inline]
pub fn blsi<T: UnsignedBits>(v: T) -> T {
    isolate_lowest_set_bit(v)
}

/// Clears the run of set bits below the lowest clear bit.
/// E.g. `fill_from_lowest_clear_bit(0b1110_1011u8) == 0b1110_1000`
#[inline]
pub fn fill_from_lowest_clear_bit<T: UnsignedBits>(v: T) -> T {
    // all ones has no clear bit to fill from
    if v == T::max_value() {
        return v;
    }
    v & v.wrapping_add(&T::one())
}

#[inline]
pub fn blcfill<T: UnsignedBits>(v: T) -> T {
    fill_from_lowest_clear_bit(v)
}

/// Sets every bit below the lowest set bit.
/// E.g. `fill_from_lowest_set_bit(0b0111_0100u8) == 0b0111_0111`
#[inline]
pub fn fill_from_lowest_set_bit<T: UnsignedBits>(v: T) -> T {
    if v.is_zero() {
        return v;
    }
    v | v.wrapping_sub(&T::one())
}

#[inline]
pub fn blsfill<T: UnsignedBits>(v: T) -> T {
    fill_from_lowest_set_bit(v)
}

/// E.g. `clear_lowest_set_bit(0b1110_0010u8) == 0b1110_0000`
#[inline]
pub fn clear_lowest_set_bit<T: UnsignedBits>(v: T) -> T {
    v & v.wrapping_sub(&T::one())
}

#[inline]
pub fn blsc<T: UnsignedBits>(v: T) -> T {
    clear_lowest_set_bit(v)
}

/// E.g. `set_lowest_clear_bit(0b1110_0011u8) == 0b1110_0111`
#[inline]
pub fn set_lowest_clear_bit<T: UnsignedBits>(v: T) -> T {
    v | v.wrapping_add(&T::one())
}

#[inline]
pub fn blcs<T: UnsignedBits>(v: T) -> T {
    set_lowest_clear_bit(v)
}
