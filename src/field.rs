//! Bit-field extraction and deposition
//!
//! Bit 0 is the LSB and bit `W-1` the MSB. A field is addressed either by
//! `(start, length)` or by the inclusive bounds `(high, low)`. Any descriptor
//! that does not lie inside the operand is rejected with [`InvalidRange`],
//! which carries the operand back unmodified.

use crate::error::{InvalidRange, RangeKind};
use crate::masks::{field_mask, mask_of_width, Word};

fn reject<T: Word>(op: &str, value: T, kind: RangeKind) -> InvalidRange<T> {
    log::trace!("{}: rejected {} on {}-bit value", op, kind, T::BITS);
    InvalidRange { value, width: T::BITS, kind }
}

fn check_start_length<T: Word>(
    op: &str,
    value: T,
    start: u32,
    length: u32,
) -> Result<(), InvalidRange<T>> {
    // A zero length would need a mask shift of the full width
    if start >= T::BITS || length == 0 || length > T::BITS - start {
        return Err(reject(op, value, RangeKind::StartLength { start, length }));
    }
    Ok(())
}

/// Translate `(high, low)` into `(start, length)`.
fn high_low_to_start_length<T: Word>(
    op: &str,
    value: T,
    high: u32,
    low: u32,
) -> Result<(u32, u32), InvalidRange<T>> {
    if high >= T::BITS || low >= T::BITS || high < low {
        return Err(reject(op, value, RangeKind::HighLow { high, low }));
    }
    Ok((low, high - low + 1))
}

#[inline]
fn extract_unchecked<T: Word>(value: T, start: u32, length: u32) -> T {
    (value >> start) & mask_of_width::<T>(length)
}

#[inline]
fn deposit_unchecked<T: Word>(value: T, start: u32, length: u32, field: T) -> T {
    let mask = field_mask::<T>(start, length);
    (value & !mask) | ((field << start) & mask)
}

/// Field of `length` bits beginning at bit `start`, shifted down to bit 0.
pub fn extract<T: Word>(value: T, start: u32, length: u32) -> Result<T, InvalidRange<T>> {
    check_start_length("extract", value, start, length)?;
    Ok(extract_unchecked(value, start, length))
}

/// Field between bits `high` and `low` (inclusive), shifted down to bit 0.
pub fn get_field<T: Word>(value: T, high: u32, low: u32) -> Result<T, InvalidRange<T>> {
    let (start, length) = high_low_to_start_length("get_field", value, high, low)?;
    Ok(extract_unchecked(value, start, length))
}

/// Replace `length` bits of `value` starting at `start` with the low bits of
/// `field`. Bits of `field` above `length` are dropped.
pub fn deposit<T: Word>(
    value: T,
    start: u32,
    length: u32,
    field: T,
) -> Result<T, InvalidRange<T>> {
    check_start_length("deposit", value, start, length)?;
    Ok(deposit_unchecked(value, start, length, field))
}

/// Replace bits `high..=low` of `value` with the low bits of `field`.
pub fn set_field<T: Word>(value: T, high: u32, low: u32, field: T) -> Result<T, InvalidRange<T>> {
    let (start, length) = high_low_to_start_length("set_field", value, high, low)?;
    Ok(deposit_unchecked(value, start, length, field))
}

pub fn extract32(value: u32, start: u32, length: u32) -> Result<u32, InvalidRange<u32>> {
    extract(value, start, length)
}

pub fn extract64(value: u64, start: u32, length: u32) -> Result<u64, InvalidRange<u64>> {
    extract(value, start, length)
}

pub fn get_field32(value: u32, high: u32, low: u32) -> Result<u32, InvalidRange<u32>> {
    get_field(value, high, low)
}

pub fn get_field64(value: u64, high: u32, low: u32) -> Result<u64, InvalidRange<u64>> {
    get_field(value, high, low)
}

pub fn deposit32(
    value: u32,
    start: u32,
    length: u32,
    field: u32,
) -> Result<u32, InvalidRange<u32>> {
    deposit(value, start, length, field)
}

pub fn deposit64(
    value: u64,
    start: u32,
    length: u32,
    field: u64,
) -> Result<u64, InvalidRange<u64>> {
    deposit(value, start, length, field)
}

pub fn set_field32(value: u32, high: u32, low: u32, field: u32) -> Result<u32, InvalidRange<u32>> {
    set_field(value, high, low, field)
}

pub fn set_field64(value: u64, high: u32, low: u32, field: u64) -> Result<u64, InvalidRange<u64>> {
    set_field(value, high, low, field)
}
