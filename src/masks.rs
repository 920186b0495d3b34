//! Operand widths and mask helpers

use std::fmt::Debug;
use std::ops::{BitAnd, BitOr, Not, Shl, Shr};

mod sealed {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Unsigned operand that field extraction and deposition work on.
///
/// Implemented for `u32` and `u64` only. `BITS` is the concrete width, so
/// every shift amount derived from it is the real width of the operand.
pub trait Word:
    sealed::Sealed
    + Copy
    + Eq
    + Debug
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    const BITS: u32;
    const ZERO: Self;
    const ONES: Self;
}

impl Word for u32 {
    const BITS: u32 = 32;
    const ZERO: Self = 0;
    const ONES: Self = !0;
}

impl Word for u64 {
    const BITS: u32 = 64;
    const ZERO: Self = 0;
    const ONES: Self = !0;
}

/// Value with its low `length` bits set and all higher bits clear.
///
/// A zero length gives zero. Caller keeps `length <= T::BITS`.
#[inline]
pub(crate) fn mask_of_width<T: Word>(length: u32) -> T {
    if length == 0 {
        // `ONES >> BITS` is not a legal shift
        return T::ZERO;
    }
    T::ONES >> (T::BITS - length)
}

/// Mask covering `length` bits starting at `start`. Caller checks the range.
#[inline]
pub(crate) fn field_mask<T: Word>(start: u32, length: u32) -> T {
    mask_of_width::<T>(length) << start
}
