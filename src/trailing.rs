//! Trailing zero and trailing one counts

/// Number of consecutive zero bits from bit 0. Returns 32 for zero.
///
/// Halves the search window at each step: if the low 16 bits are clear the
/// count moves up by 16 and the value shifts down, then the same for 8, 4,
/// 2 and 1. At that point the lowest bit is set unless the value was zero.
pub fn count_trailing_zeros32(value: u32) -> u32 {
    let mut x = value;
    let mut n = 0;

    if x & 0xFFFF == 0 {
        n += 16;
        x >>= 16;
    }
    if x & 0xFF == 0 {
        n += 8;
        x >>= 8;
    }
    if x & 0xF == 0 {
        n += 4;
        x >>= 4;
    }
    if x & 0x3 == 0 {
        n += 2;
        x >>= 2;
    }
    if x & 0x1 == 0 {
        n += 1;
        x >>= 1;
    }
    // Only reached with a clear bit when the input was zero (n == 31 here)
    if x & 0x1 == 0 {
        n += 1;
    }
    n
}

/// Number of consecutive zero bits from bit 0. Returns 64 for zero.
pub fn count_trailing_zeros64(value: u64) -> u32 {
    let lo = value as u32;
    if lo == 0 {
        32 + count_trailing_zeros32((value >> 32) as u32)
    } else {
        count_trailing_zeros32(lo)
    }
}

/// Number of consecutive one bits from bit 0.
#[inline]
pub fn count_trailing_ones32(value: u32) -> u32 {
    count_trailing_zeros32(!value)
}

/// Number of consecutive one bits from bit 0.
#[inline]
pub fn count_trailing_ones64(value: u64) -> u32 {
    count_trailing_zeros64(!value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_zeros32() {
        assert_eq!(count_trailing_zeros32(0), 32);
        assert_eq!(count_trailing_zeros32(1), 0);
        assert_eq!(count_trailing_zeros32(0xFFFF_FFFF), 0);
        assert_eq!(count_trailing_zeros32(0xFFFF_FFF0), 4);
        assert_eq!(count_trailing_zeros32(0x8000_0000), 31);
        assert_eq!(count_trailing_zeros32(0x0001_0000), 16);
    }

    #[test]
    fn test_trailing_zeros64() {
        assert_eq!(count_trailing_zeros64(0), 64);
        assert_eq!(count_trailing_zeros64(1), 0);
        assert_eq!(count_trailing_zeros64(1 << 32), 32);
        assert_eq!(count_trailing_zeros64(1 << 63), 63);
        assert_eq!(count_trailing_zeros64(0xFFFF_FFF0_0000_0000), 36);
    }

    #[test]
    fn test_trailing_zeros_boundaries() {
        for shift in 0..32 {
            let bit = 1u32 << shift;
            assert_eq!(count_trailing_zeros32(bit), shift);
            assert_eq!(count_trailing_zeros32(u32::MAX << shift), shift);
            assert_eq!(count_trailing_zeros32(bit | 0x8000_0000), shift);
        }
        for shift in 0..64 {
            let bit = 1u64 << shift;
            assert_eq!(count_trailing_zeros64(bit), shift);
            assert_eq!(count_trailing_zeros64(u64::MAX << shift), shift);
            assert_eq!(count_trailing_zeros64(bit | (1 << 63)), shift);
        }
    }

    #[test]
    fn test_trailing_ones() {
        assert_eq!(count_trailing_ones32(u32::MAX), 32);
        assert_eq!(count_trailing_ones32(0), 0);
        assert_eq!(count_trailing_ones32(0xFFFF_FFFE), 0);
        assert_eq!(count_trailing_ones32(0x0000_000F), 4);
        assert_eq!(count_trailing_ones64(u64::MAX), 64);
        assert_eq!(count_trailing_ones64(0xFFFF_FFFF), 32);
        assert_eq!(count_trailing_ones64(0x7FFF_FFFF_FFFF_FFFF), 63);
        assert_eq!(count_trailing_ones64(2), 0);
    }
}
