//! Population count utilities
//!
//! Each width sums its bits in parallel: adjacent 1-bit groups are added into
//! 2-bit groups, those into 4-bit groups, and so on up to the full width.
//! No per-bit loop and no branches.

/// Count of set bits in an 8-bit value
#[inline]
pub fn count_ones8(value: u8) -> u32 {
    let mut x = value;
    x = (x & 0x55) + ((x >> 1) & 0x55);
    x = (x & 0x33) + ((x >> 2) & 0x33);
    x = (x & 0x0F) + ((x >> 4) & 0x0F);
    x as u32
}

/// Count of set bits in a 16-bit value
#[inline]
pub fn count_ones16(value: u16) -> u32 {
    let mut x = value;
    x = (x & 0x5555) + ((x >> 1) & 0x5555);
    x = (x & 0x3333) + ((x >> 2) & 0x3333);
    x = (x & 0x0F0F) + ((x >> 4) & 0x0F0F);
    x = (x & 0x00FF) + ((x >> 8) & 0x00FF);
    x as u32
}

/// Count of set bits in a 32-bit value
#[inline]
pub fn count_ones32(value: u32) -> u32 {
    let mut x = value;
    x = (x & 0x5555_5555) + ((x >> 1) & 0x5555_5555);
    x = (x & 0x3333_3333) + ((x >> 2) & 0x3333_3333);
    x = (x & 0x0F0F_0F0F) + ((x >> 4) & 0x0F0F_0F0F);
    x = (x & 0x00FF_00FF) + ((x >> 8) & 0x00FF_00FF);
    x = (x & 0x0000_FFFF) + ((x >> 16) & 0x0000_FFFF);
    x
}

/// Count of set bits in a 64-bit value
#[inline]
pub fn count_ones64(value: u64) -> u32 {
    let mut x = value;
    x = (x & 0x5555_5555_5555_5555) + ((x >> 1) & 0x5555_5555_5555_5555);
    x = (x & 0x3333_3333_3333_3333) + ((x >> 2) & 0x3333_3333_3333_3333);
    x = (x & 0x0F0F_0F0F_0F0F_0F0F) + ((x >> 4) & 0x0F0F_0F0F_0F0F_0F0F);
    x = (x & 0x00FF_00FF_00FF_00FF) + ((x >> 8) & 0x00FF_00FF_00FF_00FF);
    x = (x & 0x0000_FFFF_0000_FFFF) + ((x >> 16) & 0x0000_FFFF_0000_FFFF);
    x = (x & 0x0000_0000_FFFF_FFFF) + ((x >> 32) & 0x0000_0000_FFFF_FFFF);
    x as u32
}

#[inline]
pub fn count_zeros8(value: u8) -> u32 {
    u8::BITS - count_ones8(value)
}

#[inline]
pub fn count_zeros16(value: u16) -> u32 {
    u16::BITS - count_ones16(value)
}

#[inline]
pub fn count_zeros32(value: u32) -> u32 {
    u32::BITS - count_ones32(value)
}

#[inline]
pub fn count_zeros64(value: u64) -> u32 {
    u64::BITS - count_ones64(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_ones() {
        assert_eq!(count_ones8(0xA5), 4);
        assert_eq!(count_ones16(0xA5A5), 8);
        assert_eq!(count_ones32(0xA5A5_A5A5), 16);
        assert_eq!(count_ones64(0xA5A5_A5A5_A5A5_A5A5), 32);

        assert_eq!(count_ones8(0), 0);
        assert_eq!(count_ones8(u8::MAX), 8);
        assert_eq!(count_ones16(u16::MAX), 16);
        assert_eq!(count_ones32(u32::MAX), 32);
        assert_eq!(count_ones64(u64::MAX), 64);
        assert_eq!(count_ones64(1 << 63), 1);
    }

    #[test]
    fn test_count_zeros() {
        assert_eq!(count_zeros8(0xA5), 4);
        assert_eq!(count_zeros16(0x0001), 15);
        assert_eq!(count_zeros32(0), 32);
        assert_eq!(count_zeros64(0xFF), 56);
    }

    #[test]
    fn test_all_small_widths_match_builtin() {
        for v in 0..=u8::MAX {
            assert_eq!(count_ones8(v), v.count_ones(), "{:#04x}", v);
        }
        for v in 0..=u16::MAX {
            assert_eq!(count_ones16(v), v.count_ones(), "{:#06x}", v);
            assert_eq!(count_ones16(v) + count_zeros16(v), 16);
        }
    }
}
