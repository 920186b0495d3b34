//! Bit-field extraction and deposition, population counts and trailing bit
//! counts over fixed-width unsigned integers.
//!
//! Everything here is a pure function of its arguments. Field operations
//! reject descriptors that fall outside the operand with [`InvalidRange`],
//! which hands the operand back unmodified:
//!
//! ```
//! use bitops::{deposit32, extract32, InvalidRange};
//!
//! let word = deposit32(0xF0F0_F0F0, 4, 16, 0x1234).unwrap();
//! assert_eq!(word, 0xF0F1_2340);
//! assert_eq!(extract32(word, 4, 16), Ok(0x1234));
//!
//! let unchanged = extract32(word, 0, 33).unwrap_or_else(InvalidRange::into_value);
//! assert_eq!(unchanged, word);
//! ```
//!
//! With the `python` feature the same functions are exported as a Python
//! extension module.

mod error;
mod field;
mod masks;
mod popcount;
mod trailing;

#[cfg(feature = "python")]
mod python;

pub use error::{InvalidRange, RangeKind};
pub use field::{
    deposit, deposit32, deposit64, extract, extract32, extract64, get_field, get_field32,
    get_field64, set_field, set_field32, set_field64,
};
pub use masks::Word;
pub use popcount::{
    count_ones16, count_ones32, count_ones64, count_ones8, count_zeros16, count_zeros32,
    count_zeros64, count_zeros8,
};
pub use trailing::{
    count_trailing_ones32, count_trailing_ones64, count_trailing_zeros32, count_trailing_zeros64,
};
