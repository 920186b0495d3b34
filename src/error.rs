//! Range validation errors

use std::fmt;

/// The bit-field descriptor a caller passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    StartLength { start: u32, length: u32 },
    HighLow { high: u32, low: u32 },
}

impl fmt::Display for RangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeKind::StartLength { start, length } => {
                write!(f, "start({}) or length({})", start, length)
            }
            RangeKind::HighLow { high, low } => write!(f, "high({}) or low({})", high, low),
        }
    }
}

/// A field descriptor fell outside the operand, or `high < low`.
///
/// No mutation takes place on failure: `value` is the operand exactly as it
/// was passed in, so a caller may fall back to it with
/// `result.unwrap_or_else(InvalidRange::into_value)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} for {width}-bit value")]
pub struct InvalidRange<T> {
    pub value: T,
    pub width: u32,
    pub kind: RangeKind,
}

impl<T> InvalidRange<T> {
    /// The untouched operand.
    pub fn into_value(self) -> T {
        self.value
    }
}
