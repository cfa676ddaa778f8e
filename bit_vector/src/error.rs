#[cfg(feature = "std")]
use thiserror::Error;

/// Errors reported by [`BitVector`](crate::BitVector) operations.
///
/// All of these are caller-input problems; none of them leave the receiver
/// partially modified.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitVectorError {
    #[cfg_attr(feature = "std", error("bit index {index} is out of range for length {len}"))]
    IndexOutOfRange { index: usize, len: usize },

    #[cfg_attr(
        feature = "std",
        error("length mismatch: left operand has {left} bits, right operand has {right}")
    )]
    LengthMismatch { left: usize, right: usize },

    #[cfg_attr(
        feature = "std",
        error("operand of length {len} has no storage units allocated")
    )]
    UninitializedOperand { len: usize },

    #[cfg_attr(
        feature = "std",
        error("unit count mismatch: expected {expected} storage units, found {found}")
    )]
    UnitCountMismatch { expected: usize, found: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitVectorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitVectorError::IndexOutOfRange { index, len } => {
                write!(f, "bit index {} is out of range for length {}", index, len)
            }
            BitVectorError::LengthMismatch { left, right } => write!(
                f,
                "length mismatch: left operand has {} bits, right operand has {}",
                left, right
            ),
            BitVectorError::UninitializedOperand { len } => {
                write!(f, "operand of length {} has no storage units allocated", len)
            }
            BitVectorError::UnitCountMismatch { expected, found } => write!(
                f,
                "unit count mismatch: expected {} storage units, found {}",
                expected, found
            ),
        }
    }
}

pub type Result<T> = core::result::Result<T, BitVectorError>;
