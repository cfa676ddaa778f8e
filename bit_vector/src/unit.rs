//! Storage units and the bit-layout arithmetic shared by every operation.
//!
//! Bit 0 of a vector is the most significant bit of unit 0. Bits run MSB-first
//! within a unit and continue contiguously into the next one:
//!
//! ```text
//!   unit      0          1          2
//!        +--------+ +--------+ +--------+
//!        |        | |        | |        |
//!        +--------+ +--------+ +--------+
//!   bit   0......7   8.....15   16..19 (20-bit vector, 4 spare bits)
//! ```

use bytemuck::Pod;
use core::fmt;
use core::hash::Hash;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

/// An unsigned integer usable as the packed element of a
/// [`BitVector`](crate::BitVector).
pub trait StorageUnit:
    Pod
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
{
    /// Bits per unit.
    const BITS: usize;
    /// Bytes per unit.
    const BYTES: usize;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn count_ones(self) -> u32;

    /// Byte `i` of the big-endian encoding, `i < Self::BYTES`.
    fn be_byte(self, i: usize) -> u8;
}

macro_rules! impl_storage_unit {
    ($($t:ty),+ $(,)?) => {
        $(
            impl StorageUnit for $t {
                const BITS: usize = <$t>::BITS as usize;
                const BYTES: usize = core::mem::size_of::<$t>();
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn count_ones(self) -> u32 {
                    <$t>::count_ones(self)
                }

                #[inline]
                fn be_byte(self, i: usize) -> u8 {
                    (self >> ((Self::BYTES - 1 - i) * 8) as u32) as u8
                }
            }
        )+
    };
}

impl_storage_unit!(u8, u16, u32, u64);

/// Number of units needed to hold `len` bits.
#[inline]
pub fn units_for<U: StorageUnit>(len: usize) -> usize {
    len.div_ceil(U::BITS)
}

/// Index of the unit holding `bit`.
#[inline]
pub fn unit_index<U: StorageUnit>(bit: usize) -> usize {
    bit / U::BITS
}

/// Single-bit mask selecting `bit` within its unit.
#[inline]
pub fn bit_mask<U: StorageUnit>(bit: usize) -> U {
    U::ONE << (U::BITS - 1 - bit % U::BITS) as u32
}

/// Number of logical bits held by the final unit of a `len`-bit vector.
#[inline]
pub fn used_bits_in_last<U: StorageUnit>(len: usize) -> usize {
    match len % U::BITS {
        0 => U::BITS,
        rem => rem,
    }
}

/// Mask of the logical (non-spare) bits of the final unit.
#[inline]
pub fn tail_mask<U: StorageUnit>(len: usize) -> U {
    let used = used_bits_in_last::<U>(len);
    if used == U::BITS {
        U::MAX
    } else {
        U::MAX << (U::BITS - used) as u32
    }
}

/// The least significant logical bit of the final unit, i.e. the value of "1"
/// when the vector is read as an integer.
#[inline]
pub fn lsb_of_last<U: StorageUnit>(len: usize) -> U {
    U::ONE << (U::BITS - used_bits_in_last::<U>(len)) as u32
}
