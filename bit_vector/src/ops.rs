//! Operator syntax over the named [`BitVector`] methods.
//!
//! The binary operators panic when the operand lengths differ, since the
//! `core::ops` traits cannot return an error. Use the named methods
//! ([`BitVector::bit_and`], [`BitVector::in_place_bit_or`], ...) to handle a
//! mismatch as a [`BitVectorError`](crate::BitVectorError).

use crate::BitVector;
use crate::unit::StorageUnit;
use core::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Index, Not, Shl, ShlAssign,
    Shr, ShrAssign,
};

macro_rules! impl_bitwise_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $named:ident) => {
        impl<U: StorageUnit> $assign<&BitVector<U>> for BitVector<U> {
            /// # Panics
            ///
            /// Panics if the lengths differ.
            #[track_caller]
            fn $assign_fn(&mut self, rhs: &BitVector<U>) {
                if let Err(err) = self.$named(rhs) {
                    panic!("{}", err);
                }
            }
        }

        impl<U: StorageUnit> $assign for BitVector<U> {
            #[track_caller]
            fn $assign_fn(&mut self, rhs: BitVector<U>) {
                <Self as $assign<&BitVector<U>>>::$assign_fn(self, &rhs);
            }
        }

        impl<U: StorageUnit> $op<&BitVector<U>> for &BitVector<U> {
            type Output = BitVector<U>;

            #[track_caller]
            fn $op_fn(self, rhs: &BitVector<U>) -> BitVector<U> {
                let mut result = self.clone();
                <BitVector<U> as $assign<&BitVector<U>>>::$assign_fn(&mut result, rhs);
                result
            }
        }

        impl<U: StorageUnit> $op for BitVector<U> {
            type Output = BitVector<U>;

            #[track_caller]
            fn $op_fn(mut self, rhs: BitVector<U>) -> BitVector<U> {
                <Self as $assign<&BitVector<U>>>::$assign_fn(&mut self, &rhs);
                self
            }
        }
    };
}

impl_bitwise_op!(BitAnd, bitand, BitAndAssign, bitand_assign, in_place_bit_and);
impl_bitwise_op!(BitOr, bitor, BitOrAssign, bitor_assign, in_place_bit_or);
impl_bitwise_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, in_place_bit_xor);

impl<U: StorageUnit> Not for BitVector<U> {
    type Output = BitVector<U>;

    fn not(mut self) -> Self::Output {
        self.in_place_bit_not();
        self
    }
}

impl<U: StorageUnit> Not for &BitVector<U> {
    type Output = BitVector<U>;

    fn not(self) -> Self::Output {
        self.bit_not()
    }
}

impl<U: StorageUnit> ShlAssign<usize> for BitVector<U> {
    fn shl_assign(&mut self, rhs: usize) {
        self.shift_left(rhs);
    }
}

impl<U: StorageUnit> Shl<usize> for BitVector<U> {
    type Output = BitVector<U>;

    fn shl(mut self, rhs: usize) -> Self::Output {
        self.shift_left(rhs);
        self
    }
}

impl<U: StorageUnit> Shl<usize> for &BitVector<U> {
    type Output = BitVector<U>;

    fn shl(self, rhs: usize) -> Self::Output {
        self.shifted_left(rhs)
    }
}

impl<U: StorageUnit> ShrAssign<usize> for BitVector<U> {
    fn shr_assign(&mut self, rhs: usize) {
        self.shift_right(rhs);
    }
}

impl<U: StorageUnit> Shr<usize> for BitVector<U> {
    type Output = BitVector<U>;

    fn shr(mut self, rhs: usize) -> Self::Output {
        self.shift_right(rhs);
        self
    }
}

impl<U: StorageUnit> Shr<usize> for &BitVector<U> {
    type Output = BitVector<U>;

    fn shr(self, rhs: usize) -> Self::Output {
        self.shifted_right(rhs)
    }
}

/// Read-only indexing. Panics if the index is out of range; use
/// [`BitVector::get`] for a checked read.
impl<U: StorageUnit> Index<usize> for BitVector<U> {
    type Output = bool;

    #[track_caller]
    fn index(&self, index: usize) -> &bool {
        match self.get(index) {
            Ok(true) => &true,
            Ok(false) => &false,
            Err(err) => panic!("{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::BitVector;

    fn byte(value: u8) -> BitVector {
        BitVector::from_bytes(&[value], 8).unwrap()
    }

    #[test]
    fn operators_match_named_methods() {
        let a = byte(0xF0);
        let b = byte(0x0F);
        assert_eq!((&a | &b).dump(), "FF");
        assert_eq!((&a & &b).dump(), "00");
        assert_eq!((&a ^ &b).dump(), "FF");
        assert_eq!((!&a).dump(), "0F");
        assert_eq!(a.clone() | b.clone(), a.bit_or(&b).unwrap());
        assert_eq!(!a.clone(), a.bit_not());
    }

    #[test]
    fn assign_operators_mutate_in_place() {
        let mut a = byte(0xCC);
        a &= &byte(0xF0);
        assert_eq!(a.dump(), "C0");
        a |= byte(0x03);
        assert_eq!(a.dump(), "C3");
        a ^= &byte(0xFF);
        assert_eq!(a.dump(), "3C");
    }

    #[test]
    fn shift_operators() {
        let mut a = byte(0x81);
        a <<= 1;
        assert_eq!(a.dump(), "02");
        a >>= 1;
        assert_eq!(a.dump(), "01");
        assert_eq!((&a << 7).dump(), "80");
        assert_eq!((a >> 8).dump(), "00");
    }

    #[test]
    fn indexing_reads_bits() {
        let a = byte(0x40);
        assert!(!a[0]);
        assert!(a[1]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    #[cfg(feature = "std")]
    fn indexing_past_the_end_panics() {
        let a = byte(0x40);
        let _bit: bool = a[8];
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    #[cfg(feature = "std")]
    fn mismatched_operator_panics() {
        let _ = &byte(0x01) & &BitVector::new(16);
    }
}
