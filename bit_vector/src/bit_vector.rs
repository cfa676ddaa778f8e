//! Fixed-length packed bit vector.
//!
//! # Examples
//!
//! ```rust
//! use bit_vector::BitVector;
//!
//! let mut flags = BitVector::new(8);
//! flags.set_bit(0).unwrap();
//! flags.set_bit(3).unwrap();
//! assert_eq!(flags.dump(), "90");
//!
//! flags.increment();
//! assert_eq!(flags.dump(), "91");
//! ```
//!
//! ## Restoring from raw storage
//!
//! ```rust
//! use bit_vector::BitVector;
//!
//! let original = BitVector::from_bytes(&[0xAB, 0xC0], 12).unwrap();
//! let bytes = original.to_bytes();
//!
//! let restored = BitVector::from_bytes(&bytes, 12).unwrap();
//! assert_eq!(restored, original);
//! ```

use crate::bit_ref::BitRef;
use crate::error::{BitVectorError, Result};
use crate::unit::{self, StorageUnit};
use crate::{String, Vec};
use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// A fixed number of bits packed MSB-first into storage units of type `U`.
///
/// The length is fixed at construction. Spare bits in the final unit are kept
/// zero by every mutating operation, so the storage always reads as the
/// vector's unsigned value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitVector<U: StorageUnit = u8> {
    storage: Vec<U>,
    len: usize,
}

impl BitVector<u8> {
    /// Creates a zero-filled vector of `len` bits stored in bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let bits = BitVector::new(20);
    /// assert_eq!(bits.len(), 20);
    /// assert_eq!(bits.unit_count(), 3);
    /// assert_eq!(bits.count_ones(), 0);
    /// ```
    pub fn new(len: usize) -> Self {
        Self::with_len(len)
    }

    /// Creates a vector of `len` bits from packed bytes.
    ///
    /// `bytes` must hold exactly `len.div_ceil(8)` bytes. Spare bits past `len`
    /// in the last byte are cleared.
    ///
    /// # Errors
    ///
    /// See [`BitVector::from_units`].
    pub fn from_bytes(bytes: &[u8], len: usize) -> Result<Self> {
        Self::from_units(bytes, len)
    }
}

impl<U: StorageUnit> BitVector<U> {
    /// Creates a zero-filled vector of `len` bits.
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let wide = BitVector::<u16>::with_len(20);
    /// assert_eq!(wide.unit_count(), 2);
    /// ```
    pub fn with_len(len: usize) -> Self {
        let units = unit::units_for::<U>(len);
        let mut storage = Vec::with_capacity(units);
        storage.resize(units, U::ZERO);
        Self { storage, len }
    }

    /// Creates a vector of `len` bits by copying `units`.
    ///
    /// # Errors
    ///
    /// - [`BitVectorError::UninitializedOperand`] if `units` is empty but
    ///   `len > 0`.
    /// - [`BitVectorError::UnitCountMismatch`] if `units.len()` differs from
    ///   the number of units `len` bits need.
    pub fn from_units(units: &[U], len: usize) -> Result<Self> {
        let expected = unit::units_for::<U>(len);
        if units.is_empty() && len > 0 {
            log::debug!("rejecting empty buffer for a {}-bit vector", len);
            return Err(BitVectorError::UninitializedOperand { len });
        }
        if units.len() != expected {
            log::debug!(
                "rejecting buffer of {} units for a {}-bit vector (needs {})",
                units.len(),
                len,
                expected
            );
            return Err(BitVectorError::UnitCountMismatch {
                expected,
                found: units.len(),
            });
        }
        let mut bits = Self {
            storage: units.to_vec(),
            len,
        };
        bits.clear_spare_bits();
        Ok(bits)
    }

    /// Number of logical bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of storage units backing the vector.
    #[inline]
    pub fn unit_count(&self) -> usize {
        self.storage.len()
    }

    pub fn as_units(&self) -> &[U] {
        &self.storage
    }

    pub fn into_units(self) -> Vec<U> {
        self.storage
    }

    /// Native-endian view of the storage units.
    ///
    /// For `u8` units this is the packed layout itself. For wider units the
    /// byte order follows the host; use [`to_bytes`](Self::to_bytes) for a
    /// portable encoding.
    pub fn as_raw_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.storage)
    }

    /// Big-endian bytes of every storage unit, in unit order.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes().collect()
    }

    fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.storage
            .iter()
            .flat_map(|&u| (0..U::BYTES).map(move |i| u.be_byte(i)))
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(BitVectorError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    fn check_same_len(&self, other: &Self) -> Result<()> {
        if self.len == other.len {
            Ok(())
        } else {
            log::debug!(
                "rejecting operation on vectors of {} and {} bits",
                self.len,
                other.len
            );
            Err(BitVectorError::LengthMismatch {
                left: self.len,
                right: other.len,
            })
        }
    }

    fn check_allocated(&self) -> Result<()> {
        if self.len > 0 && self.storage.is_empty() {
            log::debug!("rejecting unallocated {}-bit operand", self.len);
            Err(BitVectorError::UninitializedOperand { len: self.len })
        } else {
            Ok(())
        }
    }

    /// Caller guarantees `index < self.len`.
    #[inline]
    fn bit(&self, index: usize) -> bool {
        (self.storage[unit::unit_index::<U>(index)] & unit::bit_mask::<U>(index)) != U::ZERO
    }

    fn clear_spare_bits(&mut self) {
        let mask = unit::tail_mask::<U>(self.len);
        if let Some(last) = self.storage.last_mut() {
            *last &= mask;
        }
    }

    /// Returns whether the bit at `index` is set.
    ///
    /// # Errors
    ///
    /// [`BitVectorError::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.bit(index))
    }

    /// Sets the bit at `index`.
    ///
    /// # Errors
    ///
    /// [`BitVectorError::IndexOutOfRange`] if `index >= len`.
    pub fn set_bit(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.storage[unit::unit_index::<U>(index)] |= unit::bit_mask::<U>(index);
        Ok(())
    }

    /// Clears the bit at `index`.
    ///
    /// # Errors
    ///
    /// [`BitVectorError::IndexOutOfRange`] if `index >= len`.
    pub fn clear_bit(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.storage[unit::unit_index::<U>(index)] &= !unit::bit_mask::<U>(index);
        Ok(())
    }

    /// Sets or clears the bit at `index` according to `value`.
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let mut bits = BitVector::new(4);
    /// bits.set_bit_value(1, true).unwrap();
    /// assert_eq!(bits.get(1), Ok(true));
    /// bits.set_bit_value(1, false).unwrap();
    /// assert_eq!(bits.get(1), Ok(false));
    /// assert!(bits.set_bit_value(4, true).is_err());
    /// ```
    pub fn set_bit_value(&mut self, index: usize, value: bool) -> Result<()> {
        if value {
            self.set_bit(index)
        } else {
            self.clear_bit(index)
        }
    }

    /// Flips the bit at `index` and returns its previous value.
    ///
    /// # Errors
    ///
    /// [`BitVectorError::IndexOutOfRange`] if `index >= len`.
    pub fn toggle_bit(&mut self, index: usize) -> Result<bool> {
        let previous = self.get(index)?;
        self.storage[unit::unit_index::<U>(index)] ^= unit::bit_mask::<U>(index);
        Ok(previous)
    }

    /// Returns an assignable handle to the bit at `index`.
    ///
    /// The index is validated when the handle is written through, not here.
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let mut bits = BitVector::new(8);
    /// bits.bit_mut(7).set(true).unwrap();
    /// assert_eq!(bits.dump(), "01");
    /// ```
    pub fn bit_mut(&mut self, index: usize) -> BitRef<'_, U> {
        BitRef::new(self, index)
    }

    /// Sets every logical bit. Spare bits stay zero.
    pub fn set_all(&mut self) {
        self.storage.fill(U::MAX);
        self.clear_spare_bits();
    }

    pub fn clear_all(&mut self) {
        self.storage.fill(U::ZERO);
    }

    /// Copies the bits of `src` into `self`.
    ///
    /// # Errors
    ///
    /// - [`BitVectorError::LengthMismatch`] if the lengths differ.
    /// - [`BitVectorError::UninitializedOperand`] if either side has a nonzero
    ///   length but no storage.
    pub fn assign_from(&mut self, src: &Self) -> Result<()> {
        self.check_same_len(src)?;
        self.check_allocated()?;
        src.check_allocated()?;
        self.storage.copy_from_slice(&src.storage);
        Ok(())
    }

    fn zip_in_place(&mut self, other: &Self, op: impl Fn(U, U) -> U) -> Result<()> {
        self.check_same_len(other)?;
        for (lhs, &rhs) in self.storage.iter_mut().zip(other.storage.iter()) {
            *lhs = op(*lhs, rhs);
        }
        Ok(())
    }

    /// Returns `self & other`.
    ///
    /// # Errors
    ///
    /// [`BitVectorError::LengthMismatch`] if the lengths differ.
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let a = BitVector::from_bytes(&[0xF0], 8).unwrap();
    /// let b = BitVector::from_bytes(&[0x3C], 8).unwrap();
    /// assert_eq!(a.bit_and(&b).unwrap().dump(), "30");
    /// ```
    pub fn bit_and(&self, other: &Self) -> Result<Self> {
        let mut result = self.clone();
        result.in_place_bit_and(other)?;
        Ok(result)
    }

    pub fn in_place_bit_and(&mut self, other: &Self) -> Result<()> {
        self.zip_in_place(other, |a, b| a & b)
    }

    /// Returns `self | other`.
    ///
    /// # Errors
    ///
    /// [`BitVectorError::LengthMismatch`] if the lengths differ.
    pub fn bit_or(&self, other: &Self) -> Result<Self> {
        let mut result = self.clone();
        result.in_place_bit_or(other)?;
        Ok(result)
    }

    pub fn in_place_bit_or(&mut self, other: &Self) -> Result<()> {
        self.zip_in_place(other, |a, b| a | b)
    }

    /// Returns `self ^ other`.
    ///
    /// # Errors
    ///
    /// [`BitVectorError::LengthMismatch`] if the lengths differ.
    pub fn bit_xor(&self, other: &Self) -> Result<Self> {
        let mut result = self.clone();
        result.in_place_bit_xor(other)?;
        Ok(result)
    }

    pub fn in_place_bit_xor(&mut self, other: &Self) -> Result<()> {
        self.zip_in_place(other, |a, b| a ^ b)
    }

    /// Returns the complement of `self`.
    pub fn bit_not(&self) -> Self {
        let mut result = self.clone();
        result.in_place_bit_not();
        result
    }

    pub fn in_place_bit_not(&mut self) {
        for unit in self.storage.iter_mut() {
            *unit = !*unit;
        }
        self.clear_spare_bits();
    }

    /// Adds one to the vector read as an unsigned integer with bit 0 most
    /// significant. The all-ones value rolls over to zero.
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let mut bits = BitVector::from_bytes(&[0xFF, 0xF0], 12).unwrap();
    /// bits.increment();
    /// assert_eq!(bits.dump(), "00 00");
    /// ```
    pub fn increment(&mut self) {
        let mut max = unit::tail_mask::<U>(self.len);
        let mut one = unit::lsb_of_last::<U>(self.len);
        for unit in self.storage.iter_mut().rev() {
            if *unit != max {
                *unit = (*unit).wrapping_add(one);
                return;
            }
            // carry into the next unit, which uses every bit
            *unit = U::ZERO;
            max = U::MAX;
            one = U::ONE;
        }
    }

    /// Subtracts one from the vector read as an unsigned integer. Zero rolls
    /// over to the all-ones value.
    pub fn decrement(&mut self) {
        let mut max = unit::tail_mask::<U>(self.len);
        let mut one = unit::lsb_of_last::<U>(self.len);
        for unit in self.storage.iter_mut().rev() {
            if *unit >= one {
                *unit = (*unit).wrapping_sub(one);
                return;
            }
            // borrow from the next unit
            *unit = max;
            max = U::MAX;
            one = U::ONE;
        }
    }

    /// Logical shift towards bit 0. Bits shifted past bit 0 are discarded and
    /// zeros enter at the end.
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let mut bits = BitVector::from_bytes(&[0x01, 0x80], 16).unwrap();
    /// bits.shift_left(1);
    /// assert_eq!(bits.dump(), "03 00");
    /// bits.shift_left(16);
    /// assert_eq!(bits.dump(), "00 00");
    /// ```
    pub fn shift_left(&mut self, n: usize) {
        if n >= self.len {
            log::trace!("shift left by {} clears {}-bit vector", n, self.len);
            self.clear_all();
            return;
        }
        let units = self.storage.len();
        let whole = n / U::BITS;
        let bits = (n % U::BITS) as u32;

        if whole > 0 {
            self.storage.copy_within(whole.., 0);
            self.storage[units - whole..].fill(U::ZERO);
        }
        if bits > 0 {
            let carry = U::BITS as u32 - bits;
            for i in 0..units - 1 {
                self.storage[i] = (self.storage[i] << bits) | (self.storage[i + 1] >> carry);
            }
            self.storage[units - 1] = self.storage[units - 1] << bits;
        }
        self.clear_spare_bits();
    }

    /// Logical shift away from bit 0. Bits shifted past the end are discarded
    /// and zeros enter at bit 0.
    pub fn shift_right(&mut self, n: usize) {
        if n >= self.len {
            log::trace!("shift right by {} clears {}-bit vector", n, self.len);
            self.clear_all();
            return;
        }
        let units = self.storage.len();
        let whole = n / U::BITS;
        let bits = (n % U::BITS) as u32;

        if whole > 0 {
            self.storage.copy_within(..units - whole, whole);
            self.storage[..whole].fill(U::ZERO);
        }
        if bits > 0 {
            let carry = U::BITS as u32 - bits;
            for i in (1..units).rev() {
                self.storage[i] = (self.storage[i] >> bits) | (self.storage[i - 1] << carry);
            }
            self.storage[0] = self.storage[0] >> bits;
        }
        self.clear_spare_bits();
    }

    pub fn shifted_left(&self, n: usize) -> Self {
        let mut result = self.clone();
        result.shift_left(n);
        result
    }

    pub fn shifted_right(&self, n: usize) -> Self {
        let mut result = self.clone();
        result.shift_right(n);
        result
    }

    /// Orders two vectors of equal length by value.
    ///
    /// # Errors
    ///
    /// [`BitVectorError::LengthMismatch`] if the lengths differ.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering> {
        self.check_same_len(other)?;
        Ok(self.storage.cmp(&other.storage))
    }

    pub fn count_ones(&self) -> usize {
        self.storage.iter().map(|u| u.count_ones() as usize).sum()
    }

    pub fn count_zeros(&self) -> usize {
        self.len - self.count_ones()
    }

    /// Iterates over all bits from bit 0 to bit `len - 1`.
    pub fn iter(&self) -> Iter<'_, U> {
        Iter {
            vector: self,
            index: 0,
        }
    }

    /// Iterates over the indices of set bits in ascending order.
    pub fn iter_ones(&self) -> IterOnes<'_, U> {
        IterOnes {
            vector: self,
            index: 0,
        }
    }

    /// Renders the storage as space-separated, two-digit uppercase hex bytes.
    ///
    /// ```
    /// use bit_vector::BitVector;
    ///
    /// let bits = BitVector::from_bytes(&[0x0A, 0xBC, 0x00], 24).unwrap();
    /// assert_eq!(bits.dump(), "0A BC 00");
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity(self.storage.len() * U::BYTES * 3);
        for (i, byte) in self.bytes().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
            out.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
        }
        out
    }
}

/// Vectors of different lengths are unordered, so every relational operator
/// returns `false` for them. Use [`BitVector::try_cmp`] to surface the
/// mismatch as an error instead.
impl<U: StorageUnit> PartialOrd for BitVector<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.len != other.len {
            return None;
        }
        Some(self.storage.cmp(&other.storage))
    }
}

impl<U: StorageUnit> Default for BitVector<U> {
    fn default() -> Self {
        Self::with_len(0)
    }
}

impl<U: StorageUnit> fmt::Display for BitVector<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

impl<U: StorageUnit> fmt::Debug for BitVector<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitVector")
            .field("len", &self.len)
            .field("storage", &format_args!("[{}]", self.dump()))
            .finish()
    }
}

impl<U: StorageUnit> FromIterator<bool> for BitVector<U> {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut storage = Vec::new();
        let mut len: usize = 0;
        for bit in iter {
            if len.is_multiple_of(U::BITS) {
                storage.push(U::ZERO);
            }
            if bit {
                storage[unit::unit_index::<U>(len)] |= unit::bit_mask::<U>(len);
            }
            len += 1;
        }
        Self { storage, len }
    }
}

impl<'a, U: StorageUnit> IntoIterator for &'a BitVector<U> {
    type Item = bool;
    type IntoIter = Iter<'a, U>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Iter<'a, U: StorageUnit = u8> {
    vector: &'a BitVector<U>,
    index: usize,
}

impl<U: StorageUnit> Iterator for Iter<'_, U> {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.vector.len {
            return None;
        }
        let bit = self.vector.bit(self.index);
        self.index += 1;
        Some(bit)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vector.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<U: StorageUnit> ExactSizeIterator for Iter<'_, U> {}

impl<U: StorageUnit> FusedIterator for Iter<'_, U> {}

pub struct IterOnes<'a, U: StorageUnit = u8> {
    vector: &'a BitVector<U>,
    index: usize,
}

impl<U: StorageUnit> Iterator for IterOnes<'_, U> {
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.vector.len {
            let at_unit_start = self.index.is_multiple_of(U::BITS);
            if at_unit_start && self.vector.storage[unit::unit_index::<U>(self.index)] == U::ZERO {
                self.index += U::BITS;
                continue;
            }
            let index = self.index;
            self.index += 1;
            if self.vector.bit(index) {
                return Some(index);
            }
        }
        None
    }
}

impl<U: StorageUnit> FusedIterator for IterOnes<'_, U> {}
