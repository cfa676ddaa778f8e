use crate::BitVector;
use crate::error::Result;
use crate::unit::StorageUnit;

/// Assignable handle to a single bit of a [`BitVector`], created by
/// [`BitVector::bit_mut`].
///
/// The handle mutably borrows its vector, so it cannot outlive it or be held
/// alongside another handle.
///
/// ```
/// use bit_vector::BitVector;
///
/// let mut bits = BitVector::new(8);
/// let mut first = bits.bit_mut(0);
/// first.set(true).unwrap();
/// assert_eq!(first.get(), Ok(true));
/// assert_eq!(bits.dump(), "80");
/// ```
pub struct BitRef<'a, U: StorageUnit = u8> {
    vector: &'a mut BitVector<U>,
    index: usize,
}

impl<'a, U: StorageUnit> BitRef<'a, U> {
    pub(crate) fn new(vector: &'a mut BitVector<U>, index: usize) -> Self {
        Self { vector, index }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn get(&self) -> Result<bool> {
        self.vector.get(self.index)
    }

    /// Writes `value` to the referenced bit.
    ///
    /// # Errors
    ///
    /// [`BitVectorError::IndexOutOfRange`](crate::BitVectorError::IndexOutOfRange)
    /// if the index is not below the vector's length.
    pub fn set(&mut self, value: bool) -> Result<()> {
        self.vector.set_bit_value(self.index, value)
    }
}

#[cfg(test)]
mod tests {
    use crate::{BitVector, BitVectorError};

    #[test]
    fn writes_go_to_the_owner() -> Result<(), BitVectorError> {
        let mut bits = BitVector::new(16);
        bits.bit_mut(15).set(true)?;
        bits.bit_mut(8).set(true)?;
        assert_eq!(bits.dump(), "00 81");
        bits.bit_mut(15).set(false)?;
        assert_eq!(bits.dump(), "00 80");
        Ok(())
    }

    #[test]
    fn out_of_range_handle_rejects_writes() {
        let mut bits = BitVector::new(4);
        let mut handle = bits.bit_mut(4);
        assert_eq!(handle.index(), 4);
        assert_eq!(
            handle.set(true),
            Err(BitVectorError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert!(handle.get().is_err());
        assert_eq!(bits.dump(), "00");
    }
}
