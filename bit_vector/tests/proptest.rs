// tests/proptest.rs

use bit_vector::{BitVector, BitVectorError, StorageUnit};
use proptest::prelude::*;

fn mask(len: usize) -> u64 {
    if len == 64 { u64::MAX } else { (1u64 << len) - 1 }
}

/// Builds a vector holding `value` as a `len`-bit unsigned integer.
fn from_value<U: StorageUnit>(value: u64, len: usize) -> BitVector<U> {
    (0..len).map(|i| (value >> (len - 1 - i)) & 1 == 1).collect()
}

fn to_value<U: StorageUnit>(bits: &BitVector<U>) -> u64 {
    bits.iter().fold(0, |acc, bit| (acc << 1) | bit as u64)
}

fn len_and_value() -> impl Strategy<Value = (usize, u64)> {
    (1usize..=64).prop_flat_map(|len| (Just(len), any::<u64>().prop_map(move |v| v & mask(len))))
}

fn bit_vector(max_len: usize) -> impl Strategy<Value = BitVector> {
    prop::collection::vec(any::<bool>(), 0..max_len)
        .prop_map(|bits| bits.into_iter().collect::<BitVector>())
}

fn same_len_pair() -> impl Strategy<Value = (BitVector, BitVector)> {
    (0usize..200).prop_flat_map(|len| {
        (
            prop::collection::vec(any::<bool>(), len),
            prop::collection::vec(any::<bool>(), len),
        )
            .prop_map(|(a, b)| {
                (
                    a.into_iter().collect::<BitVector>(),
                    b.into_iter().collect::<BitVector>(),
                )
            })
    })
}

//
// -----------------------------------------------------------------------------
// Single-bit access
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_single_set_bit_is_isolated(len in 1usize..300, pick in any::<prop::sample::Index>()) {
        let index = pick.index(len);
        let mut bits = BitVector::new(len);
        bits.set_bit(index).unwrap();

        for j in 0..len {
            prop_assert_eq!(bits.get(j).unwrap(), j == index);
        }
        prop_assert_eq!(bits.count_ones(), 1);
    }
}

proptest! {
    #[test]
    fn prop_out_of_range_index_is_rejected(len in 0usize..300, past in 0usize..64) {
        let mut bits = BitVector::new(len);
        let index = len + past;
        let expected = BitVectorError::IndexOutOfRange { index, len };

        prop_assert_eq!(bits.get(index), Err(expected.clone()));
        prop_assert_eq!(bits.set_bit(index), Err(expected.clone()));
        prop_assert_eq!(bits.bit_mut(index).set(true), Err(expected));
        prop_assert_eq!(bits, BitVector::new(len));
    }
}

proptest! {
    #[test]
    fn prop_set_all_then_clear_all_is_zero(len in 0usize..300) {
        let mut bits = BitVector::new(len);
        bits.set_all();
        prop_assert_eq!(bits.count_ones(), len);
        bits.clear_all();
        prop_assert_eq!(bits, BitVector::new(len));
    }
}

proptest! {
    #[test]
    fn prop_toggle_twice_is_identity(bits in bit_vector(300), pick in any::<prop::sample::Index>()) {
        prop_assume!(!bits.is_empty());
        let index = pick.index(bits.len());
        let original = bits.get(index).unwrap();
        let mut toggled = bits.clone();

        prop_assert_eq!(toggled.toggle_bit(index), Ok(original));
        prop_assert_eq!(toggled.get(index).unwrap(), !original);
        prop_assert_eq!(toggled.count_ones().abs_diff(bits.count_ones()), 1);

        prop_assert_eq!(toggled.toggle_bit(index), Ok(!original));
        prop_assert_eq!(toggled, bits);
    }
}

//
// -----------------------------------------------------------------------------
// Bitwise Logic
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_double_negation_is_identity(bits in bit_vector(300)) {
        prop_assert_eq!(bits.bit_not().bit_not(), bits.clone());
        prop_assert_eq!(bits.bit_not().count_ones(), bits.count_zeros());
    }
}

proptest! {
    #[test]
    fn prop_self_logic_identities(bits in bit_vector(300)) {
        prop_assert_eq!(&bits & &bits, bits.clone());
        prop_assert_eq!(&bits | &bits, bits.clone());
        prop_assert_eq!(&bits ^ &bits, BitVector::new(bits.len()));
    }
}

proptest! {
    #[test]
    fn prop_bitwise_ops_act_per_bit((a, b) in same_len_pair()) {
        let and = a.bit_and(&b).unwrap();
        let or = a.bit_or(&b).unwrap();
        let xor = a.bit_xor(&b).unwrap();

        for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            prop_assert_eq!(and.get(i).unwrap(), x & y);
            prop_assert_eq!(or.get(i).unwrap(), x | y);
            prop_assert_eq!(xor.get(i).unwrap(), x ^ y);
        }
    }
}

proptest! {
    #[test]
    fn prop_mismatched_lengths_leave_receiver_untouched(a in bit_vector(100), extra in 1usize..50) {
        let b = BitVector::new(a.len() + extra);
        let mut target = a.clone();

        prop_assert!(target.in_place_bit_and(&b).is_err());
        prop_assert!(target.in_place_bit_or(&b).is_err());
        prop_assert!(target.in_place_bit_xor(&b).is_err());
        prop_assert!(target.assign_from(&b).is_err());
        prop_assert_eq!(target, a);
    }
}

//
// -----------------------------------------------------------------------------
// Increment / Decrement
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_increment_matches_integer_model((len, value) in len_and_value()) {
        let mut bits = from_value::<u8>(value, len);
        bits.increment();
        prop_assert_eq!(to_value(&bits), value.wrapping_add(1) & mask(len));

        bits.decrement();
        prop_assert_eq!(to_value(&bits), value);
    }
}

proptest! {
    #[test]
    fn prop_decrement_matches_integer_model((len, value) in len_and_value()) {
        let mut bits = from_value::<u8>(value, len);
        bits.decrement();
        prop_assert_eq!(to_value(&bits), value.wrapping_sub(1) & mask(len));
    }
}

proptest! {
    #[test]
    fn prop_rollover_at_extremes(len in 1usize..300) {
        let mut bits = BitVector::new(len);
        bits.set_all();
        bits.increment();
        prop_assert_eq!(&bits, &BitVector::new(len));

        bits.decrement();
        let mut ones = BitVector::new(len);
        ones.set_all();
        prop_assert_eq!(bits, ones);
    }
}

proptest! {
    #[test]
    fn prop_wide_units_count_like_bytes((len, value) in len_and_value()) {
        let mut narrow = from_value::<u8>(value, len);
        let mut wide = from_value::<u32>(value, len);
        narrow.increment();
        wide.increment();
        prop_assert_eq!(to_value(&narrow), to_value(&wide));

        narrow.decrement();
        narrow.decrement();
        wide.decrement();
        wide.decrement();
        prop_assert_eq!(to_value(&narrow), to_value(&wide));
    }
}

//
// -----------------------------------------------------------------------------
// Shifts
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_shift_left_matches_integer_model((len, value) in len_and_value(), n in 0usize..80) {
        let bits = from_value::<u8>(value, len);
        let expected = if n >= len { 0 } else { (value << n) & mask(len) };
        prop_assert_eq!(to_value(&bits.shifted_left(n)), expected);

        let wide = from_value::<u16>(value, len);
        prop_assert_eq!(to_value(&wide.shifted_left(n)), expected);
    }
}

proptest! {
    #[test]
    fn prop_shift_right_matches_integer_model((len, value) in len_and_value(), n in 0usize..80) {
        let bits = from_value::<u8>(value, len);
        let expected = if n >= len { 0 } else { value >> n };
        prop_assert_eq!(to_value(&bits.shifted_right(n)), expected);

        let wide = from_value::<u64>(value, len);
        prop_assert_eq!(to_value(&wide.shifted_right(n)), expected);
    }
}

proptest! {
    #[test]
    fn prop_shift_past_length_clears(bits in bit_vector(300), extra in 0usize..100) {
        let n = bits.len() + extra;
        prop_assert_eq!(bits.shifted_left(n), BitVector::new(bits.len()));
        prop_assert_eq!(bits.shifted_right(n), BitVector::new(bits.len()));
    }
}

proptest! {
    #[test]
    fn prop_shifts_keep_spare_bits_zero(bits in bit_vector(300), n in 0usize..40) {
        for shifted in [bits.shifted_left(n), bits.shifted_right(n), bits.bit_not()] {
            let restored = BitVector::from_bytes(shifted.as_units(), shifted.len()).unwrap();
            prop_assert_eq!(restored.as_units(), shifted.as_units());
        }
    }
}

//
// -----------------------------------------------------------------------------
// Comparison
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_ordering_matches_integer_model(
        len in 1usize..=64,
        a in any::<u64>(),
        b in any::<u64>(),
    ) {
        let (a, b) = (a & mask(len), b & mask(len));
        let x = from_value::<u8>(a, len);
        let y = from_value::<u8>(b, len);

        prop_assert_eq!(x.partial_cmp(&y), Some(a.cmp(&b)));
        prop_assert_eq!(x.try_cmp(&y).unwrap(), a.cmp(&b));
        prop_assert_eq!(x == y, a == b);
    }
}

proptest! {
    #[test]
    fn prop_different_lengths_never_compare(a in bit_vector(100), extra in 1usize..50) {
        let b = BitVector::new(a.len() + extra);
        prop_assert!(a != b);
        prop_assert!(!(a < b));
        prop_assert!(!(a <= b));
        prop_assert!(!(a > b));
        prop_assert!(!(a >= b));
        prop_assert!(a.try_cmp(&b).is_err());
    }
}

//
// -----------------------------------------------------------------------------
// Dump Format
// -----------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_dump_renders_each_byte(bytes in prop::collection::vec(any::<u8>(), 1..64)) {
        let len = bytes.len() * 8;
        let bits = BitVector::from_bytes(&bytes, len).unwrap();
        let expected: Vec<String> = bytes.iter().map(|b| format!("{:02X}", b)).collect();
        prop_assert_eq!(bits.dump(), expected.join(" "));
    }
}

#[test]
fn dump_scenarios() {
    let mut bits = BitVector::new(8);
    bits.bit_mut(0).set(true).unwrap();
    bits.bit_mut(3).set(true).unwrap();
    assert_eq!(bits.dump(), "90");

    let a = BitVector::from_bytes(&[0xF0], 8).unwrap();
    let b = BitVector::from_bytes(&[0x0F], 8).unwrap();
    assert_eq!((&a | &b).dump(), "FF");
    assert_eq!((&a & &b).dump(), "00");
    assert_eq!((&a ^ &b).dump(), "FF");
}
