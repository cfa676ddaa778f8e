//! # bit_vector
//!
//! A `no_std` compatible, fixed-length bit vector packed MSB-first into
//! storage units.
//!
//! ```rust
//! use bit_vector::BitVector;
//!
//! let a = BitVector::from_bytes(&[0xF0], 8).unwrap();
//! let b = BitVector::from_bytes(&[0x0F], 8).unwrap();
//!
//! assert_eq!((&a | &b).dump(), "FF");
//! assert_eq!((&a & &b).dump(), "00");
//! assert_eq!((&a ^ &b).dump(), "FF");
//! ```
//!
//! ## Counting with rollover
//!
//! ```rust
//! use bit_vector::BitVector;
//!
//! // A 4-bit counter lives in the high nibble of a single byte.
//! let mut counter = BitVector::new(4);
//! for _ in 0..15 {
//!     counter.increment();
//! }
//! assert_eq!(counter.dump(), "F0");
//!
//! counter.increment();
//! assert_eq!(counter.dump(), "00");
//! ```
//!
//! ## Wider storage units
//!
//! ```rust
//! use bit_vector::BitVector;
//!
//! let mut bits = BitVector::<u32>::with_len(40);
//! bits.set_bit(39).unwrap();
//! assert_eq!(bits.as_units(), &[0, 0x0100_0000]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
pub(crate) use std::{string::String, vec::Vec};

#[cfg(not(feature = "std"))]
pub(crate) use alloc::{string::String, vec::Vec};

pub mod error;
pub use error::{BitVectorError, Result};

pub mod unit;
pub use unit::StorageUnit;

pub mod bit_vector;
pub use bit_vector::{BitVector, Iter, IterOnes};

mod bit_ref;
pub use bit_ref::BitRef;

mod ops;
