// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Hash-index derivation.
//!
//! Every round re-hashes the item's canonical bytes salted with the round
//! number, using SipHash-1-3 under a fixed key. Rounds are therefore
//! independent hash functions rather than linear combinations of one or two
//! base hashes, and the indices depend on nothing but the canonical bytes,
//! the round and the bit array length.
use std::borrow::Cow;
use std::hash::Hasher;

use siphasher::sip::SipHasher13;

/// Key used for SipHash.
const HASHER_SEED: [u8; 16] = [
    136, 168, 28, 251, 141, 239, 69, 38, 166, 209, 98, 201, 2, 169, 146, 170,
];

/// Items that can be inserted into a filter.
///
/// The canonical representation is the exact byte string that gets hashed.
/// Implementations must return equal bytes for items that compare equal, and
/// must not depend on the platform or on the process.
pub trait Canonical {
    /// Return the canonical byte representation of this item.
    fn canonical(&self) -> Cow<'_, [u8]>;
}

impl Canonical for str {
    fn canonical(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl Canonical for String {
    fn canonical(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl Canonical for [u8] {
    fn canonical(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl<const N: usize> Canonical for [u8; N] {
    fn canonical(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl Canonical for Vec<u8> {
    fn canonical(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl Canonical for char {
    fn canonical(&self) -> Cow<'_, [u8]> {
        let mut buf = [0; 4];
        Cow::Owned(self.encode_utf8(&mut buf).as_bytes().to_vec())
    }
}

impl<T: Canonical + ?Sized> Canonical for &T {
    fn canonical(&self) -> Cow<'_, [u8]> {
        (**self).canonical()
    }
}

macro_rules! impl_canonical_int {
    ($($t:ty),*) => {
        $(
            impl Canonical for $t {
                fn canonical(&self) -> Cow<'_, [u8]> {
                    Cow::Owned(self.to_le_bytes().to_vec())
                }
            }
        )*
    };
}

impl_canonical_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

// Pointer-sized integers are widened so that 32-bit and 64-bit targets agree.
impl Canonical for usize {
    fn canonical(&self) -> Cow<'_, [u8]> {
        Cow::Owned((*self as u64).to_le_bytes().to_vec())
    }
}

impl Canonical for isize {
    fn canonical(&self) -> Cow<'_, [u8]> {
        Cow::Owned((*self as i64).to_le_bytes().to_vec())
    }
}

/// Raw 64-bit hash of `bytes` for the given round.
pub fn round_hash(bytes: &[u8], round: u32) -> u64 {
    let mut sip = SipHasher13::new_with_key(&HASHER_SEED);

    sip.write(bytes);
    sip.write(&round.to_le_bytes());
    sip.finish()
}

/// Index in `[0, nbits)` of `bytes` for the given round.
///
/// The raw hash is unsigned, so the plain remainder is already non-negative.
pub fn round_index(bytes: &[u8], round: u32, nbits: usize) -> usize {
    debug_assert!(nbits > 0, "bit array must not be empty");
    (round_hash(bytes, round) % nbits as u64) as usize
}

/// Iterator over the `k` indices of one item.
#[derive(Debug, Clone)]
pub struct Indices<'a> {
    bytes: Cow<'a, [u8]>,
    nbits: usize,
    round: u32,
    rounds: u32,
}

impl<'a> Indices<'a> {
    /// Derive `nhashes` indices in `[0, nbits)` for an item.
    pub fn new<K: Canonical + ?Sized>(item: &'a K, nhashes: usize, nbits: usize) -> Self {
        Self {
            bytes: item.canonical(),
            nbits,
            round: 0,
            rounds: u32::try_from(nhashes).unwrap_or(u32::MAX),
        }
    }
}

impl Iterator for Indices<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.round >= self.rounds {
            return None;
        }
        let index = round_index(&self.bytes, self.round, self.nbits);
        self.round += 1;

        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.rounds - self.round) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Indices<'_> {}
