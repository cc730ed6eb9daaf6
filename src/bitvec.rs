// Copyright (c) 2020 Helge Wrede, Alexander Schultheiß, Lukas Simon
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Bit vector functionality.
use std::fmt::Debug;

/// Number of bits in one storage word.
const WORD_BITS: usize = u64::BITS as usize;

/// A packed bit vector. Bits can only ever be set, never cleared.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitVec {
    words: Vec<u64>,
    nbits: usize,
}

impl BitVec {
    /// Create a new bit vector of the given length, in bits, with every bit unset.
    pub fn new(nbits: usize) -> Self {
        Self {
            nbits,
            words: vec![0; nbits.div_ceil(WORD_BITS)],
        }
    }

    /// Get the length in bits of the vector.
    pub fn len(&self) -> usize {
        self.nbits
    }

    /// Check whether this vector is empty, ie. has a length of zero.
    pub fn is_empty(&self) -> bool {
        self.nbits == 0
    }

    /// Set a single bit to `1`. Returns `true` if the bit was previously unset.
    pub fn set(&mut self, index: usize) -> bool {
        let (word, mask) = self.locate(index);
        let was_set = self.words[word] & mask == mask;

        self.words[word] |= mask;

        !was_set
    }

    /// Check whether a bit is set.
    pub fn is_set(&self, index: usize) -> bool {
        let (word, mask) = self.locate(index);

        self.words[word] & mask == mask
    }

    fn locate(&self, index: usize) -> (usize, u64) {
        assert!(
            index < self.nbits,
            "index out of bounds: the len is {} but the index is {}",
            self.nbits,
            index,
        );
        (index / WORD_BITS, 1 << (index % WORD_BITS))
    }

    /// Count the number of `1` bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Count the number of `0` bits.
    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }

    /// Return the union of two bit vectors.
    /// This is a bitwise `OR` of two vectors.
    pub fn union(&self, other: &Self) -> Self {
        assert_eq!(
            self.nbits, other.nbits,
            "unable to union bitvecs with different lengths"
        );
        Self {
            words: self
                .words
                .iter()
                .zip(other.words.iter())
                .map(|(a, b)| a | b)
                .collect(),
            nbits: self.nbits,
        }
    }

    /// Return the underlying word storage. Bits past [`BitVec::len`] in the
    /// last word are always zero.
    pub fn as_words(&self) -> &[u64] {
        &self.words
    }
}

impl Debug for BitVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits: String = (0..self.nbits)
            .map(|i| if self.is_set(i) { '1' } else { '0' })
            .collect();
        write!(f, "BitVec({})", bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitvec_with_length() {
        let bitvec = BitVec::new(1);
        assert_eq!(1, bitvec.len());
        assert_eq!(1, bitvec.words.len());

        let bitvec = BitVec::new(64);
        assert_eq!(64, bitvec.len());
        assert_eq!(1, bitvec.words.len());

        let bitvec = BitVec::new(65);
        assert_eq!(65, bitvec.len());
        assert_eq!(2, bitvec.words.len());

        let bitvec = BitVec::new(0);
        assert!(bitvec.is_empty());
        assert!(bitvec.words.is_empty());
    }

    #[test]
    fn set_first_bit_only() {
        let mut bitvec = BitVec::new(3);
        bitvec.set(0);
        assert_eq!(true, bitvec.is_set(0));
        assert_eq!(false, bitvec.is_set(1));
        assert_eq!(false, bitvec.is_set(2));
    }

    #[test]
    fn set_last_bit_only() {
        let mut bitvec = BitVec::new(65);
        bitvec.set(64);
        for i in 0..64 {
            assert_eq!(false, bitvec.is_set(i));
        }
        assert_eq!(true, bitvec.is_set(64));
        assert_eq!(bitvec.as_words(), &[0, 1]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn must_set_with_correct_index() {
        BitVec::new(5).set(5);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn must_get_with_correct_index() {
        // The backing word has room for bit 12, the vector does not.
        BitVec::new(12).is_set(12);
    }

    #[test]
    fn set_is_idempotent() {
        let mut bitvec = BitVec::new(24);

        assert_eq!(true, bitvec.set(7));
        assert_eq!(false, bitvec.set(7));
        assert_eq!(true, bitvec.is_set(7));
        assert_eq!(1, bitvec.count_ones());
    }

    #[test]
    fn set_each_bit_one_by_one() {
        let mut bitvec = BitVec::new(70);
        assert_eq!(0, bitvec.count_ones());
        assert_eq!(70, bitvec.count_zeros());

        for i in 0..70 {
            bitvec.set(i);
            assert_eq!(true, bitvec.is_set(i));
            assert_eq!(i + 1, bitvec.count_ones());
            assert_eq!(70 - i - 1, bitvec.count_zeros());
        }
    }

    #[test]
    fn bitvec_union_test() {
        let mut bitvec_a = BitVec::new(100);
        bitvec_a.set(0);
        bitvec_a.set(3);
        bitvec_a.set(99);

        let mut bitvec_b = BitVec::new(100);
        bitvec_b.set(2);
        bitvec_b.set(3);
        bitvec_b.set(64);

        let bitvec = bitvec_a.union(&bitvec_b);
        assert_eq!(5, bitvec.count_ones());
        assert_eq!(95, bitvec.count_zeros());
        for i in [0, 2, 3, 64, 99] {
            assert_eq!(true, bitvec.is_set(i));
        }
    }

    #[test]
    #[should_panic(expected = "different lengths")]
    fn must_union_with_same_length() {
        BitVec::new(8).union(&BitVec::new(9));
    }

    #[test]
    fn debug_output() {
        let mut bitvec = BitVec::new(5);
        bitvec.set(1);
        bitvec.set(4);

        assert_eq!(format!("{:?}", bitvec), "BitVec(01001)");
    }
}
