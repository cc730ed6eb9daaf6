// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! A fixed-capacity Bloom filter.
//!
//! The bit array length `m` and the number of hash rounds `k` are chosen once,
//! at construction, from the expected number of items and the target false
//! positive rate, and never change afterwards. Inserting more items than the
//! filter was sized for is allowed: nothing is ever rehashed, so an inserted
//! item is always reported as present, but the false positive rate grows past
//! the target. [`BloomFilter::expected_false_positive_rate`] tracks that growth.
use std::marker::PhantomData;

use log::{debug, warn};

use crate::bitvec::BitVec;
use crate::error::{Error, Result};
use crate::hash::{Canonical, Indices};
use crate::params::{self, Params, DEFAULT_FALSE_POSITIVE_RATE};

/// A Bloom filter that keeps track of items of type `K`.
#[derive(Debug)]
pub struct BloomFilter<K: ?Sized> {
    bits: BitVec,
    params: Params,
    count: usize,
    key: PhantomData<fn(&K)>,
}

impl<K: Canonical + ?Sized> BloomFilter<K> {
    /// Return a new Bloom filter sized for `capacity` items at the given false
    /// positive rate.
    ///
    /// Fails if `capacity` is zero or `fp_rate` is not strictly between `0` and `1`.
    pub fn new(capacity: usize, fp_rate: f64) -> Result<Self> {
        Params::new(capacity, fp_rate).map(Self::from_params)
    }

    /// Return a new Bloom filter with a given approximate item capacity.
    /// The false positive rate is [`DEFAULT_FALSE_POSITIVE_RATE`].
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::new(capacity, DEFAULT_FALSE_POSITIVE_RATE)
    }

    /// Return a new, empty Bloom filter from already validated parameters.
    pub fn from_params(params: Params) -> Self {
        debug!(
            "bloom filter: {} bits, {} hashes for {} items at rate {}",
            params.bits(),
            params.hashes(),
            params.capacity(),
            params.fp_rate()
        );
        Self {
            bits: BitVec::new(params.bits()),
            params,
            count: 0,
            key: PhantomData,
        }
    }

    /// Add an item to the filter.
    ///
    /// Inserting the same item again sets no new bits, but still counts as an
    /// insertion for [`BloomFilter::len`] and the false positive estimate.
    pub fn insert(&mut self, item: &K) {
        for index in self.indices(item) {
            self.bits.set(index);
        }
        self.count += 1;

        if self.count - 1 == self.params.capacity() {
            warn!(
                "bloom filter over capacity: {} items inserted into a filter sized for {}",
                self.count,
                self.params.capacity()
            );
        }
    }

    /// Add every item of an iterator to the filter.
    pub fn insert_all<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a K>,
        K: 'a,
    {
        for item in items {
            self.insert(item);
        }
    }

    /// Return whether or not a given item is likely in the filter. There is a
    /// possibility for a false positive with the probability given by
    /// [`BloomFilter::expected_false_positive_rate`], but a false negative will
    /// never occur.
    pub fn contains(&self, item: &K) -> bool {
        self.indices(item).all(|index| self.bits.is_set(index))
    }

    /// Analytic false positive probability `(1 - e^(-kn/m))^k` given the
    /// current number of insertions `n`.
    pub fn expected_false_positive_rate(&self) -> f64 {
        params::false_positive_rate(self.bits.len(), self.params.hashes(), self.count)
    }

    /// Number of bits in this filter (`m`).
    pub fn bits(&self) -> usize {
        self.bits.len()
    }

    /// Number of hash rounds used (`k`).
    pub fn hashes(&self) -> usize {
        self.params.hashes()
    }

    /// Number of insertions performed, duplicates included (`n`).
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether nothing was inserted yet.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of items the filter was sized for.
    pub fn capacity(&self) -> usize {
        self.params.capacity()
    }

    /// False positive rate the filter was sized for.
    pub fn target_error_rate(&self) -> f64 {
        self.params.fp_rate()
    }

    /// Parameters this filter was built from.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Whether more items were inserted than the filter was sized for.
    pub fn is_over_capacity(&self) -> bool {
        self.count > self.params.capacity()
    }

    /// Fraction of bits that are set.
    pub fn fill_ratio(&self) -> f64 {
        self.bits.count_ones() as f64 / self.bits.len() as f64
    }

    /// Approximate number of distinct items in the filter, estimated from the
    /// number of set bits. Returns `usize::MAX` once every bit is set.
    pub fn estimated_distinct(&self) -> usize {
        let nbits = self.bits.len() as f64;
        let nbits_set = self.bits.count_ones() as f64;
        let nhashes = self.params.hashes() as f64;
        let count = -(nbits / nhashes) * (1. - (nbits_set / nbits)).ln();

        // Float to int casts saturate, so an infinite estimate maps to `usize::MAX`.
        count.round() as usize
    }

    /// Compute the union of two Bloom filters. Both filters must have been
    /// built with the same parameters. The result counts the insertions of both.
    pub fn union(&self, other: &Self) -> Result<Self> {
        if !self.is_comparable(other) {
            return Err(Error::Incompatible {
                left_bits: self.bits(),
                left_hashes: self.hashes(),
                right_bits: other.bits(),
                right_hashes: other.hashes(),
            });
        }
        Ok(Self {
            bits: self.bits.union(&other.bits),
            params: self.params,
            count: self.count.saturating_add(other.count),
            key: PhantomData,
        })
    }

    /// Check whether two filters can be unioned.
    pub fn is_comparable(&self, other: &Self) -> bool {
        self.params.hashes() == other.params.hashes() && self.bits.len() == other.bits.len()
    }

    /// Return the underlying word storage.
    pub fn as_words(&self) -> &[u64] {
        self.bits.as_words()
    }

    fn indices<'a>(&self, item: &'a K) -> Indices<'a> {
        Indices::new(item, self.params.hashes(), self.bits.len())
    }
}

impl<K: Canonical + ?Sized> Default for BloomFilter<K> {
    fn default() -> Self {
        Self::from_params(Params::default())
    }
}

impl<'a, K: Canonical + ?Sized + 'a> Extend<&'a K> for BloomFilter<K> {
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}

impl<K: ?Sized> Clone for BloomFilter<K> {
    fn clone(&self) -> Self {
        Self {
            bits: self.bits.clone(),
            params: self.params,
            count: self.count,
            key: PhantomData,
        }
    }
}

impl<K: ?Sized> PartialEq for BloomFilter<K> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits && self.params == other.params && self.count == other.count
    }
}
