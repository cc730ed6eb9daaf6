// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Filter sizing.
//!
//! Given an expected number of items `n` and a target false positive
//! probability `p`, the ideal number of bits per item is
//! `b = -ln(p) / (ln 2)^2` and the ideal number of hash rounds is
//! `k = ceil(-ln(p) / ln 2)`. The bit array holds `m = ceil(n * b)` bits.
use std::f64;

use crate::error::{Error, Result};

/// The default false positive probability value, 5%.
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.05;

/// The default item capacity, used by [`Params::default`].
pub const DEFAULT_CAPACITY: usize = 1 << 20;

/// `ln` squared.
const LN_SQR: f64 = f64::consts::LN_2 * f64::consts::LN_2;

/// Largest bit array we agree to allocate.
const MAX_BITS: f64 = isize::MAX as f64;

/// Validated filter configuration together with its derived `m` and `k`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    capacity: usize,
    fp_rate: f64,
    nbits: usize,
    nhashes: usize,
}

impl Params {
    /// Validate a capacity and target false positive rate and derive the
    /// bit count and hash round count from them.
    ///
    /// Fails with [`Error::InvalidParameter`] if `capacity` is zero, if
    /// `fp_rate` is not strictly between `0` and `1`, or if the resulting
    /// bit array would be too large to allocate.
    pub fn new(capacity: usize, fp_rate: f64) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid("capacity", "must be greater than zero"));
        }
        // Written this way round so that NaN is rejected too.
        if !(fp_rate > 0. && fp_rate < 1.) {
            return Err(Error::invalid(
                "fp_rate",
                format!("must be within (0, 1), got {fp_rate}"),
            ));
        }
        let nbits = ideal_bits(capacity, fp_rate);
        if !nbits.is_finite() || nbits > MAX_BITS {
            return Err(Error::invalid(
                "capacity",
                format!("{capacity} items at rate {fp_rate} need {nbits} bits, which is too many"),
            ));
        }
        Ok(Self::derive(capacity, fp_rate))
    }

    fn derive(capacity: usize, fp_rate: f64) -> Self {
        Self {
            capacity,
            fp_rate,
            nbits: optimal_bits(capacity, fp_rate),
            nhashes: optimal_hashes(fp_rate),
        }
    }

    /// Expected number of insertions the filter was sized for.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Target false positive probability.
    pub fn fp_rate(&self) -> f64 {
        self.fp_rate
    }

    /// Length of the bit array (`m`).
    pub fn bits(&self) -> usize {
        self.nbits
    }

    /// Number of hash rounds per item (`k`).
    pub fn hashes(&self) -> usize {
        self.nhashes
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::derive(DEFAULT_CAPACITY, DEFAULT_FALSE_POSITIVE_RATE)
    }
}

/// Return the ideal number of bits per item for a false positive rate.
pub fn bits_per_element(fp_rate: f64) -> f64 {
    -fp_rate.ln() / LN_SQR
}

fn ideal_bits(capacity: usize, fp_rate: f64) -> f64 {
    (capacity as f64 * bits_per_element(fp_rate)).ceil()
}

/// Return the optimal bit vector size for a Bloom filter given an approximate
/// size and a desired false positive rate. Never less than one bit.
pub fn optimal_bits(capacity: usize, fp_rate: f64) -> usize {
    (ideal_bits(capacity, fp_rate) as usize).max(1)
}

/// Return the optimal number of hash rounds for a desired false positive rate.
/// Never less than one.
///
/// Also called `k`.
pub fn optimal_hashes(fp_rate: f64) -> usize {
    ((-fp_rate.ln() / f64::consts::LN_2).ceil() as usize).max(1)
}

/// Analytic false positive probability `(1 - e^(-kn/m))^k` of a filter with
/// `nbits` bits and `nhashes` rounds after `count` insertions.
pub fn false_positive_rate(nbits: usize, nhashes: usize, count: usize) -> f64 {
    let k = nhashes as f64;
    let exponent = -k * count as f64 / nbits as f64;

    (1. - exponent.exp()).powf(k)
}
