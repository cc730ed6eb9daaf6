// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Measuring a filter against labeled data.
//!
//! Each sample is an item paired with whether it belongs to the positive class.
//! Positives are inserted into a filter sized for exactly that many items, then
//! every sample is queried and the answers are tallied against the labels.
use log::debug;

use crate::bloom::BloomFilter;
use crate::error::Result;
use crate::hash::Canonical;
use crate::params::Params;

/// Tally of filter answers against ground truth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Confusion {
    /// Positive items reported as present.
    pub true_positives: usize,
    /// Negative items reported as present.
    pub false_positives: usize,
    /// Negative items reported as absent.
    pub true_negatives: usize,
    /// Positive items reported as absent. Zero for a correct filter.
    pub false_negatives: usize,
}

impl Confusion {
    /// Query `filter` for every sample and tally the answers.
    pub fn measure<'a, K, I>(filter: &BloomFilter<K>, samples: I) -> Self
    where
        K: Canonical + ?Sized + 'a,
        I: IntoIterator<Item = (&'a K, bool)>,
    {
        let mut confusion = Self::default();
        for (item, positive) in samples {
            confusion.record(filter.contains(item), positive);
        }
        confusion
    }

    /// Record one answer.
    pub fn record(&mut self, flagged: bool, positive: bool) {
        match (flagged, positive) {
            (true, true) => self.true_positives += 1,
            (true, false) => self.false_positives += 1,
            (false, false) => self.true_negatives += 1,
            (false, true) => self.false_negatives += 1,
        }
    }

    /// Number of samples labeled positive.
    pub fn positives(&self) -> usize {
        self.true_positives + self.false_negatives
    }

    /// Number of samples labeled negative.
    pub fn negatives(&self) -> usize {
        self.false_positives + self.true_negatives
    }

    /// Number of samples recorded.
    pub fn total(&self) -> usize {
        self.positives() + self.negatives()
    }

    /// Number of samples reported as present.
    pub fn flagged(&self) -> usize {
        self.true_positives + self.false_positives
    }

    /// Share of negatives reported as present, or `0` without negatives.
    pub fn false_positive_rate(&self) -> f64 {
        ratio(self.false_positives, self.negatives())
    }

    /// Share of positives reported as absent, or `0` without positives.
    pub fn false_negative_rate(&self) -> f64 {
        ratio(self.false_negatives, self.positives())
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.
    } else {
        part as f64 / whole as f64
    }
}

/// Outcome of [`evaluate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    /// Observed answers.
    pub confusion: Confusion,
    /// Parameters of the filter that was built.
    pub params: Params,
    /// The filter's own estimate of its false positive rate, after inserting
    /// every positive.
    pub expected_false_positive_rate: f64,
}

/// Build a filter from the positive samples at the given target rate, then
/// query it with every sample.
///
/// The filter is sized for the number of positives. With no positives at all
/// it is sized for a single item and stays empty.
pub fn evaluate<'a, K, I>(fp_rate: f64, samples: I) -> Result<Evaluation>
where
    K: Canonical + ?Sized + 'a,
    I: IntoIterator<Item = (&'a K, bool)>,
    I::IntoIter: Clone,
{
    let samples = samples.into_iter();
    let positives = samples.clone().filter(|(_, positive)| *positive).count();
    let params = Params::new(positives.max(1), fp_rate)?;

    let mut filter = BloomFilter::from_params(params);
    filter.insert_all(
        samples
            .clone()
            .filter(|(_, positive)| *positive)
            .map(|(item, _)| item),
    );
    let confusion = Confusion::measure(&filter, samples);

    debug!(
        "evaluated {} samples: {} false positives, {} false negatives",
        confusion.total(),
        confusion.false_positives,
        confusion.false_negatives
    );
    Ok(Evaluation {
        confusion,
        params,
        expected_false_positive_rate: filter.expected_false_positive_rate(),
    })
}
