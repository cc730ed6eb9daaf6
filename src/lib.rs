//! A fixed-capacity implementation of a Bloom filter, a space-efficient
//! probabilistic data structure.
//!
//! # Bloom Filters
//!
//! A Bloom filter is a space-efficient probabilistic data structure that is
//! used to test whether an element is a member of a set. It allows for queries
//! to return: "possibly in set" or "definitely not in set". Elements can be
//! added to the set, but not removed; the more elements that are added to the
//! set, the larger the probability of false positives.
//!
//! The filter is sized at construction from the number of items expected and a
//! target false positive probability `p` (5% by default):
//!
//! * bits per item: `b = -ln(p) / (ln 2)^2`
//! * hash rounds: `k = ceil(-ln(p) / ln 2)`
//! * bit array length: `m = ceil(n * b)`
//!
//! These never change. Inserting past the planned capacity is allowed and
//! never produces a false negative; only the false positive rate grows, as
//! reported by [`BloomFilter::expected_false_positive_rate`].
//!
//! # Hashing
//!
//! Items are hashed through their [`Canonical`] byte representation rather
//! than [`std::hash::Hash`], so the positions an item maps to are identical on
//! every platform and in every process. Round `i` hashes the canonical bytes
//! salted with `i` using SipHash-1-3 under a fixed key, and reduces the result
//! modulo `m`.
//!
//! # Example
//!
//! ```
//! use bloomcheck::BloomFilter;
//!
//! let mut filter = BloomFilter::<str>::new(32, 0.01)?;
//!
//! filter.insert("foo");
//! filter.insert("bar");
//!
//! assert!(filter.contains("foo"));
//! assert!(filter.contains("bar"));
//! assert_eq!(filter.len(), 2);
//! assert!(filter.expected_false_positive_rate() < 0.01);
//! # Ok::<(), bloomcheck::Error>(())
//! ```
#![warn(missing_docs)]
#![allow(clippy::bool_assert_comparison)]

pub mod bitvec;
pub mod bloom;
pub mod error;
pub mod eval;
pub mod hash;
pub mod params;

pub use bloom::BloomFilter;
pub use error::{Error, Result};
pub use eval::{evaluate, Confusion, Evaluation};
pub use hash::Canonical;
pub use params::{Params, DEFAULT_FALSE_POSITIVE_RATE};
