#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Error types returned by map construction and bulk extraction.
pub mod error;

mod hash_table;

/// A hash map keyed by `i64`, built on separately chained buckets.
///
/// This module provides [`LongMap`], its iterators, and the key hash
/// function it uses to pick buckets.
pub mod long_map;

pub use error::Error;
pub use error::InvalidArgument;
pub use error::Result;
pub use long_map::LongMap;
pub use long_map::hash_key;
