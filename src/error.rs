//! Error types for the `long-map` crate

/// Errors produced by [`LongMap`](crate::LongMap) construction and bulk
/// extraction.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A construction parameter was out of range.
    ///
    /// Raised only by
    /// [`LongMap::with_capacity_and_load_factor`](crate::LongMap::with_capacity_and_load_factor);
    /// no table is created.
    #[error("illegal {0}")]
    InvalidArgument(#[from] InvalidArgument),

    /// The live entries do not fit in a single allocation.
    ///
    /// Raised by [`LongMap::keys`](crate::LongMap::keys) and
    /// [`LongMap::values`](crate::LongMap::values) when an exactly sized
    /// output buffer cannot be reserved.
    #[error("cannot collect {len} entries into a single buffer")]
    TooManyEntries {
        /// Number of live entries that were requested.
        len: usize,
    },
}

/// The construction parameter rejected by [`Error::InvalidArgument`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum InvalidArgument {
    /// The requested initial capacity was negative.
    #[error("initial capacity: {0}")]
    Capacity(isize),

    /// The load factor was not a finite, strictly positive number.
    #[error("load factor: {0}")]
    LoadFactor(f32),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
