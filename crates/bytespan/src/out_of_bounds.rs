// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

/// The error returned when a requested offset, length, or index falls outside
/// the bounds of a span.
///
/// Offsets, lengths, and indexes are `usize`, so the negative-value failure
/// modes of the classic bounds contract are unrepresentable. The remaining
/// condition is a range `[offset, offset + length)` that does not fit within
/// the governing bound - the span's length for slicing and indexing, or the
/// backing region's length when wrapping. A failed single-byte read is
/// reported as a range of length 1.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("range starting at {offset} with length {length} exceeds the {bound} byte bound")]
pub struct OutOfBounds {
    offset: usize,
    length: usize,
    bound: usize,
}

impl OutOfBounds {
    pub(crate) fn new(offset: usize, length: usize, bound: usize) -> Self {
        Self { offset, length, bound }
    }

    /// The offset (or index) that was requested.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The length that was requested.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// The bound the request was measured against.
    #[must_use]
    pub fn bound(&self) -> usize {
        self.bound
    }
}

/// A `Result` that may contain an [`OutOfBounds`] error.
pub type Result<T> = std::result::Result<T, OutOfBounds>;

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(OutOfBounds: Send, Sync, std::error::Error);

    #[test]
    fn reports_requested_range_and_bound() {
        let err = OutOfBounds::new(4, 1, 4);

        assert_eq!(err.offset(), 4);
        assert_eq!(err.length(), 1);
        assert_eq!(err.bound(), 4);

        assert_eq!(err.to_string(), "range starting at 4 with length 1 exceeds the 4 byte bound");
    }
}
