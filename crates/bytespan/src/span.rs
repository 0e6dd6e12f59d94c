// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};
use std::ops::{Bound, RangeBounds};
use std::sync::{Arc, LazyLock};

use nm::{Event, Magnitude};

use crate::{ByteSpanIter, ByteSpanReader, OutOfBounds, Result};

/// An immutable span of bytes over shared backing storage.
///
/// A span is a window defined by an offset and a length into a reference-counted
/// backing region. The contents are immutable; operations that "modify" a span,
/// such as [`slice()`][Self::slice], return a new span over the same backing
/// region instead. The region stays alive as long as any span references it.
///
/// Cloning is a cheap zero-copy operation.
///
/// To create a `ByteSpan`, use [`wrap()`][Self::wrap],
/// [`copied_from_slice()`][Self::copied_from_slice], or one of the `From`
/// conversions.
#[derive(Clone)]
pub struct ByteSpan {
    /// The backing region. Never written through this handle; clones and
    /// slices of the span reference the same allocation.
    pub(crate) data: Arc<[u8]>,

    /// Start of the visible window within the backing region.
    ///
    /// Invariant: `offset + len <= data.len()`.
    pub(crate) offset: usize,

    /// Number of bytes visible through this span.
    pub(crate) len: usize,
}

impl ByteSpan {
    /// Returns a span over a zero-sized byte sequence.
    ///
    /// All empty spans produced by this function share one canonical
    /// zero-length backing region, so no per-instance allocation occurs.
    #[cfg_attr(test, mutants::skip)] // Generates no-op mutations, not useful.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Arc::clone(&EMPTY_BACKING),
            offset: 0,
            len: 0,
        }
    }

    fn with_parts(data: Arc<[u8]>, offset: usize, len: usize) -> Self {
        debug_assert!(offset.checked_add(len).is_some_and(|end| end <= data.len()));

        // We can use this to fine-tune the bucket boundaries once we have real-world data.
        SPAN_CREATED_LEN.with(|x| x.observe(len));

        Self { data, offset, len }
    }

    /// Creates a `ByteSpan` by copying the contents of a `&[u8]` into a fresh
    /// backing region.
    ///
    /// This is the only constructor that duplicates bytes - wrapping and
    /// slicing never do. Use it when the source storage cannot be handed over,
    /// or to detach from a large backing region.
    #[must_use]
    pub fn copied_from_slice(bytes: &[u8]) -> Self {
        if bytes.is_empty() {
            return Self::new();
        }

        Self::with_parts(Arc::from(bytes), 0, bytes.len())
    }

    /// Creates a span over an entire backing region.
    ///
    /// Handing over an existing `Arc<[u8]>` is zero-copy; owned storage such as
    /// `Vec<u8>` is converted into the shared representation once, after which
    /// all clones and slices share it. The region must not be mutated once
    /// wrapped, which `Arc<[u8]>` storage guarantees by construction.
    ///
    /// # Example
    ///
    /// ```
    /// use bytespan::ByteSpan;
    ///
    /// let span = ByteSpan::wrap(vec![0_u8, 1, 2, 3]);
    ///
    /// assert_eq!(span.len(), 4);
    /// assert_eq!(span, &[0, 1, 2, 3]);
    /// ```
    #[must_use]
    pub fn wrap(region: impl Into<Arc<[u8]>>) -> Self {
        let data = region.into();
        let len = data.len();

        Self::with_parts(data, 0, len)
    }

    /// Creates a span over a sub-range of a backing region.
    ///
    /// Zero-copy, like [`wrap()`][Self::wrap]. This is the only operation whose
    /// bounds are measured against the backing region itself; all later slicing
    /// is measured against the span being sliced.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `offset + length` exceeds the region length.
    pub fn wrap_range(region: impl Into<Arc<[u8]>>, offset: usize, length: usize) -> Result<Self> {
        let data = region.into();

        let end = offset
            .checked_add(length)
            .ok_or_else(|| OutOfBounds::new(offset, length, data.len()))?;

        if end > data.len() {
            return Err(OutOfBounds::new(offset, length, data.len()));
        }

        Ok(Self::with_parts(data, offset, length))
    }

    /// The number of bytes visible through the span.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the span is over a zero-sized byte sequence.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reads the byte at `index` within the span.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `index` is at or beyond [`len()`][Self::len].
    /// The failed request is reported as a range of length 1.
    pub fn get(&self, index: usize) -> Result<u8> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or_else(|| OutOfBounds::new(index, 1, self.len))
    }

    /// Returns a new span covering `length` bytes starting at `offset`,
    /// relative to this span.
    ///
    /// The new span shares the backing region; no bytes are copied and this
    /// span is unaffected. Bounds are measured against this span's
    /// [`len()`][Self::len], never against the backing region, so a slice
    /// cannot reach bytes outside its parent's window. The empty tail
    /// `slice(self.len(), 0)` is valid.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `offset + length` exceeds
    /// [`len()`][Self::len].
    pub fn slice(&self, offset: usize, length: usize) -> Result<Self> {
        let end = offset
            .checked_add(length)
            .ok_or_else(|| OutOfBounds::new(offset, length, self.len))?;

        if end > self.len {
            return Err(OutOfBounds::new(offset, length, self.len));
        }

        // In bounds for the span, therefore in bounds for the backing region.
        Ok(Self::with_parts(Arc::clone(&self.data), self.offset + offset, length))
    }

    /// Returns a sub-span over a range of this span.
    ///
    /// Equivalent to [`slice()`][Self::slice] with standard range syntax.
    ///
    /// # Panics
    ///
    /// Panics if the provided range is outside the bounds of the span.
    #[must_use]
    pub fn range<R>(&self, range: R) -> Self
    where
        R: RangeBounds<usize>,
    {
        self.range_checked(range).expect("provided range out of span bounds")
    }

    /// Returns a sub-span over a range of this span, or `None` if out of bounds.
    #[must_use]
    pub fn range_checked<R>(&self, range: R) -> Option<Self>
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&x) => x,
            Bound::Excluded(&x) => x.checked_add(1)?,
            Bound::Unbounded => 0,
        };

        let length = match range.end_bound() {
            Bound::Included(&x) => x.checked_add(1)?.checked_sub(start)?,
            Bound::Excluded(&x) => x.checked_sub(start)?,
            Bound::Unbounded => self.len.checked_sub(start)?,
        };

        self.slice(start, length).ok()
    }

    /// References the bytes visible through the span.
    ///
    /// This is a read-only window over exactly the span's byte range within the
    /// backing region. An empty span yields an empty slice.
    #[expect(clippy::missing_panics_doc, reason = "only unreachable panics")]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.data
            .get(self.offset..self.offset + self.len)
            .expect("span bounds are validated at construction")
    }

    /// Iterates over the visible bytes in index order.
    ///
    /// The iterator keeps its cursor to itself - the span holds no iteration
    /// state, so any number of passes, sequential or concurrent, observe the
    /// same bytes.
    #[must_use]
    pub fn iter(&self) -> ByteSpanIter<'_> {
        ByteSpanIter::new(self.as_slice())
    }

    /// Creates a sequential reader over the visible bytes.
    ///
    /// Each call returns an independent cursor positioned at the start of the
    /// span. Reading exhausts the cursor, never the span, so the same span can
    /// be re-read any number of times. See [`ByteSpanReader`].
    #[must_use]
    pub fn reader(&self) -> ByteSpanReader {
        ByteSpanReader::new(self.clone())
    }

    /// Writes the visible bytes to `writer` as one bulk write.
    ///
    /// Exactly [`len()`][Self::len] bytes are written, in index order. The span
    /// is immutable and unaffected whether the write succeeds or fails.
    ///
    /// # Errors
    ///
    /// Propagates any error reported by the writer, unchanged.
    pub fn write_to<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        writer.write_all(self.as_slice())
    }

    /// Decodes the visible bytes as UTF-8 text.
    ///
    /// Malformed sequences are replaced with U+FFFD REPLACEMENT CHARACTER, so
    /// decoding is deterministic for every input. Valid UTF-8 is borrowed
    /// without copying.
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_slice())
    }
}

impl Default for ByteSpan {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ByteSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the visible window - the backing region may be much larger.
        f.debug_tuple("ByteSpan").field(&self.as_slice()).finish()
    }
}

impl AsRef<[u8]> for ByteSpan {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl From<Vec<u8>> for ByteSpan {
    fn from(value: Vec<u8>) -> Self {
        Self::wrap(value)
    }
}

impl From<Box<[u8]>> for ByteSpan {
    fn from(value: Box<[u8]>) -> Self {
        Self::wrap(value)
    }
}

impl From<Arc<[u8]>> for ByteSpan {
    fn from(value: Arc<[u8]>) -> Self {
        Self::wrap(value)
    }
}

impl From<&str> for ByteSpan {
    /// UTF-8 encodes the text into a new backing region.
    fn from(value: &str) -> Self {
        Self::copied_from_slice(value.as_bytes())
    }
}

impl From<String> for ByteSpan {
    /// Reuses the string's storage as the backing region.
    fn from(value: String) -> Self {
        Self::wrap(value.into_bytes())
    }
}

static EMPTY_BACKING: LazyLock<Arc<[u8]>> = LazyLock::new(|| Arc::from(b"".as_slice()));

const SPAN_LEN_BUCKETS: &[Magnitude] = &[0, 16, 256, 4096, 65536];

thread_local! {
    static SPAN_CREATED_LEN: Event = Event::builder()
        .name("bytespan_span_created_len")
        .histogram(SPAN_LEN_BUCKETS)
        .build();
}
