// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! An immutable, shareable span of bytes with zero-copy slicing.
//!
//! A [`ByteSpan`] is a read-only window onto a reference-counted backing region of
//! bytes, similar to a slice `&[u8]` but with some key differences:
//!
//! * The bytes behind a span are always immutable, so any number of threads may
//!   read from the same span concurrently without synchronization.
//! * A span owns a share of its backing region, so it has no lifetime parameter
//!   and can be stored, sent across threads, and sliced freely.
//!
//! Cloning and slicing are cheap zero-copy operations - they bump a reference
//! count and adjust a window, never duplicating the bytes. The backing region
//! stays alive as long as the longest-lived span referencing it.
//!
//! # Creating Spans
//!
//! Wrap owned storage without copying, or copy explicitly from a borrowed slice:
//!
//! ```
//! use bytespan::ByteSpan;
//!
//! // Wrapping takes ownership of the storage - no copy beyond the initial conversion.
//! let wrapped = ByteSpan::wrap(vec![0_u8, 1, 2, 3]);
//! assert_eq!(wrapped.len(), 4);
//!
//! // Copies are always explicit.
//! let copied = ByteSpan::copied_from_slice(b"Hello");
//!
//! // Text becomes its UTF-8 representation in a new backing region.
//! let text = ByteSpan::from("Hello");
//! assert_eq!(copied, text);
//! ```
//!
//! # Slicing
//!
//! [`slice()`] produces a new span over a sub-range of the current one, sharing
//! the backing region. Bounds are measured against the span being sliced, never
//! against the full backing region, and a violation is reported as an
//! [`OutOfBounds`] error rather than a panic. The [`range()`] and
//! [`range_checked()`] conveniences accept standard range syntax.
//!
//! ```
//! use bytespan::ByteSpan;
//!
//! let span = ByteSpan::wrap(vec![0_u8, 1, 2, 3]);
//!
//! let tail = span.slice(1, 3)?;
//! assert_eq!(tail, &[1, 2, 3]);
//!
//! // Slicing an empty tail is valid...
//! assert_eq!(span.slice(4, 0)?.len(), 0);
//!
//! // ...but reaching past the end is not.
//! assert!(span.slice(4, 1).is_err());
//!
//! // The original span is unaffected by any amount of slicing.
//! assert_eq!(span.len(), 4);
//! # Ok::<(), bytespan::OutOfBounds>(())
//! ```
//!
//! # Consuming Spans
//!
//! * [`as_slice()`] references the visible bytes directly.
//! * [`get()`] reads a single byte by index.
//! * [`iter()`] yields each byte in order; iteration is restartable and holds
//!   no state on the span itself.
//! * [`reader()`] creates an independent [`std::io::Read`] + [`std::io::BufRead`]
//!   cursor over the bytes.
//! * [`write_to()`] performs one bulk write of the bytes into a [`std::io::Write`] sink.
//! * [`to_string_lossy()`] decodes the bytes as UTF-8, substituting U+FFFD for
//!   malformed sequences.
//!
//! ```
//! use std::io::Read;
//!
//! use bytespan::ByteSpan;
//!
//! let span = ByteSpan::from("HelO");
//!
//! let mut decoded = String::new();
//! span.reader().read_to_string(&mut decoded).expect("span is valid UTF-8");
//! assert_eq!(decoded, "HelO");
//!
//! // Every reader is a fresh cursor; the span itself never changes.
//! assert_eq!(span.reader().bytes().count(), 4);
//! ```
//!
//! # Value Semantics
//!
//! Spans compare, order, and hash by content. Two spans over different backing
//! regions are equal whenever their visible bytes are equal, and equal spans
//! hash identically. Ordering is lexicographic byte-wise, with the shorter span
//! sorting first on a common-prefix tie.
//!
//! ```
//! use bytespan::ByteSpan;
//!
//! let from_text = ByteSpan::from("Hello World");
//! let from_parts = ByteSpan::wrap(b"Hello".to_vec());
//!
//! assert_eq!(from_text.range(0..5), from_parts);
//! assert!(from_parts < from_text);
//! ```
//!
//! # Compatibility with the `bytes` Crate
//!
//! The `bytes-compat` feature implements [`bytes::Buf`] for [`ByteSpan`]
//! (consuming narrows the window of the consumed instance, never the contents -
//! clone first to keep the original) and adds [`to_bytes()`], a zero-copy
//! conversion to [`bytes::Bytes`].
//!
//! [`slice()`]: ByteSpan::slice
//! [`range()`]: ByteSpan::range
//! [`range_checked()`]: ByteSpan::range_checked
//! [`as_slice()`]: ByteSpan::as_slice
//! [`get()`]: ByteSpan::get
//! [`iter()`]: ByteSpan::iter
//! [`reader()`]: ByteSpan::reader
//! [`write_to()`]: ByteSpan::write_to
//! [`to_string_lossy()`]: ByteSpan::to_string_lossy
//! [`to_bytes()`]: https://docs.rs/bytespan/latest/bytespan/struct.ByteSpan.html#method.to_bytes
//! [`bytes::Buf`]: https://docs.rs/bytes/latest/bytes/buf/trait.Buf.html
//! [`bytes::Bytes`]: https://docs.rs/bytes/latest/bytes/struct.Bytes.html

#[cfg(feature = "bytes-compat")]
mod bytes_compat;
mod cmp;
mod iter;
mod out_of_bounds;
mod read_adapter;
mod span;

pub use iter::ByteSpanIter;
pub use out_of_bounds::{OutOfBounds, Result};
pub use read_adapter::ByteSpanReader;
pub use span::ByteSpan;
