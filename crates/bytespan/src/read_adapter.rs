// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::io::{self, BufRead, Read};

use crate::ByteSpan;

/// Adapter that implements [`Read`] and [`BufRead`] for [`ByteSpan`].
///
/// Create an instance via [`ByteSpan::reader()`][1]. The reader holds a cheap
/// clone of the span together with its own cursor, so reading consumes the
/// reader and nothing else: the originating span is unaffected, and every call
/// to `reader()` starts a fresh pass over the same bytes. End of stream is
/// reached after exactly [`len()`][2] bytes.
///
/// Because a [`ByteSpan`] is already in memory, this adapter implements
/// [`BufRead`] directly without needing an intermediate buffer. Prefer this
/// over wrapping in [`std::io::BufReader`].
///
/// [1]: crate::ByteSpan::reader
/// [2]: crate::ByteSpan::len
#[derive(Clone, Debug)]
pub struct ByteSpanReader {
    span: ByteSpan,
    position: usize,
}

impl ByteSpanReader {
    #[must_use]
    pub(crate) fn new(span: ByteSpan) -> Self {
        Self { span, position: 0 }
    }

    fn remaining(&self) -> &[u8] {
        self.span.as_slice().get(self.position..).unwrap_or(&[])
    }
}

impl Read for ByteSpanReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = self.remaining();
        if remaining.is_empty() {
            return Ok(0);
        }

        let to_read = buf.len().min(remaining.len());
        buf.get_mut(..to_read)
            .expect("guarded by min()")
            .copy_from_slice(remaining.get(..to_read).expect("guarded by min()"));

        self.position = self.position.saturating_add(to_read);
        Ok(to_read)
    }
}

impl BufRead for ByteSpanReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.remaining())
    }

    fn consume(&mut self, amount: usize) {
        self.position = self.position.saturating_add(amount).min(self.span.len());
    }
}
