// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use bytes::Buf;

use crate::ByteSpan;

impl Buf for ByteSpan {
    #[cfg_attr(test, mutants::skip)] // Trivial forwarder.
    fn remaining(&self) -> usize {
        self.len()
    }

    #[cfg_attr(test, mutants::skip)] // Trivial forwarder.
    fn chunk(&self) -> &[u8] {
        self.as_slice()
    }

    fn advance(&mut self, cnt: usize) {
        assert!(cnt <= self.len, "attempted to advance past end of the span");

        // Only the window moves. The backing region and its contents are
        // untouched, so clones made before consuming still see everything.
        self.offset += cnt;
        self.len -= cnt;
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    #![allow(clippy::arithmetic_side_effects, reason = "This is all fine in test code")]

    use super::*;

    #[test]
    fn buf_compat() {
        let mut span = ByteSpan::wrap(vec![0x44_u8; 100]);

        assert_eq!(Buf::remaining(&span), 100);

        let chunk = Buf::chunk(&span);
        assert_eq!(chunk.len(), 100);
        assert_eq!(chunk, &[0x44; 100]);

        Buf::advance(&mut span, 20);

        let chunk = Buf::chunk(&span);
        assert_eq!(chunk.len(), 80);
        assert_eq!(Buf::remaining(&span), 80);

        Buf::advance(&mut span, 80);

        assert!(!span.has_remaining());
        assert!(Buf::chunk(&span).is_empty());
    }

    #[test]
    fn consuming_a_clone_leaves_the_original_intact() {
        let span = ByteSpan::from("\x12\x34\x56\x78");

        let mut cursor = span.clone();
        assert_eq!(cursor.get_u16(), 0x1234);
        assert_eq!(cursor.get_u16(), 0x5678);
        assert!(!cursor.has_remaining());

        assert_eq!(span.len(), 4);
        assert_eq!(span, b"\x12\x34\x56\x78");
    }

    #[test]
    fn empty_span_is_an_exhausted_buffer() {
        let span = ByteSpan::new();

        assert_eq!(Buf::remaining(&span), 0);
        assert!(Buf::chunk(&span).is_empty());
        assert!(!span.has_remaining());
    }

    #[test]
    #[should_panic]
    fn advance_past_end_is_panic() {
        let mut span = ByteSpan::wrap(vec![0_u8, 1, 2]);

        Buf::advance(&mut span, 4);
    }
}
