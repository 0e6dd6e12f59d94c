// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Content-based value semantics for [`ByteSpan`].
//!
//! These impls are deliberately explicit rather than derived: the derived forms
//! would compare and hash the backing region and offset, but two spans are the
//! same value whenever their visible bytes are the same, no matter which
//! storage they reference.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::ByteSpan;

impl PartialEq for ByteSpan {
    fn eq(&self, other: &Self) -> bool {
        // We do not care about the backing storage or offsets, only the contents.
        self.as_slice() == other.as_slice()
    }
}

impl Eq for ByteSpan {}

impl PartialEq<[u8]> for ByteSpan {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<&[u8]> for ByteSpan {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_slice() == *other
    }
}

impl PartialEq<ByteSpan> for &[u8] {
    fn eq(&self, other: &ByteSpan) -> bool {
        other.eq(self)
    }
}

impl<const LEN: usize> PartialEq<&[u8; LEN]> for ByteSpan {
    fn eq(&self, other: &&[u8; LEN]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<const LEN: usize> PartialEq<ByteSpan> for &[u8; LEN] {
    fn eq(&self, other: &ByteSpan) -> bool {
        other.eq(self)
    }
}

impl Hash for ByteSpan {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equal contents must hash equally regardless of backing storage or
        // offset, so only the visible bytes (and their count, via the slice
        // impl) participate.
        self.as_slice().hash(state);
    }
}

impl Ord for ByteSpan {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lexicographic over the common prefix; on a full-prefix tie the
        // shorter span sorts first. This is exactly the slice ordering.
        self.as_slice().cmp(other.as_slice())
    }
}

impl PartialOrd for ByteSpan {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(test)]
mod tests {
    use std::hash::DefaultHasher;

    use super::*;

    fn hash_of(span: &ByteSpan) -> u64 {
        let mut hasher = DefaultHasher::new();
        span.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_ignores_backing_and_offset() {
        let from_text = ByteSpan::from("Hello");
        let from_vec = ByteSpan::wrap(b"XXHelloXX".to_vec()).range(2..7);
        let from_copy = ByteSpan::copied_from_slice(b"Hello");

        assert_eq!(from_text, from_vec);
        assert_eq!(from_vec, from_copy);
        assert_eq!(from_text, from_copy);
    }

    #[test]
    fn equality_is_reflexive_symmetric_transitive() {
        let a = ByteSpan::from("abc");
        let b = ByteSpan::copied_from_slice(b"abc");
        let c = ByteSpan::wrap(vec![b'a', b'b', b'c']);

        assert_eq!(a, a);

        assert_eq!(a, b);
        assert_eq!(b, a);

        assert_eq!(b, c);
        assert_eq!(a, c);
    }

    #[test]
    fn unequal_on_length_or_content() {
        let abc = ByteSpan::from("abc");

        assert_ne!(abc, ByteSpan::from("ab"));
        assert_ne!(abc, ByteSpan::from("abd"));
        assert_ne!(abc, ByteSpan::new());
    }

    #[test]
    fn comparisons_against_slices_and_arrays() {
        let span = ByteSpan::from("abc");

        assert_eq!(span, b"abc");
        assert_eq!(span, b"abc".as_slice());
        assert!(b"abc" == span);
        assert!(b"abc".as_slice() == span);
    }

    #[test]
    fn equal_content_hashes_identically() {
        let from_text = ByteSpan::from("Hello");
        let from_slice = ByteSpan::wrap(b"__Hello__".to_vec()).range(2..7);

        assert_eq!(from_text, from_slice);
        assert_eq!(hash_of(&from_text), hash_of(&from_slice));

        assert_eq!(hash_of(&ByteSpan::new()), hash_of(&ByteSpan::copied_from_slice(b"")));
    }

    #[test]
    fn ordering_is_lexicographic() {
        let mut spans = vec![
            ByteSpan::from("b"),
            ByteSpan::from("abc"),
            ByteSpan::from("ab"),
            ByteSpan::new(),
            ByteSpan::from("ba"),
        ];

        spans.sort();

        let sorted: Vec<String> = spans.iter().map(|s| s.to_string_lossy().into_owned()).collect();
        assert_eq!(sorted, vec!["", "ab", "abc", "b", "ba"]);
    }

    #[test]
    fn shorter_sorts_first_on_common_prefix() {
        let short = ByteSpan::from("Hel");
        let long = ByteSpan::from("HelO");

        assert_eq!(short.cmp(&long), Ordering::Less);
        assert_eq!(long.cmp(&short), Ordering::Greater);
    }

    #[test]
    fn ordering_is_consistent_with_equality() {
        let a = ByteSpan::from("same");
        let b = ByteSpan::wrap(b"..same..".to_vec()).range(2..6);
        let c = ByteSpan::from("samf");

        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a, b);

        assert_ne!(a.cmp(&c), Ordering::Equal);
        assert_ne!(a, c);
    }

    #[test]
    fn byte_values_compare_unsigned() {
        // 0x80..0xFF must sort above 0x00..0x7F, as bytes, not as signed values.
        let high = ByteSpan::wrap(vec![0x80_u8]);
        let low = ByteSpan::wrap(vec![0x7F_u8]);

        assert!(low < high);
    }
}
