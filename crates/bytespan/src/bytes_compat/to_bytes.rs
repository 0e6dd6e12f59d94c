// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use bytes::Bytes;
use nm::Event;

use crate::ByteSpan;

impl ByteSpan {
    /// Returns a `bytes::Bytes` that exposes the same byte sequence.
    ///
    /// # Example
    ///
    /// ```
    /// use bytes::Buf;
    /// use bytespan::ByteSpan;
    ///
    /// let span = ByteSpan::copied_from_slice(b"\x12\x34\x56\x78");
    ///
    /// let mut bytes = span.to_bytes();
    ///
    /// // Consume the data using the bytes crate's Buf trait.
    /// assert_eq!(bytes.get_u16(), 0x1234);
    /// assert_eq!(bytes.get_u16(), 0x5678);
    /// assert!(!bytes.has_remaining());
    /// ```
    ///
    /// # Performance
    ///
    /// This operation is zero-copy: the returned `Bytes` holds a clone of the
    /// span as its owner, which keeps the backing region alive without
    /// duplicating any data. The conversion still requires a small dynamic
    /// memory allocation for metadata, so avoiding unnecessary conversions
    /// remains valuable.
    ///
    /// # Why is this not `.into()`?
    ///
    /// We do not allow conversion via `.into()` because the conversion
    /// allocates and crosses into another library's ownership model. The
    /// `.to_bytes()` function must always be explicitly called to make the
    /// conversion more obvious and easier to catch in reviews.
    #[must_use]
    pub fn to_bytes(&self) -> Bytes {
        TO_BYTES_SHARED.with(|x| x.observe(self.len()));

        if self.is_empty() {
            return Bytes::new();
        }

        Bytes::from_owner(self.clone())
    }
}

thread_local! {
    static TO_BYTES_SHARED: Event = Event::builder()
        .name("bytespan_span_to_bytes_shared")
        .build();
}
