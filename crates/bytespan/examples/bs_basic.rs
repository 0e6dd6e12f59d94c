// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Basics of working with `ByteSpan`.
//!
//! 1. We produce a message and wrap it into a `ByteSpan`.
//! 2. We pass the span around by cheap clone.
//! 3. We consume it through a reader and write it to a sink.

use std::io::Read;

use bytespan::ByteSpan;

fn main() {
    let message = produce_message();

    // Cloning is a zero-copy operation - both handles share one backing region.
    consume_message(message.clone());

    println!("The producer still holds all {} bytes.", message.len());
}

fn produce_message() -> ByteSpan {
    // Our message consists of this many bytes of data.
    const MESSAGE_LEN: usize = 123_456;

    let mut payload = Vec::with_capacity(MESSAGE_LEN);
    payload.extend((0..MESSAGE_LEN).map(|i| (i % 251) as u8));

    // Wrapping hands the storage over; no further copies happen after this point.
    ByteSpan::wrap(payload)
}

fn consume_message(message: ByteSpan) {
    // We read the message and calculate the sum of all the bytes in it.
    let mut sum: u64 = 0;

    for byte in &message {
        sum = sum.saturating_add(u64::from(byte));
    }

    println!("Message received. The sum of all bytes in the message is {sum}.");

    // The same span can be re-read any number of times via independent readers.
    let mut first_16 = [0_u8; 16];
    message
        .reader()
        .read_exact(&mut first_16)
        .expect("the message is longer than 16 bytes");

    println!("The first 16 bytes are {first_16:?}.");

    // And written out in one bulk operation.
    let mut sink = Vec::new();
    message.write_to(&mut sink).expect("writing to a Vec cannot fail");

    println!("Wrote {} bytes to the sink.", sink.len());
}
