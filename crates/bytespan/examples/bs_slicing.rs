// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Showcases how you can easily and cheaply slice a `ByteSpan` in part or whole.

use bytespan::ByteSpan;

fn main() {
    let hello_world = ByteSpan::from("Hello, world!");

    inspect_bytes(&hello_world);

    // Splitting up a span into sub-spans is a cheap zero-copy operation.
    let hello = hello_world.range(0..5);
    let world = hello_world.range(7..12);

    inspect_bytes(&hello);
    inspect_bytes(&world);

    // Slices of slices keep sharing the same backing region.
    let ell = hello.range(1..4);
    inspect_bytes(&ell);

    // Bounds are measured against the span being sliced, so a sub-span cannot
    // reach back out into its parent's bytes.
    assert!(ell.slice(0, 4).is_err());

    // The empty tail is a valid slice of any span.
    let tail = hello_world.range(13..);
    assert!(tail.is_empty());
}

fn inspect_bytes(bytes: &ByteSpan) {
    println!("{} bytes: {}", bytes.len(), bytes.to_string_lossy());
}
