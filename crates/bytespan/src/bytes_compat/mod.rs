// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Interoperability with the `bytes` crate.

mod buf;
mod to_bytes;
