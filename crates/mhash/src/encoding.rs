// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

//! Text forms of encoded multihash bytes.

use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};

use crate::{Error, Result};

#[cfg(test)]
#[path = "./encoding_test.rs"]
mod encoding_test;

/// Lower-case hex of the given bytes
pub fn encode_hex(bytes: &[u8]) -> String {
    HEXLOWER.encode(bytes)
}

/// Decode hex in either case.
pub fn decode_hex(source: &str) -> Result<Vec<u8>> {
    HEXLOWER_PERMISSIVE
        .decode(source.as_bytes())
        .map_err(Error::InvalidHex)
}

/// Base58 of the given bytes, using the bitcoin alphabet
/// and no checksum.
///
/// Leading zero bytes are each written as a `1` so that
/// values starting with the identity code survive a round-trip.
pub fn encode_b58(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

pub fn decode_b58(source: &str) -> Result<Vec<u8>> {
    bs58::decode(source)
        .into_vec()
        .map_err(Error::InvalidBase58)
}
