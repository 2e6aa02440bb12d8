// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use std::io::{Read, Write};

use crate::{Error, Multihash, Result, varint};

#[cfg(test)]
#[path = "./binary_test.rs"]
mod binary_test;

/// Write a multihash to the given binary stream.
pub fn write_multihash(mut writer: impl Write, multihash: &Multihash) -> Result<()> {
    writer
        .write_all(multihash.as_bytes())
        .map_err(Error::EncodingWriteError)
}

/// Read one multihash from the given binary stream.
///
/// Exactly the bytes of one multihash are consumed, so that
/// consecutive values can be read back one after another.
pub fn read_multihash(mut reader: impl Read) -> Result<Multihash> {
    let code = varint::read_uint(&mut reader)?;
    let length = varint::read_uint(&mut reader)?;
    let expected = usize::try_from(length).map_err(|_| Error::TruncatedInput {
        expected: length,
        found: 0,
    })?;

    let mut digest = Vec::with_capacity(expected.min(4096));
    let found = reader
        .by_ref()
        .take(length)
        .read_to_end(&mut digest)
        .map_err(Error::EncodingReadError)?;
    if found < expected {
        return Err(Error::TruncatedInput { expected: length, found });
    }
    Ok(Multihash::from_parts(code, &digest))
}

impl Multihash {
    /// Write this multihash in binary format.
    pub fn encode(&self, writer: &mut impl Write) -> Result<()> {
        write_multihash(writer, self)
    }

    /// Read a previously encoded multihash from the given binary stream.
    pub fn decode_from(reader: &mut impl Read) -> Result<Self> {
        read_multihash(reader)
    }
}

