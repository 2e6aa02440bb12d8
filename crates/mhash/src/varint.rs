// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use std::io::{self, Read, Write};

use unsigned_varint::{decode, encode};

use crate::{Error, Result};

#[cfg(test)]
#[path = "./varint_test.rs"]
mod varint_test;

/// The most bytes that a single encoded u64 can occupy
pub const MAX_VARINT_LEN: usize = 10;

const CONTINUATION_BIT: u8 = 0x80;

/// Encode an unsigned integer in its minimal varint form.
///
/// ```
/// assert_eq!(mhash::encode_uint(0xb240), vec![0xc0, 0xe4, 0x02]);
/// ```
pub fn encode_uint(value: u64) -> Vec<u8> {
    let mut buf = encode::u64_buffer();
    encode::u64(value, &mut buf).to_vec()
}

/// Decode the varint at the start of `bytes`.
///
/// Returns the decoded value and the number of bytes that it occupied.
pub fn decode_uint(bytes: &[u8]) -> Result<(u64, usize)> {
    let (value, remaining) = decode::u64(bytes).map_err(Error::MalformedVarint)?;
    Ok((value, bytes.len() - remaining.len()))
}

/// Write a varint to the given binary stream.
pub fn write_uint(mut writer: impl Write, value: u64) -> Result<()> {
    let mut buf = encode::u64_buffer();
    writer
        .write_all(encode::u64(value, &mut buf))
        .map_err(Error::EncodingWriteError)
}

/// Read a varint from the given binary stream.
///
/// A stream that ends before the first byte is a read error,
/// a stream that ends part way through the varint is malformed.
pub fn read_uint(mut reader: impl Read) -> Result<u64> {
    let mut buf = Vec::with_capacity(MAX_VARINT_LEN);
    while buf.len() < MAX_VARINT_LEN {
        let mut byte = [0; 1];
        match reader.read_exact(&mut byte) {
            Ok(()) => buf.push(byte[0]),
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof && !buf.is_empty() => {
                return Err(Error::MalformedVarint(decode::Error::Insufficient));
            }
            Err(err) => return Err(Error::EncodingReadError(err)),
        }
        if byte[0] & CONTINUATION_BIT == 0 {
            let (value, _) = decode_uint(&buf)?;
            return Ok(value);
        }
    }
    Err(Error::MalformedVarint(decode::Error::Overflow))
}
