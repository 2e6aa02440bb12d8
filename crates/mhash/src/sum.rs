// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use std::io::Read;

use crate::registry::{self, DigestLength};
use crate::{Algorithm, DigestProvider, Error, FixedAlgorithm, Multihash, Result, StandardProvider};

#[cfg(test)]
#[path = "./sum_test.rs"]
mod sum_test;

/// Hash `data` with the algorithm named by `code`.
///
/// When `length` is `None` the natural length of the algorithm is
/// used, otherwise the digest is cut down to the first `length` bytes.
/// The identity keeps the data unchanged, so any requested length
/// must match the length of the data.
///
/// ```
/// let mh = mhash::sum(b"foo", mhash::code::SHA1, Some(10)).unwrap();
/// assert_eq!(mh.to_hex(), "110a0beec7b5ea3f0fdbc95d");
/// ```
pub fn sum(data: &[u8], code: u64, length: Option<usize>) -> Result<Multihash> {
    sum_with(&StandardProvider, data, code, length)
}

/// Same as [`sum`], but computing digests with the given provider.
pub fn sum_with<P>(provider: &P, data: &[u8], code: u64, length: Option<usize>) -> Result<Multihash>
where
    P: DigestProvider + ?Sized,
{
    let entry = registry::lookup(code)?;
    let natural = match entry.length() {
        DigestLength::Fixed(natural) => natural,
        DigestLength::Variable => data.len(),
    };
    let length = match length {
        None => natural,
        Some(requested) if requested > natural => {
            return Err(Error::InvalidLength {
                name: entry.name().to_owned(),
                requested,
                reason: format!("must be at most {natural}"),
            });
        }
        Some(requested)
            if requested != natural
                && matches!(entry.algorithm(), Algorithm::Fixed(FixedAlgorithm::Identity)) =>
        {
            return Err(Error::InvalidLength {
                name: entry.name().to_owned(),
                requested,
                reason: format!("must equal the data length {natural}"),
            });
        }
        Some(requested) => requested,
    };

    let mut digest = provider.compute(entry.algorithm(), data)?;
    if digest.len() < length {
        return Err(Error::InvalidLength {
            name: entry.name().to_owned(),
            requested: length,
            reason: format!("only {} bytes were produced", digest.len()),
        });
    }
    digest.truncate(length);
    Ok(Multihash::from_parts(code, &digest))
}

/// Hash everything that can be read from `reader`.
pub fn sum_reader(mut reader: impl Read, code: u64, length: Option<usize>) -> Result<Multihash> {
    let mut data = Vec::new();
    let mut buf = vec![0; 4096];
    loop {
        let count = reader
            .read(buf.as_mut_slice())
            .map_err(Error::EncodingReadError)?;
        if count == 0 {
            break;
        }
        data.extend_from_slice(&buf[..count]);
    }
    sum(&data, code, length)
}
