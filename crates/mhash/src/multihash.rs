// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, encoding, registry, varint};

#[cfg(test)]
#[path = "./multihash_test.rs"]
mod multihash_test;

/// A self-describing digest: the algorithm code, the
/// digest length and the digest bytes, in one buffer.
///
/// The buffer always holds exactly
/// `varint(code) || varint(length) || digest[length]`.
/// Two multihashes are equal when their encoded bytes are equal.
#[derive(Clone)]
pub struct Multihash {
    bytes: Vec<u8>,
    code: u64,
    digest_offset: usize,
}

/// The individual fields of an encoded [`Multihash`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedMultihash<'a> {
    pub code: u64,
    /// The registered name of the code, if it is known
    pub name: Option<&'a str>,
    pub length: usize,
    pub digest: &'a [u8],
}

impl Multihash {
    /// Build the multihash for a digest that was computed elsewhere.
    ///
    /// The code must be registered, but the digest is taken as given.
    pub fn wrap(code: u64, digest: &[u8]) -> Result<Self> {
        registry::lookup(code)?;
        Ok(Self::from_parts(code, digest))
    }

    pub(crate) fn from_parts(code: u64, digest: &[u8]) -> Self {
        let mut bytes = varint::encode_uint(code);
        bytes.extend(varint::encode_uint(digest.len() as u64));
        let digest_offset = bytes.len();
        bytes.extend_from_slice(digest);
        Self {
            bytes,
            code,
            digest_offset,
        }
    }

    /// Parse and validate an encoded multihash.
    ///
    /// The code does not need to be registered, only the
    /// framing is checked.
    ///
    /// ```
    /// let mh = mhash::Multihash::from_bytes(&[0x00, 0x03, b'f', b'o', b'o']).unwrap();
    /// assert_eq!(mh.code(), mhash::code::ID);
    /// assert_eq!(mh.digest(), b"foo");
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (code, code_len) = varint::decode_uint(bytes)?;
        let (length, length_len) = varint::decode_uint(&bytes[code_len..])?;
        let digest_offset = code_len + length_len;
        let found = bytes.len() - digest_offset;
        match usize::try_from(length) {
            Ok(length) if length == found => Ok(Self {
                bytes: bytes.to_vec(),
                code,
                digest_offset,
            }),
            Ok(length) if length < found => Err(Error::TrailingData(found - length)),
            _ => Err(Error::TruncatedInput {
                expected: length,
                found,
            }),
        }
    }

    /// Parse a hex encoded multihash (case-insensitive).
    pub fn from_hex(source: impl AsRef<str>) -> Result<Self> {
        Self::from_bytes(&encoding::decode_hex(source.as_ref())?)
    }

    /// Parse a base58 encoded multihash.
    pub fn from_b58(source: impl AsRef<str>) -> Result<Self> {
        Self::from_bytes(&encoding::decode_b58(source.as_ref())?)
    }

    /// The algorithm code, which may not be registered
    pub fn code(&self) -> u64 {
        self.code
    }

    pub fn digest_length(&self) -> usize {
        self.bytes.len() - self.digest_offset
    }

    pub fn digest(&self) -> &[u8] {
        &self.bytes[self.digest_offset..]
    }

    /// Break this multihash into its individual fields
    pub fn decode(&self) -> DecodedMultihash<'_> {
        DecodedMultihash {
            code: self.code,
            name: registry::lookup(self.code).ok().map(|entry| entry.name()),
            length: self.digest_length(),
            digest: self.digest(),
        }
    }

    /// Yields a view of the complete encoded value
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Extract the complete encoded value
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn to_hex(&self) -> String {
        encoding::encode_hex(&self.bytes)
    }

    pub fn to_b58(&self) -> String {
        encoding::encode_b58(&self.bytes)
    }
}

impl PartialEq for Multihash {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Multihash {}

// Implement Hash manually so that it agrees with PartialEq
impl std::hash::Hash for Multihash {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl std::fmt::Debug for Multihash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_string().as_ref())
    }
}

impl Display for Multihash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_b58().as_ref())
    }
}

impl std::str::FromStr for Multihash {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_b58(s)
    }
}

impl AsRef<[u8]> for Multihash {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl TryFrom<&[u8]> for Multihash {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<Vec<u8>> for Multihash {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::from_bytes(&bytes)
    }
}

impl From<Multihash> for Vec<u8> {
    fn from(mh: Multihash) -> Self {
        mh.into_bytes()
    }
}

impl Serialize for Multihash {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_b58().as_ref())
    }
}

impl<'de> Deserialize<'de> for Multihash {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        /// Visits a serialized string, decoding it as a multihash
        struct StringVisitor;

        impl serde::de::Visitor<'_> for StringVisitor {
            type Value = Multihash;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("base58 encoded multihash")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Multihash, E>
            where
                E: serde::de::Error,
            {
                Multihash::from_b58(value).map_err(|_| {
                    serde::de::Error::invalid_value(serde::de::Unexpected::Str(value), &self)
                })
            }
        }
        deserializer.deserialize_str(StringVisitor)
    }
}
