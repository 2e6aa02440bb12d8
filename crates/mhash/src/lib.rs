// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

//! Self-describing hash digests.
//!
//! A multihash is `varint(code) || varint(length) || digest`, so a reader
//! can always tell which algorithm produced a digest and how long it is.

mod algorithm;
mod binary;
pub mod code;
mod encoding;
mod error;
mod multihash;
mod provider;
mod registry;
mod sum;
mod varint;

pub use algorithm::{Algorithm, Family, FixedAlgorithm, VariableAlgorithm};
pub use binary::{read_multihash, write_multihash};
pub use encoding::{decode_b58, decode_hex, encode_b58, encode_hex};
pub use error::{Error, Result};
pub use multihash::{DecodedMultihash, Multihash};
pub use provider::{DigestProvider, StandardProvider};
pub use registry::{DigestLength, RegistryEntry, entries, is_registered, lookup, lookup_name};
pub use sum::{sum, sum_reader, sum_with};
pub use varint::{MAX_VARINT_LEN, decode_uint, encode_uint, read_uint, write_uint};
