// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

//! Errors reported by this crate.

use std::io;

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Diagnostic, Debug, Error)]
pub enum Error {
    /// The code is not part of any registered algorithm or family range
    #[error("unknown multihash algorithm code {0:#x}")]
    #[diagnostic(code(mhash::unknown_algorithm))]
    UnknownAlgorithm(u64),
    #[error("unknown multihash algorithm name '{0}'")]
    #[diagnostic(
        code(mhash::unknown_algorithm),
        help("run `mhash algorithms` for the list of supported names")
    )]
    UnknownAlgorithmName(String),
    /// The code is registered but nothing is available to compute it
    #[error("no digest implementation for {name} ({code:#x})")]
    #[diagnostic(code(mhash::unsupported_algorithm))]
    UnsupportedAlgorithm { code: u64, name: String },
    #[error("invalid digest length {requested} for {name}, {reason}")]
    #[diagnostic(code(mhash::invalid_length))]
    InvalidLength {
        name: String,
        requested: usize,
        reason: String,
    },

    #[error("malformed varint in multihash header")]
    #[diagnostic(code(mhash::malformed_varint))]
    MalformedVarint(#[source] unsigned_varint::decode::Error),
    #[error("truncated multihash, header declares {expected} digest bytes but only {found} remain")]
    #[diagnostic(code(mhash::truncated_input))]
    TruncatedInput { expected: u64, found: usize },
    #[error("multihash is followed by {0} trailing bytes")]
    #[diagnostic(code(mhash::trailing_data))]
    TrailingData(usize),

    #[error("invalid hex encoded multihash")]
    #[diagnostic(code(mhash::invalid_hex))]
    InvalidHex(#[source] data_encoding::DecodeError),
    #[error("invalid base58 encoded multihash")]
    #[diagnostic(code(mhash::invalid_base58))]
    InvalidBase58(#[source] bs58::decode::Error),

    #[error("Encoding read error")]
    EncodingReadError(#[source] io::Error),
    #[error("Encoding write error")]
    EncodingWriteError(#[source] io::Error),
}

impl Error {
    pub(crate) fn unsupported(algorithm: crate::Algorithm) -> Self {
        Self::UnsupportedAlgorithm {
            code: algorithm.code(),
            name: algorithm.to_string(),
        }
    }
}
