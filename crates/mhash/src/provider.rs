// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use std::io::Cursor;

use blake2::{Blake2bVar, Blake2sVar};
use digest::{Digest, ExtendableOutput, Update, VariableOutput, XofReader};
use ring::digest::{SHA1_FOR_LEGACY_USE_ONLY, SHA256, SHA512};

use crate::{Algorithm, Error, Family, FixedAlgorithm, Result, VariableAlgorithm};

#[cfg(test)]
#[path = "./provider_test.rs"]
mod provider_test;

/// Family members that are addressable but have no backing implementation
const UNBACKED: &[(Family, usize)] = &[(Family::Blake2b, 62), (Family::Blake2s, 30)];

/// Computes raw digests on behalf of [`crate::sum_with`].
///
/// Implementations must be pure: the same algorithm and input
/// always produce the same bytes.
pub trait DigestProvider {
    /// Compute the full, untruncated digest of `input`.
    ///
    /// Members of a [`Family`] must produce exactly their
    /// configured length. An algorithm that cannot be computed
    /// must be reported as [`Error::UnsupportedAlgorithm`].
    fn compute(&self, algorithm: Algorithm, input: &[u8]) -> Result<Vec<u8>>;
}

impl<T: DigestProvider + ?Sized> DigestProvider for &T {
    fn compute(&self, algorithm: Algorithm, input: &[u8]) -> Result<Vec<u8>> {
        (**self).compute(algorithm, input)
    }
}

/// The default provider, backed by ring for sha1/sha2
/// and the RustCrypto hashes for everything else.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardProvider;

impl DigestProvider for StandardProvider {
    fn compute(&self, algorithm: Algorithm, input: &[u8]) -> Result<Vec<u8>> {
        match algorithm {
            Algorithm::Fixed(fixed) => compute_fixed(fixed, input),
            Algorithm::Variable(variable) => compute_variable(variable, input),
        }
    }
}

fn compute_fixed(algorithm: FixedAlgorithm, input: &[u8]) -> Result<Vec<u8>> {
    let digest = match algorithm {
        FixedAlgorithm::Identity => input.to_vec(),
        FixedAlgorithm::Sha1 => ring_digest(&SHA1_FOR_LEGACY_USE_ONLY, input),
        FixedAlgorithm::Sha2_256 => ring_digest(&SHA256, input),
        FixedAlgorithm::Sha2_512 => ring_digest(&SHA512, input),
        FixedAlgorithm::DoubleSha2_256 => ring_digest(&SHA256, &ring_digest(&SHA256, input)),
        FixedAlgorithm::Sha3_224 => sha3::Sha3_224::digest(input).to_vec(),
        FixedAlgorithm::Sha3_256 => sha3::Sha3_256::digest(input).to_vec(),
        FixedAlgorithm::Sha3_384 => sha3::Sha3_384::digest(input).to_vec(),
        FixedAlgorithm::Sha3_512 => sha3::Sha3_512::digest(input).to_vec(),
        FixedAlgorithm::Keccak224 => sha3::Keccak224::digest(input).to_vec(),
        FixedAlgorithm::Keccak256 => sha3::Keccak256::digest(input).to_vec(),
        FixedAlgorithm::Keccak384 => sha3::Keccak384::digest(input).to_vec(),
        FixedAlgorithm::Keccak512 => sha3::Keccak512::digest(input).to_vec(),
        FixedAlgorithm::Shake128 => extendable::<sha3::Shake128>(input, 32),
        FixedAlgorithm::Shake256 => extendable::<sha3::Shake256>(input, 64),
        FixedAlgorithm::Murmur3_32 => murmur3::murmur3_32(&mut Cursor::new(input), 0)
            .map_err(Error::EncodingReadError)?
            .to_le_bytes()
            .to_vec(),
    };
    Ok(digest)
}

fn ring_digest(algorithm: &'static ring::digest::Algorithm, input: &[u8]) -> Vec<u8> {
    ring::digest::digest(algorithm, input).as_ref().to_vec()
}

/// Read `length` bytes from an extendable output function.
fn extendable<X: Default + Update + ExtendableOutput>(input: &[u8], length: usize) -> Vec<u8> {
    let mut hasher = X::default();
    hasher.update(input);
    let mut out = vec![0; length];
    hasher.finalize_xof().read(&mut out);
    out
}

/// Dispatch a runtime output length to the matching
/// type-level skein output size.
macro_rules! skein {
    ($hasher:ident, $length:expr, $input:expr; $($size:literal)*) => {
        paste::paste! {
            match $length {
                $($size => Some(skein::$hasher::<digest::consts::[<U $size>]>::digest($input).to_vec()),)*
                _ => None,
            }
        }
    };
}

fn compute_variable(algorithm: VariableAlgorithm, input: &[u8]) -> Result<Vec<u8>> {
    let family = algorithm.family();
    let length = algorithm.length();
    if UNBACKED.contains(&(family, length)) {
        return Err(Error::unsupported(algorithm.into()));
    }
    let digest = match family {
        Family::Blake2b => Blake2bVar::new(length)
            .ok()
            .and_then(|hasher| variable_output(hasher, input, length)),
        Family::Blake2s => Blake2sVar::new(length)
            .ok()
            .and_then(|hasher| variable_output(hasher, input, length)),
        Family::Skein256 => skein!(Skein256, length, input;
            1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32
        ),
        Family::Skein512 => skein!(Skein512, length, input;
            1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32
            33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61
            62 63 64
        ),
        Family::Skein1024 => skein!(Skein1024, length, input;
            1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32
            33 34 35 36 37 38 39 40 41 42 43 44 45 46 47 48 49 50 51 52 53 54 55 56 57 58 59 60 61
            62 63 64 65 66 67 68 69 70 71 72 73 74 75 76 77 78 79 80 81 82 83 84 85 86 87 88 89 90
            91 92 93 94 95 96 97 98 99 100 101 102 103 104 105 106 107 108 109 110 111 112 113 114
            115 116 117 118 119 120 121 122 123 124 125 126 127 128
        ),
    };
    digest.ok_or_else(|| Error::unsupported(algorithm.into()))
}

fn variable_output<H: Update + VariableOutput>(
    mut hasher: H,
    input: &[u8],
    length: usize,
) -> Option<Vec<u8>> {
    hasher.update(input);
    let mut out = vec![0; length];
    hasher.finalize_variable(&mut out).ok()?;
    Some(out)
}
