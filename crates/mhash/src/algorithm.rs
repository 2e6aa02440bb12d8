// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use std::fmt::Display;
use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::code;
use crate::{Error, Result};

#[cfg(test)]
#[path = "./algorithm_test.rs"]
mod algorithm_test;

/// A hash algorithm that is identified by exactly one code
/// and (except for the identity) produces one digest length.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum FixedAlgorithm {
    /// The input bytes, unchanged
    #[strum(serialize = "id")]
    Identity,
    #[strum(serialize = "sha1")]
    Sha1,
    #[strum(serialize = "sha2-256")]
    Sha2_256,
    #[strum(serialize = "sha2-512")]
    Sha2_512,
    #[strum(serialize = "sha3-224")]
    Sha3_224,
    #[strum(serialize = "sha3-256")]
    Sha3_256,
    #[strum(serialize = "sha3-384")]
    Sha3_384,
    #[strum(to_string = "sha3-512", serialize = "sha3")]
    Sha3_512,
    #[strum(serialize = "shake-128")]
    Shake128,
    #[strum(serialize = "shake-256")]
    Shake256,
    #[strum(serialize = "keccak-224")]
    Keccak224,
    #[strum(serialize = "keccak-256")]
    Keccak256,
    #[strum(serialize = "keccak-384")]
    Keccak384,
    #[strum(serialize = "keccak-512")]
    Keccak512,
    #[strum(to_string = "murmur3-32", serialize = "murmur3")]
    Murmur3_32,
    /// sha2-256 applied twice
    #[strum(serialize = "dbl-sha2-256")]
    DoubleSha2_256,
}

impl FixedAlgorithm {
    pub const fn code(self) -> u64 {
        match self {
            Self::Identity => code::ID,
            Self::Sha1 => code::SHA1,
            Self::Sha2_256 => code::SHA2_256,
            Self::Sha2_512 => code::SHA2_512,
            Self::Sha3_224 => code::SHA3_224,
            Self::Sha3_256 => code::SHA3_256,
            Self::Sha3_384 => code::SHA3_384,
            Self::Sha3_512 => code::SHA3_512,
            Self::Shake128 => code::SHAKE_128,
            Self::Shake256 => code::SHAKE_256,
            Self::Keccak224 => code::KECCAK_224,
            Self::Keccak256 => code::KECCAK_256,
            Self::Keccak384 => code::KECCAK_384,
            Self::Keccak512 => code::KECCAK_512,
            Self::Murmur3_32 => code::MURMUR3,
            Self::DoubleSha2_256 => code::DBL_SHA2_256,
        }
    }

    /// The number of bytes produced by this algorithm.
    ///
    /// The identity has no fixed length, its digest is always
    /// as long as the input.
    pub const fn length(self) -> Option<usize> {
        match self {
            Self::Identity => None,
            Self::Murmur3_32 => Some(4),
            Self::Sha1 => Some(20),
            Self::Sha3_224 | Self::Keccak224 => Some(28),
            Self::Sha2_256
            | Self::Sha3_256
            | Self::Keccak256
            | Self::Shake128
            | Self::DoubleSha2_256 => Some(32),
            Self::Sha3_384 | Self::Keccak384 => Some(48),
            Self::Sha2_512 | Self::Sha3_512 | Self::Keccak512 | Self::Shake256 => Some(64),
        }
    }

    pub fn from_code(code: u64) -> Option<Self> {
        Self::iter().find(|alg| alg.code() == code)
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// A hash function whose output length is one of its parameters.
///
/// Each family owns a contiguous block of codes, one per
/// supported output length in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter)]
pub enum Family {
    Blake2b,
    Blake2s,
    Skein256,
    Skein512,
    Skein1024,
}

impl Family {
    /// The name prefix shared by all members of this family
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Blake2b => "blake2b",
            Self::Blake2s => "blake2s",
            Self::Skein256 => "skein256",
            Self::Skein512 => "skein512",
            Self::Skein1024 => "skein1024",
        }
    }

    /// The longest output, in bytes, that this family can address
    pub const fn max_len(self) -> usize {
        match self {
            Self::Blake2b => 64,
            Self::Blake2s => 32,
            Self::Skein256 => 32,
            Self::Skein512 => 64,
            Self::Skein1024 => 128,
        }
    }

    /// The code of the longest member of this family
    pub const fn max_code(self) -> u64 {
        match self {
            Self::Blake2b => code::BLAKE2B_MAX,
            Self::Blake2s => code::BLAKE2S_MAX,
            Self::Skein256 => code::SKEIN256_MAX,
            Self::Skein512 => code::SKEIN512_MAX,
            Self::Skein1024 => code::SKEIN1024_MAX,
        }
    }

    /// The code of the shortest (single byte) member of this family
    pub const fn min_code(self) -> u64 {
        self.max_code() - (self.max_len() as u64 - 1)
    }

    /// The member of this family that produces `length` bytes, if any.
    pub fn with_length(self, length: usize) -> Option<VariableAlgorithm> {
        (1..=self.max_len())
            .contains(&length)
            .then_some(VariableAlgorithm {
                family: self,
                length,
            })
    }

    /// Resolve a code within this family's block.
    pub fn member(self, code: u64) -> Option<VariableAlgorithm> {
        if !(self.min_code()..=self.max_code()).contains(&code) {
            return None;
        }
        let trimmed = (self.max_code() - code) as usize;
        self.with_length(self.max_len() - trimmed)
    }

    /// Every member of this family, shortest first
    pub fn members(self) -> impl Iterator<Item = VariableAlgorithm> {
        (1..=self.max_len()).filter_map(move |length| self.with_length(length))
    }
}

/// One member of a [`Family`], with a length that is
/// always within `1..=family.max_len()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableAlgorithm {
    family: Family,
    length: usize,
}

impl VariableAlgorithm {
    pub fn family(&self) -> Family {
        self.family
    }

    /// The number of bytes produced by this algorithm
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn code(&self) -> u64 {
        self.family.max_code() - (self.family.max_len() - self.length) as u64
    }
}

impl Display for VariableAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.family.prefix(), self.length * 8)
    }
}

/// Any algorithm that can be named by a multihash code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    Fixed(FixedAlgorithm),
    Variable(VariableAlgorithm),
}

impl Algorithm {
    /// Resolve a numeric code, returning `None` for codes that fall
    /// outside of every known algorithm and family block.
    pub fn from_code(code: u64) -> Option<Self> {
        if let Some(fixed) = FixedAlgorithm::from_code(code) {
            return Some(Self::Fixed(fixed));
        }
        Family::iter()
            .find_map(|family| family.member(code))
            .map(Self::Variable)
    }

    pub fn code(&self) -> u64 {
        match self {
            Self::Fixed(fixed) => fixed.code(),
            Self::Variable(variable) => variable.code(),
        }
    }

    /// The natural digest length of this algorithm, or `None` when
    /// the length depends on the input (the identity).
    pub fn length(&self) -> Option<usize> {
        match self {
            Self::Fixed(fixed) => fixed.length(),
            Self::Variable(variable) => Some(variable.length()),
        }
    }
}

impl From<FixedAlgorithm> for Algorithm {
    fn from(fixed: FixedAlgorithm) -> Self {
        Self::Fixed(fixed)
    }
}

impl From<VariableAlgorithm> for Algorithm {
    fn from(variable: VariableAlgorithm) -> Self {
        Self::Variable(variable)
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(fixed) => f.write_str(fixed.name()),
            Self::Variable(variable) => variable.fmt(f),
        }
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        if let Ok(fixed) = FixedAlgorithm::from_str(name) {
            return Ok(Self::Fixed(fixed));
        }
        name.rsplit_once('-')
            .and_then(|(prefix, bits)| {
                let family = Family::iter().find(|f| f.prefix() == prefix)?;
                let bits: usize = bits.parse().ok()?;
                if bits % 8 != 0 {
                    return None;
                }
                family.with_length(bits / 8)
            })
            .map(Self::Variable)
            .ok_or_else(|| Error::UnknownAlgorithmName(name.to_owned()))
    }
}
