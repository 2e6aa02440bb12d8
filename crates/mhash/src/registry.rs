// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

//! The table of every algorithm code that this crate understands.
//!
//! The table is built once on first use and never modified afterwards,
//! so lookups are safe from any number of threads.

use std::collections::BTreeMap;
use std::str::FromStr;

use once_cell::sync::Lazy;
use strum::IntoEnumIterator;

use crate::{Algorithm, Error, Family, FixedAlgorithm, Result};

#[cfg(test)]
#[path = "./registry_test.rs"]
mod registry_test;

static REGISTRY: Lazy<BTreeMap<u64, RegistryEntry>> = Lazy::new(build_registry);

/// The digest length recorded for a registered algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestLength {
    /// Always exactly this many bytes
    Fixed(usize),
    /// The same length as the hashed input
    Variable,
}

/// A single registered algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    algorithm: Algorithm,
    name: String,
}

impl RegistryEntry {
    fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            name: algorithm.to_string(),
        }
    }

    pub fn code(&self) -> u64 {
        self.algorithm.code()
    }

    /// The canonical display name, eg: `sha2-256` or `blake2b-384`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn length(&self) -> DigestLength {
        match self.algorithm.length() {
            Some(length) => DigestLength::Fixed(length),
            None => DigestLength::Variable,
        }
    }
}

fn build_registry() -> BTreeMap<u64, RegistryEntry> {
    let fixed = FixedAlgorithm::iter().map(Algorithm::Fixed);
    let variable = Family::iter()
        .flat_map(Family::members)
        .map(Algorithm::Variable);
    fixed
        .chain(variable)
        .map(|algorithm| (algorithm.code(), RegistryEntry::new(algorithm)))
        .collect()
}

/// Find the registered entry for a code.
///
/// Codes inside a family block resolve to the member with the
/// matching output length, whether or not a digest implementation
/// exists for that length.
///
/// ```
/// let entry = mhash::lookup(mhash::code::BLAKE2B_MAX - 16).unwrap();
/// assert_eq!(entry.name(), "blake2b-384");
/// assert_eq!(entry.length(), mhash::DigestLength::Fixed(48));
/// ```
pub fn lookup(code: u64) -> Result<&'static RegistryEntry> {
    REGISTRY.get(&code).ok_or(Error::UnknownAlgorithm(code))
}

/// Find the registered entry for a canonical name or alias.
///
/// Names are resolved with [`Algorithm::from_str`], so the accepted
/// aliases are exactly the ones declared on [`FixedAlgorithm`].
pub fn lookup_name(name: &str) -> Result<&'static RegistryEntry> {
    let algorithm = Algorithm::from_str(name)?;
    REGISTRY
        .get(&algorithm.code())
        .ok_or_else(|| Error::UnknownAlgorithmName(name.to_owned()))
}

/// Iterate all registered entries in code order.
pub fn entries() -> impl Iterator<Item = &'static RegistryEntry> {
    REGISTRY.values()
}

/// True if the code belongs to a registered algorithm
pub fn is_registered(code: u64) -> bool {
    REGISTRY.contains_key(&code)
}
