// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

//! Numeric algorithm identifiers as they appear in an encoded multihash.
//!
//! The variable-length families reserve one code per output byte length,
//! counting down from `*_MAX` (the longest output). `FAMILY_MAX - k` always
//! names an output that is `k` bytes shorter than the family maximum.

pub const ID: u64 = 0x00;
pub const SHA1: u64 = 0x11;
pub const SHA2_256: u64 = 0x12;
pub const SHA2_512: u64 = 0x13;
pub const SHA3_512: u64 = 0x14;
pub const SHA3_384: u64 = 0x15;
pub const SHA3_256: u64 = 0x16;
pub const SHA3_224: u64 = 0x17;
/// Generic sha3, an alias of [`SHA3_512`]
pub const SHA3: u64 = SHA3_512;
pub const SHAKE_128: u64 = 0x18;
pub const SHAKE_256: u64 = 0x19;
pub const KECCAK_224: u64 = 0x1a;
pub const KECCAK_256: u64 = 0x1b;
pub const KECCAK_384: u64 = 0x1c;
pub const KECCAK_512: u64 = 0x1d;
pub const MURMUR3: u64 = 0x22;
pub const DBL_SHA2_256: u64 = 0x56;

pub const BLAKE2B_MIN: u64 = 0xb201;
pub const BLAKE2B_MAX: u64 = 0xb240;
pub const BLAKE2S_MIN: u64 = 0xb241;
pub const BLAKE2S_MAX: u64 = 0xb260;

pub const SKEIN256_MIN: u64 = 0xb301;
pub const SKEIN256_MAX: u64 = 0xb320;
pub const SKEIN512_MIN: u64 = 0xb321;
pub const SKEIN512_MAX: u64 = 0xb360;
pub const SKEIN1024_MIN: u64 = 0xb361;
pub const SKEIN1024_MAX: u64 = 0xb3e0;
