// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use std::io::Write;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use mhash::Multihash;

use crate::Encoding;

#[cfg(test)]
#[path = "./cmd_inspect_test.rs"]
mod cmd_inspect_test;

/// Print the fields of an encoded multihash
#[derive(Debug, Args)]
pub struct CmdInspect {
    /// The text form of the given multihash
    #[clap(
        short,
        long,
        value_enum,
        env = "MHASH_ENCODING",
        default_value_t = Encoding::B58
    )]
    pub encoding: Encoding,

    /// The multihash to inspect
    pub multihash: String,
}

impl CmdInspect {
    pub fn run(&mut self, out: &mut impl Write) -> Result<i32> {
        let multihash = self.encoding.decode(&self.multihash)?;
        write!(out, "{}", describe(&multihash)).into_diagnostic()?;
        Ok(0)
    }
}

/// Render the decoded fields, one per line.
///
/// Codes that are not registered are still shown, with an unknown name.
pub fn describe(multihash: &Multihash) -> String {
    let decoded = multihash.decode();
    format!(
        "code:   {:#x}\nname:   {}\nlength: {}\ndigest: {}\n",
        decoded.code,
        decoded.name.unwrap_or("unknown"),
        decoded.length,
        mhash::encode_hex(decoded.digest),
    )
}
