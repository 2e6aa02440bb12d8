// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use std::io::Write;

use clap::Args;
use miette::{IntoDiagnostic, Result};

use crate::Encoding;

#[cfg(test)]
#[path = "./cmd_convert_test.rs"]
mod cmd_convert_test;

/// Re-encode a multihash from one text form to another
#[derive(Debug, Args)]
pub struct CmdConvert {
    #[clap(long, value_enum, default_value_t = Encoding::Hex)]
    pub from: Encoding,

    #[clap(long, value_enum, default_value_t = Encoding::B58)]
    pub to: Encoding,

    /// The multihash to convert
    pub multihash: String,
}

impl CmdConvert {
    pub fn run(&mut self, out: &mut impl Write) -> Result<i32> {
        writeln!(out, "{}", self.convert()?).into_diagnostic()?;
        Ok(0)
    }

    /// The input is fully validated before being written back out.
    pub fn convert(&self) -> mhash::Result<String> {
        let multihash = self.from.decode(&self.multihash)?;
        Ok(self.to.encode(&multihash))
    }
}
