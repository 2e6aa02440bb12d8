// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use std::io::{BufReader, Write};
use std::path::PathBuf;

use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use mhash::Multihash;

use crate::Encoding;

#[cfg(test)]
#[path = "./cmd_sum_test.rs"]
mod cmd_sum_test;

/// Compute the multihash of files, or of stdin
#[derive(Debug, Args)]
pub struct CmdSum {
    /// The algorithm to hash with (see `mhash algorithms`)
    #[clap(short, long, env = "MHASH_ALGORITHM", default_value = "sha2-256")]
    pub algorithm: String,

    /// Truncate each digest to this many bytes
    #[clap(short, long)]
    pub length: Option<usize>,

    /// The text form used to print results and read --check
    #[clap(
        short,
        long,
        value_enum,
        env = "MHASH_ENCODING",
        default_value_t = Encoding::B58
    )]
    pub encoding: Encoding,

    /// Verify each input against this multihash instead of printing it
    ///
    /// The algorithm and digest length are taken from this value,
    /// and the command fails if any input does not match.
    #[clap(short, long, value_name = "MULTIHASH")]
    pub check: Option<String>,

    /// The files to hash, stdin is read when none are given
    #[clap(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl CmdSum {
    pub fn run(&mut self, out: &mut impl Write) -> Result<i32> {
        let expected = self
            .check
            .as_deref()
            .map(|value| self.encoding.decode(value))
            .transpose()?;
        let (code, length) = match &expected {
            Some(expected) => (expected.code(), Some(expected.digest_length())),
            None => (mhash::lookup_name(&self.algorithm)?.code(), self.length),
        };
        tracing::debug!(code = %format!("{code:#x}"), ?length, "hashing inputs");

        let mut failures = 0;
        if self.files.is_empty() {
            let multihash = mhash::sum_reader(std::io::stdin().lock(), code, length)?;
            failures += self.report(out, "-", &multihash, expected.as_ref())?;
        }
        for path in self.files.iter() {
            let file = std::fs::File::open(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to open {}", path.display()))?;
            let multihash = mhash::sum_reader(BufReader::new(file), code, length)
                .wrap_err_with(|| format!("Failed to hash {}", path.display()))?;
            let name = path.display().to_string();
            failures += self.report(out, &name, &multihash, expected.as_ref())?;
        }

        if failures > 0 {
            tracing::warn!("{failures} input(s) did not match the expected digest");
            return Ok(1);
        }
        Ok(0)
    }

    /// Print one result, returning the number of failed checks
    fn report(
        &self,
        out: &mut impl Write,
        name: &str,
        multihash: &Multihash,
        expected: Option<&Multihash>,
    ) -> Result<usize> {
        let (line, failed) = match expected {
            Some(expected) if expected == multihash => (format!("{name}: OK"), 0),
            Some(_) => (format!("{name}: FAILED"), 1),
            None => (format!("{}  {name}", self.encoding.encode(multihash)), 0),
        };
        writeln!(out, "{line}").into_diagnostic()?;
        Ok(failed)
    }
}
