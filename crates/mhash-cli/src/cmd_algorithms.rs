// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use std::io::Write;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use mhash::{Algorithm, DigestLength, Family};
use strum::IntoEnumIterator;

#[cfg(test)]
#[path = "./cmd_algorithms_test.rs"]
mod cmd_algorithms_test;

/// List the supported hash algorithms and their codes
#[derive(Debug, Args)]
pub struct CmdAlgorithms {
    /// List every member of each variable length family
    #[clap(long)]
    pub all: bool,
}

impl CmdAlgorithms {
    pub fn run(&mut self, out: &mut impl Write) -> Result<i32> {
        for line in self.lines() {
            writeln!(out, "{line}").into_diagnostic()?;
        }
        Ok(0)
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for entry in mhash::entries() {
            if matches!(entry.algorithm(), Algorithm::Variable(_)) && !self.all {
                continue;
            }
            let length = match entry.length() {
                DigestLength::Fixed(length) => length.to_string(),
                DigestLength::Variable => "input".to_string(),
            };
            lines.push(format!("{:#08x}  {:<14} {length}", entry.code(), entry.name()));
        }
        if !self.all {
            for family in Family::iter() {
                lines.push(format!(
                    "{:#08x}  {}-8..{}-{} (1..{} bytes)",
                    family.min_code(),
                    family.prefix(),
                    family.prefix(),
                    family.max_len() * 8,
                    family.max_len(),
                ));
            }
        }
        lines
    }
}
