// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

//! Command line interface for computing and inspecting multihashes

mod args;
mod cmd_algorithms;
mod cmd_convert;
mod cmd_inspect;
mod cmd_sum;

use clap::{Parser, Subcommand};
use miette::Result;

pub use args::{Encoding, configure_logging};
pub use cmd_algorithms::CmdAlgorithms;
pub use cmd_convert::CmdConvert;
pub use cmd_inspect::CmdInspect;
pub use cmd_sum::CmdSum;

/// Compute, verify and inspect self-describing hash digests
#[derive(Debug, Parser)]
#[clap(name = "mhash", version)]
pub struct Opt {
    /// Make output more verbose, can be specified more than once
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Sum(CmdSum),
    Inspect(CmdInspect),
    Convert(CmdConvert),
    Algorithms(CmdAlgorithms),
}

impl Opt {
    pub fn run(&mut self) -> Result<i32> {
        let mut out = std::io::stdout().lock();
        match &mut self.cmd {
            Command::Sum(cmd) => cmd.run(&mut out),
            Command::Inspect(cmd) => cmd.run(&mut out),
            Command::Convert(cmd) => cmd.run(&mut out),
            Command::Algorithms(cmd) => cmd.run(&mut out),
        }
    }
}
