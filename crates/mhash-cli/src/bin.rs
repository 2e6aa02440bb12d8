// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use clap::Parser;
use mhash_cli::{Opt, configure_logging};

fn main() {
    // because this function exits right away it does not
    // properly handle destruction of data, so we put the actual
    // logic into a separate function/scope
    std::process::exit(main2())
}

fn main2() -> i32 {
    let mut opt = Opt::parse();
    configure_logging(opt.verbose);

    match opt.run() {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:?}");
            1
        }
    }
}
