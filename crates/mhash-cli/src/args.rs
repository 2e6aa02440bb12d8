// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0
// https://github.com/spkenv/spk

use mhash::Multihash;
use tracing_subscriber::prelude::*;

const MHASH_LOG: &str = "MHASH_LOG";

/// The text form used to print and parse multihashes
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Encoding {
    Hex,
    B58,
}

impl Encoding {
    pub fn encode(&self, multihash: &Multihash) -> String {
        match self {
            Self::Hex => multihash.to_hex(),
            Self::B58 => multihash.to_b58(),
        }
    }

    pub fn decode(&self, source: &str) -> mhash::Result<Multihash> {
        match self {
            Self::Hex => Multihash::from_hex(source),
            Self::B58 => Multihash::from_b58(source),
        }
    }
}

pub fn configure_logging(verbosity: u8) {
    let mut config = match verbosity {
        0 => {
            if let Ok(existing) = std::env::var(MHASH_LOG) {
                existing
            } else {
                "mhash=info,warn".to_string()
            }
        }
        1 => "mhash=debug,info".to_string(),
        2 => "mhash=trace,info".to_string(),
        _ => "trace".to_string(),
    };
    if let Ok(overrides) = std::env::var("RUST_LOG") {
        config.push(',');
        config.push_str(&overrides);
    }
    let env_filter = tracing_subscriber::filter::EnvFilter::from(config);
    let stderr_log = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(verbosity > 1)
        .with_writer(std::io::stderr);

    let sub = tracing_subscriber::registry().with(stderr_log.with_filter(env_filter));
    if let Err(err) = tracing::subscriber::set_global_default(sub) {
        eprintln!("WARNING: failed to configure logging: {err}");
    }
}
