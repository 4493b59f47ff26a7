// Copyright (C) Hygon Info Technologies Ltd.
//
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use cert_bench::{
    verify::{openssl::OpenSslVerifier, RootTrustSet},
    Error, Orchestrator,
};
use clap::Parser;
use log::*;

#[derive(Parser, Debug)]
#[command(
    name = "cert-bench",
    version,
    about = "Benchmark certificate chain verification over a line protocol on stdin"
)]
struct Args {
    /// PEM bundle of the trusted root certificates
    roots: PathBuf,

    /// Verification time, in seconds since the Unix epoch
    #[arg(allow_negative_numbers = true)]
    timestamp: i64,
}

fn main_args(args: Args) -> Result<(), Error> {
    let mut roots = RootTrustSet::load(&args.roots)?;
    roots.install_trust();

    if roots.is_empty() {
        warn!("no usable roots in {}", args.roots.display());
    }

    let mut bench = Orchestrator::new(OpenSslVerifier::new(), roots, args.timestamp);
    bench.serve(io::stdin().lock(), io::stdout().lock())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match main_args(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        // The diagnostic is already on stdout.
        Err(Error::Protocol(_)) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
