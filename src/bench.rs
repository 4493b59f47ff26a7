// Copyright (C) Hygon Info Technologies Ltd.
//
// SPDX-License-Identifier: Apache-2.0

//! Benchmark orchestration: turns complete chains into verification calls
//! and reports their outcome.

use crate::{
    codes::ErrorName,
    error::*,
    protocol::{ChainRequest, Session},
    verify::{CertificateUsage, ChainVerifier, RootTrustSet, VerificationResult, VerifyRequest},
};

use codicon::Encoder;
use log::*;
use std::io::{self, BufRead, Write};

/// Runs benchmarks against one verification engine and one set of roots.
pub struct Orchestrator<V> {
    verifier: V,
    roots: RootTrustSet,
    timestamp: i64,
    usage: CertificateUsage,
}

impl<V: ChainVerifier> Orchestrator<V> {
    /// Chains are verified for TLS server authentication at `timestamp`
    /// (seconds since the Unix epoch).
    pub fn new(verifier: V, roots: RootTrustSet, timestamp: i64) -> Self {
        Self {
            verifier,
            roots,
            timestamp,
            usage: CertificateUsage::SSL_SERVER,
        }
    }

    /// Benchmarks one chain: clears the revocation cache, then lets the
    /// engine verify `request.repeat` times in a single call.
    pub fn run(&mut self, request: &ChainRequest) -> Result<VerificationResult, Error> {
        self.verifier.clear_revocation_cache();

        let result = self.verifier.verify_chain(
            &self.roots,
            &VerifyRequest {
                leaf: &request.leaf,
                intermediates: &request.intermediates,
                usage: self.usage,
                hostname: &request.hostname,
                time: self.timestamp,
                repeat: request.repeat,
            },
        )?;

        if result.durations.len() != request.repeat.get() as usize {
            warn!(
                "engine returned {} samples, {} requested",
                result.durations.len(),
                request.repeat
            );
        }

        Ok(result)
    }

    /// Drives the control protocol until `input` is exhausted, writing one
    /// result line per `domain:` command to `output`.
    ///
    /// A protocol violation writes its diagnostic to `output` and ends the
    /// run with [`Error::Protocol`].
    pub fn serve(&mut self, mut input: impl BufRead, mut output: impl Write) -> Result<(), Error> {
        let mut session = Session::new();
        let mut line = String::new();

        loop {
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            match session.process_line(&line) {
                Ok(Some(request)) => {
                    let result = self.run(&request)?;
                    result.encode(&mut output, ())?;
                    output.flush()?;
                }
                Ok(None) => {}
                Err(e) => {
                    writeln!(output, "{e}")?;
                    output.flush()?;
                    return Err(e.into());
                }
            }
        }

        session.finish();
        Ok(())
    }
}

/// Writes `result: <name>( <duration>)*\n`.
impl Encoder<()> for VerificationResult {
    type Error = io::Error;

    fn encode(&self, mut writer: impl Write, _: ()) -> io::Result<()> {
        write!(writer, "result: {}", ErrorName(self.code))?;
        for duration in &self.durations {
            write!(writer, " {duration}")?;
        }
        writeln!(writer)
    }
}
