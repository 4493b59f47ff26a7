// Copyright (C) Hygon Info Technologies Ltd.
//
// SPDX-License-Identifier: Apache-2.0
//

//! A benchmarking harness for X.509 certificate chain verification.
//!
//! Chains are submitted over a line-oriented control protocol (see
//! [`protocol`]), verified by a [`verify::ChainVerifier`] against a fixed
//! set of trusted roots, and reported as one `result:` line carrying the
//! decoded result code and the duration of every timed run.

/// Benchmark orchestration.
pub mod bench;

/// Result code names.
pub mod codes;

/// Error module.
pub mod error;

/// PEM bundle handling.
pub mod pem;

/// The control protocol.
pub mod protocol;

/// Verification engines.
pub mod verify;

pub use bench::Orchestrator;
pub use error::{Error, ProtocolError};
