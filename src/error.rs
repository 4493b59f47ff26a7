// Copyright (C) Hygon Info Technologies Ltd.
//
// SPDX-License-Identifier: Apache-2.0
//

use openssl::error::ErrorStack;
use std::{
    convert::From,
    error,
    fmt::{self, Display},
    io,
};
use x509_parser::error::PEMError;

/// Violations of the control protocol.
///
/// Any of these halts the harness. The `Display` form is the exact
/// diagnostic written to the protocol output.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// A `leaf:` line arrived while the current chain already has a leaf.
    LeafAlreadySet,

    /// An `interm:` or `domain:` line arrived before any leaf.
    LeafNotSet,

    /// A command body could not be interpreted, e.g. a non-numeric
    /// `repeat:` argument.
    IllFormed,

    /// A `repeat:` count that is zero, negative or out of range.
    InvalidRepeat,
}

impl Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let diagnostic = match self {
            ProtocolError::LeafAlreadySet => "error: leaf already set",
            ProtocolError::LeafNotSet => "error: leaf not set",
            ProtocolError::IllFormed => "error: ill-formed input",
            ProtocolError::InvalidRepeat => "error: invalid repeat",
        };
        write!(f, "{diagnostic}")
    }
}

impl error::Error for ProtocolError {}

/// Error conditions returned by the harness or by the layers below it
/// (the standard streams and the OpenSSL library).
#[derive(Debug)]
pub enum Error {
    /// Reading input, writing results or reading the roots bundle failed.
    IoError(io::Error),

    /// OpenSSL failed outside of a verification, e.g. while building
    /// the certificate store.
    OpenSslError(ErrorStack),

    /// The verification time does not fit the platform's `time_t`.
    InvalidTimestamp(i64),

    /// A block of the roots bundle is not valid PEM.
    PemError(PEMError),

    /// The input violated the control protocol.
    Protocol(ProtocolError),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IoError(e) => write!(f, "I/O error: {e}"),
            Error::OpenSslError(e) => write!(f, "OpenSSL error: {e}"),
            Error::InvalidTimestamp(t) => write!(f, "timestamp {t} is out of range"),
            Error::PemError(e) => write!(f, "PEM error: {e}"),
            Error::Protocol(e) => write!(f, "{e}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IoError(e) => Some(e),
            Error::OpenSslError(e) => Some(e),
            Error::InvalidTimestamp(_) => None,
            Error::PemError(e) => Some(e),
            Error::Protocol(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    #[inline]
    fn from(error: io::Error) -> Error {
        Error::IoError(error)
    }
}

impl From<ErrorStack> for Error {
    #[inline]
    fn from(error: ErrorStack) -> Error {
        Error::OpenSslError(error)
    }
}

impl From<PEMError> for Error {
    #[inline]
    fn from(error: PEMError) -> Error {
        Error::PemError(error)
    }
}

impl From<ProtocolError> for Error {
    #[inline]
    fn from(error: ProtocolError) -> Error {
        Error::Protocol(error)
    }
}
