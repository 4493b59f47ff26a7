// Copyright (C) Hygon Info Technologies Ltd.
//
// SPDX-License-Identifier: Apache-2.0

//! Certificate decoding for PEM bundles and protocol bodies.

use crate::error::*;

use log::*;
use openssl::{base64, error::ErrorStack, x509::X509};
use x509_parser::pem::Pem;

const LABEL: &str = "CERTIFICATE";

/// Decodes the certificates of a PEM bundle, yielding one result per
/// block. Blocks with another label are skipped.
pub fn certificates(bundle: &[u8]) -> impl Iterator<Item = Result<X509, Error>> + '_ {
    Pem::iter_from_buffer(bundle).filter_map(|block| match block {
        Ok(block) if block.label != LABEL => {
            debug!("skipping PEM block labelled {}", block.label);
            None
        }
        Ok(block) => Some(X509::from_der(&block.contents).map_err(Error::from)),
        Err(e) => Some(Err(Error::from(e))),
    })
}

/// Decodes a base64 encoded DER certificate.
pub fn decode_certificate(base64: &str) -> Result<X509, ErrorStack> {
    let der = base64::decode_block(base64)?;
    X509::from_der(&der)
}
