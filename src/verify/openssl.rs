// Copyright (C) Hygon Info Technologies Ltd.
//
// SPDX-License-Identifier: Apache-2.0

//! A verification engine built on OpenSSL's `X509_verify_cert`.
//!
//! Verification is local only: chains are built from the supplied
//! intermediates and the trusted roots, and no revocation information is
//! fetched. OpenSSL verify results are translated into the NSS result
//! codes used by [`crate::codes`].

use super::{CertificateUsage, ChainVerifier, RootTrustSet, VerificationResult, VerifyRequest};
use crate::{codes, error::Error, pem};

use log::*;
use openssl::{
    error::ErrorStack,
    stack::Stack,
    x509::{
        store::{X509Store, X509StoreBuilder, X509StoreRef},
        verify::{X509VerifyFlags, X509VerifyParam},
        X509PurposeId, X509StoreContext, X509VerifyResult,
    },
};
use openssl_sys as ffi;
use std::time::{Duration, Instant};

/// Chains deeper than this are rejected.
const MAX_CHAIN_DEPTH: i32 = 32;

/// Verifies chains with OpenSSL, with `X509_V_FLAG_X509_STRICT` set.
#[derive(Debug, Default)]
pub struct OpenSslVerifier;

impl OpenSslVerifier {
    pub fn new() -> Self {
        Self
    }

    fn build_store(
        &self,
        roots: &RootTrustSet,
        request: &VerifyRequest<'_>,
    ) -> Result<X509Store, Error> {
        let mut builder = X509StoreBuilder::new()?;
        for root in roots.anchors_for(request.usage) {
            builder.add_cert(root.to_owned())?;
        }

        let mut param = X509VerifyParam::new()?;
        param.set_time(verification_time(request.time)?);
        param.set_depth(MAX_CHAIN_DEPTH);
        param.set_host(request.hostname)?;
        param.set_flags(X509VerifyFlags::X509_STRICT)?;

        builder.set_param(&param)?;
        builder.set_purpose(purpose(request.usage))?;
        Ok(builder.build())
    }
}

impl ChainVerifier for OpenSslVerifier {
    fn clear_revocation_cache(&mut self) {
        trace!("no revocation state to clear");
    }

    fn verify_chain(
        &mut self,
        roots: &RootTrustSet,
        request: &VerifyRequest<'_>,
    ) -> Result<VerificationResult, Error> {
        let store = self.build_store(roots, request)?;

        let mut code = codes::OK;
        let mut durations = Vec::with_capacity(request.repeat.get() as usize);

        for _ in 0..request.repeat.get() {
            let start = Instant::now();
            code = verify_once(&store, request.leaf, request.intermediates)?;
            durations.push(micros(start.elapsed()));
        }

        debug!(
            "verified chain of {} certificates for {}: {}",
            request.intermediates.len() + 1,
            request.hostname,
            codes::lookup(code)
        );

        Ok(VerificationResult { code, durations })
    }
}

fn verification_time(timestamp: i64) -> Result<libc::time_t, Error> {
    libc::time_t::try_from(timestamp).map_err(|_| Error::InvalidTimestamp(timestamp))
}

/// Saturates instead of wrapping.
fn micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

/// Decodes and verifies the chain once.
fn verify_once(
    store: &X509StoreRef,
    leaf: &str,
    intermediates: &[String],
) -> Result<i32, ErrorStack> {
    let leaf = match pem::decode_certificate(leaf) {
        Ok(cert) => cert,
        Err(e) => {
            debug!("leaf failed to decode: {e}");
            return Ok(codes::SEC_ERROR_BAD_DER);
        }
    };

    let mut chain = Stack::new()?;
    for (index, intermediate) in intermediates.iter().enumerate() {
        match pem::decode_certificate(intermediate) {
            Ok(cert) => chain.push(cert)?,
            Err(e) => {
                debug!("intermediate #{index} failed to decode: {e}");
                return Ok(codes::SEC_ERROR_BAD_DER);
            }
        }
    }

    let mut context = X509StoreContext::new()?;
    let (result, depth) = context.init(store, &leaf, &chain, |ctx| {
        ctx.verify_cert()?;
        Ok((ctx.error(), ctx.error_depth()))
    })?;

    Ok(translate(result, depth))
}

fn purpose(usage: CertificateUsage) -> X509PurposeId {
    if usage.contains(CertificateUsage::SSL_SERVER) {
        X509PurposeId::SSL_SERVER
    } else if usage.contains(CertificateUsage::SSL_CLIENT) {
        X509PurposeId::SSL_CLIENT
    } else if usage.contains(CertificateUsage::EMAIL_SIGNER) {
        X509PurposeId::SMIME_SIGN
    } else {
        X509PurposeId::ANY
    }
}

/// Maps an OpenSSL verify result to an NSS result code.
///
/// `depth` is the position in the chain the error was found at, `0` being
/// the leaf. Results without an NSS counterpart keep their (positive)
/// OpenSSL value.
pub fn translate(result: X509VerifyResult, depth: u32) -> i32 {
    let leaf = depth == 0;

    match result.as_raw() {
        ffi::X509_V_OK => codes::OK,
        ffi::X509_V_ERR_CERT_HAS_EXPIRED if leaf => codes::SEC_ERROR_EXPIRED_CERTIFICATE,
        ffi::X509_V_ERR_CERT_HAS_EXPIRED => codes::SEC_ERROR_EXPIRED_ISSUER_CERTIFICATE,
        ffi::X509_V_ERR_CERT_NOT_YET_VALID if leaf => {
            codes::MOZILLA_PKIX_ERROR_NOT_YET_VALID_CERTIFICATE
        }
        ffi::X509_V_ERR_CERT_NOT_YET_VALID => {
            codes::MOZILLA_PKIX_ERROR_NOT_YET_VALID_ISSUER_CERTIFICATE
        }
        ffi::X509_V_ERR_UNABLE_TO_GET_ISSUER_CERT
        | ffi::X509_V_ERR_UNABLE_TO_GET_ISSUER_CERT_LOCALLY
        | ffi::X509_V_ERR_UNABLE_TO_VERIFY_LEAF_SIGNATURE
        | ffi::X509_V_ERR_SELF_SIGNED_CERT_IN_CHAIN => codes::SEC_ERROR_UNKNOWN_ISSUER,
        ffi::X509_V_ERR_DEPTH_ZERO_SELF_SIGNED_CERT => codes::MOZILLA_PKIX_ERROR_SELF_SIGNED_CERT,
        ffi::X509_V_ERR_CERT_SIGNATURE_FAILURE => codes::SEC_ERROR_BAD_SIGNATURE,
        ffi::X509_V_ERR_HOSTNAME_MISMATCH => codes::SSL_ERROR_BAD_CERT_DOMAIN,
        ffi::X509_V_ERR_INVALID_CA => codes::SEC_ERROR_CA_CERT_INVALID,
        ffi::X509_V_ERR_PATH_LENGTH_EXCEEDED => codes::SEC_ERROR_PATH_LEN_CONSTRAINT_INVALID,
        ffi::X509_V_ERR_INVALID_PURPOSE => codes::SEC_ERROR_INADEQUATE_CERT_TYPE,
        ffi::X509_V_ERR_KEYUSAGE_NO_CERTSIGN => codes::SEC_ERROR_INADEQUATE_KEY_USAGE,
        ffi::X509_V_ERR_CERT_REVOKED => codes::SEC_ERROR_REVOKED_CERTIFICATE,
        ffi::X509_V_ERR_CERT_UNTRUSTED | ffi::X509_V_ERR_CERT_REJECTED => {
            codes::SEC_ERROR_UNTRUSTED_CERT
        }
        raw => raw,
    }
}
