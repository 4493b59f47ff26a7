// Copyright (C) Hygon Info Technologies Ltd.
//
// SPDX-License-Identifier: Apache-2.0

//! The interface to certificate verification engines.

pub mod openssl;

use crate::{error::*, pem};

use ::openssl::x509::{X509Ref, X509};
use bitflags::bitflags;
use log::*;
use std::{
    fs::File,
    io::{Read, Result as IoResult},
    num::NonZeroU32,
    path::Path,
};

bitflags! {
    /// The purpose a certificate is verified for.
    ///
    /// Values follow the NSS `certificateUsage*` constants.
    #[derive(Default)]
    pub struct CertificateUsage: u32 {
        const SSL_CLIENT   = 0x0001;
        const SSL_SERVER   = 0x0002;
        const EMAIL_SIGNER = 0x0010;
        const VERIFY_CA    = 0x0100;
        const ANY_CA       = 0x0800;
    }
}

bitflags! {
    /// What a trusted root may anchor.
    #[derive(Default)]
    pub struct TrustFlags: u8 {
        /// Trusted to issue CA certificates.
        const CA           = 1 << 0;

        /// Trusted to anchor TLS server certificates.
        const SSL_SERVER   = 1 << 1;

        /// Trusted to anchor e-mail signing certificates.
        const EMAIL_SIGNER = 1 << 2;
    }
}

impl TrustFlags {
    /// The trust a root needs to anchor a chain verified for `usage`.
    pub fn required_for(usage: CertificateUsage) -> TrustFlags {
        let mut required = TrustFlags::empty();

        if usage.intersects(CertificateUsage::SSL_CLIENT | CertificateUsage::SSL_SERVER) {
            required |= TrustFlags::SSL_SERVER;
        }
        if usage.contains(CertificateUsage::EMAIL_SIGNER) {
            required |= TrustFlags::EMAIL_SIGNER;
        }
        if usage.intersects(CertificateUsage::VERIFY_CA | CertificateUsage::ANY_CA) {
            required |= TrustFlags::CA;
        }

        required
    }
}

/// A root certificate with its trust settings.
pub struct TrustedRoot {
    cert: X509,
    trust: TrustFlags,
}

impl TrustedRoot {
    pub fn certificate(&self) -> &X509Ref {
        &self.cert
    }

    /// Marks the root as fully trusted for CA, SSL server and e-mail
    /// signer usages.
    pub fn install_trust(&mut self) {
        self.trust = TrustFlags::all();
    }
}

/// The trust anchors, loaded once at startup.
#[derive(Default)]
pub struct RootTrustSet {
    roots: Vec<TrustedRoot>,
}

impl RootTrustSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes every certificate of a PEM bundle. Blocks that fail to
    /// decode are logged and skipped.
    pub fn from_pem(bundle: &[u8]) -> Self {
        let mut set = Self::new();

        for (index, cert) in pem::certificates(bundle).enumerate() {
            match cert {
                Ok(cert) => set.push(cert),
                Err(e) => warn!("couldn't construct root certificate #{index}: {e}"),
            }
        }

        set
    }

    /// Reads a PEM bundle from `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut file = File::open(path.as_ref())?;
        let set = <Self as codicon::Decoder<()>>::decode(&mut file, ())?;
        info!("loaded {} roots from {}", set.len(), path.as_ref().display());
        Ok(set)
    }

    /// Adds a root without any trust.
    pub fn push(&mut self, cert: X509) {
        self.roots.push(TrustedRoot {
            cert,
            trust: TrustFlags::empty(),
        });
    }

    /// Marks every root as fully trusted.
    pub fn install_trust(&mut self) {
        self.roots.iter_mut().for_each(TrustedRoot::install_trust);
    }

    /// The roots able to anchor a chain verified for `usage`.
    pub fn anchors_for(&self, usage: CertificateUsage) -> impl Iterator<Item = &X509Ref> {
        let required = TrustFlags::required_for(usage);
        self.roots
            .iter()
            .filter(move |root| root.trust.contains(required))
            .map(TrustedRoot::certificate)
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl codicon::Decoder<()> for RootTrustSet {
    type Error = std::io::Error;

    fn decode(mut reader: impl Read, _: ()) -> IoResult<Self> {
        let mut bundle = Vec::new();
        reader.read_to_end(&mut bundle)?;
        Ok(Self::from_pem(&bundle))
    }
}

/// One chain to verify, with everything the engine needs.
#[derive(Debug, Clone, Copy)]
pub struct VerifyRequest<'a> {
    /// The leaf certificate, base64 encoded DER.
    pub leaf: &'a str,

    /// Intermediate certificates, base64 encoded DER, in order.
    pub intermediates: &'a [String],

    pub usage: CertificateUsage,

    pub hostname: &'a str,

    /// Verification time, in seconds since the Unix epoch.
    pub time: i64,

    /// Number of timed verifications to perform.
    pub repeat: NonZeroU32,
}

/// The outcome of one benchmarked chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    /// The result code of the last verification; see [`crate::codes`].
    pub code: i32,

    /// Wall-clock duration of each verification, in microseconds.
    pub durations: Vec<u64>,
}

/// A certificate verification engine.
pub trait ChainVerifier {
    /// Drops any cached revocation-check state so that every benchmark
    /// starts cold.
    fn clear_revocation_cache(&mut self);

    /// Verifies `request.repeat` times, timing each run. Returns the result
    /// code and exactly `request.repeat` durations.
    fn verify_chain(
        &mut self,
        roots: &RootTrustSet,
        request: &VerifyRequest<'_>,
    ) -> Result<VerificationResult, Error>;
}

impl<T: ChainVerifier + ?Sized> ChainVerifier for &mut T {
    fn clear_revocation_cache(&mut self) {
        (**self).clear_revocation_cache()
    }

    fn verify_chain(
        &mut self,
        roots: &RootTrustSet,
        request: &VerifyRequest<'_>,
    ) -> Result<VerificationResult, Error> {
        (**self).verify_chain(roots, request)
    }
}
