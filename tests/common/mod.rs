// Copyright (C) Hygon Info Technologies Ltd.
//
// SPDX-License-Identifier: Apache-2.0
//

#![allow(dead_code)]

use cert_bench::{
    verify::{
        CertificateUsage, ChainVerifier, RootTrustSet, VerificationResult, VerifyRequest,
    },
    Error, Orchestrator,
};
use openssl::{
    asn1::{Asn1Integer, Asn1Time},
    base64,
    bn::{BigNum, MsbOption},
    hash::MessageDigest,
    pkey::{PKey, Private},
    rsa::Rsa,
    x509::{
        extension::{
            AuthorityKeyIdentifier, BasicConstraints, ExtendedKeyUsage, KeyUsage,
            SubjectAlternativeName, SubjectKeyIdentifier,
        },
        X509Builder, X509Name, X509NameBuilder, X509,
    },
};

pub const CA_NOT_BEFORE: i64 = 1_500_000_000;
pub const CA_NOT_AFTER: i64 = 2_100_000_000;
pub const LEAF_NOT_BEFORE: i64 = 1_600_000_000;
pub const LEAF_NOT_AFTER: i64 = 1_800_000_000;

/// Inside every validity window.
pub const NOW: i64 = 1_700_000_000;

/// After the leaf expired, before the CAs did.
pub const LEAF_EXPIRED: i64 = 1_900_000_000;

/// A certificate and the key it was issued to.
pub struct Issued {
    pub cert: X509,
    pub key: PKey<Private>,
}

impl Issued {
    /// The certificate as base64 DER, the way the protocol carries it.
    pub fn base64(&self) -> String {
        base64::encode_block(&self.cert.to_der().unwrap())
    }

    pub fn pem(&self) -> String {
        String::from_utf8(self.cert.to_pem().unwrap()).unwrap()
    }
}

fn name(cn: &str) -> X509Name {
    let mut name = X509NameBuilder::new().unwrap();
    name.append_entry_by_text("O", "cert-bench tests").unwrap();
    name.append_entry_by_text("CN", cn).unwrap();
    name.build()
}

fn serial() -> Asn1Integer {
    let mut serial = BigNum::new().unwrap();
    serial.rand(159, MsbOption::ONE, false).unwrap();
    serial.to_asn1_integer().unwrap()
}

fn key() -> PKey<Private> {
    PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap()
}

fn builder(cn: &str, key: &PKey<Private>, not_before: i64, not_after: i64) -> X509Builder {
    let mut builder = X509Builder::new().unwrap();
    builder.set_version(2).unwrap();
    builder.set_serial_number(&serial()).unwrap();
    builder.set_subject_name(&name(cn)).unwrap();
    builder.set_pubkey(key).unwrap();
    builder
        .set_not_before(&Asn1Time::from_unix(not_before as libc::time_t).unwrap())
        .unwrap();
    builder
        .set_not_after(&Asn1Time::from_unix(not_after as libc::time_t).unwrap())
        .unwrap();
    builder
}

fn ca_extensions(builder: &mut X509Builder, issuer: Option<&X509>) {
    builder
        .append_extension(BasicConstraints::new().critical().ca().build().unwrap())
        .unwrap();
    builder
        .append_extension(
            KeyUsage::new()
                .critical()
                .key_cert_sign()
                .crl_sign()
                .build()
                .unwrap(),
        )
        .unwrap();

    let ski = SubjectKeyIdentifier::new()
        .build(&builder.x509v3_context(issuer.map(|i| &**i), None))
        .unwrap();
    builder.append_extension(ski).unwrap();

    if let Some(issuer) = issuer {
        let aki = AuthorityKeyIdentifier::new()
            .keyid(false)
            .issuer(false)
            .build(&builder.x509v3_context(Some(&**issuer), None))
            .unwrap();
        builder.append_extension(aki).unwrap();
    }
}

/// A self-signed root CA.
pub fn root(cn: &str) -> Issued {
    let key = key();
    let mut builder = builder(cn, &key, CA_NOT_BEFORE, CA_NOT_AFTER);
    builder.set_issuer_name(&name(cn)).unwrap();
    ca_extensions(&mut builder, None);
    builder.sign(&key, MessageDigest::sha256()).unwrap();

    Issued {
        cert: builder.build(),
        key,
    }
}

/// An intermediate CA issued by `issuer`.
pub fn intermediate(cn: &str, issuer: &Issued) -> Issued {
    let key = key();
    let mut builder = builder(cn, &key, CA_NOT_BEFORE, CA_NOT_AFTER);
    builder.set_issuer_name(issuer.cert.subject_name()).unwrap();
    ca_extensions(&mut builder, Some(&issuer.cert));
    builder.sign(&issuer.key, MessageDigest::sha256()).unwrap();

    Issued {
        cert: builder.build(),
        key,
    }
}

/// A TLS server certificate for `dns`, issued by `issuer`.
pub fn leaf(dns: &str, issuer: &Issued) -> Issued {
    let key = key();
    let mut builder = builder(dns, &key, LEAF_NOT_BEFORE, LEAF_NOT_AFTER);
    builder.set_issuer_name(issuer.cert.subject_name()).unwrap();

    builder
        .append_extension(BasicConstraints::new().build().unwrap())
        .unwrap();
    builder
        .append_extension(
            KeyUsage::new()
                .critical()
                .digital_signature()
                .key_encipherment()
                .build()
                .unwrap(),
        )
        .unwrap();
    builder
        .append_extension(ExtendedKeyUsage::new().server_auth().build().unwrap())
        .unwrap();

    let ski = SubjectKeyIdentifier::new()
        .build(&builder.x509v3_context(Some(&*issuer.cert), None))
        .unwrap();
    builder.append_extension(ski).unwrap();

    let aki = AuthorityKeyIdentifier::new()
        .keyid(false)
        .issuer(false)
        .build(&builder.x509v3_context(Some(&*issuer.cert), None))
        .unwrap();
    builder.append_extension(aki).unwrap();

    let san = SubjectAlternativeName::new()
        .dns(dns)
        .build(&builder.x509v3_context(Some(&*issuer.cert), None))
        .unwrap();
    builder.append_extension(san).unwrap();

    builder.sign(&issuer.key, MessageDigest::sha256()).unwrap();

    Issued {
        cert: builder.build(),
        key,
    }
}

/// root -> intermediate -> leaf for `example.com`.
pub struct Pki {
    pub root: Issued,
    pub intermediate: Issued,
    pub leaf: Issued,
}

impl Pki {
    pub fn new() -> Self {
        let root = root("Test Root CA");
        let intermediate = intermediate("Test Intermediate CA", &root);
        let leaf = leaf("example.com", &intermediate);

        Self {
            root,
            intermediate,
            leaf,
        }
    }

    /// The root, fully trusted.
    pub fn trust_set(&self) -> RootTrustSet {
        let mut roots = RootTrustSet::from_pem(self.root.pem().as_bytes());
        roots.install_trust();
        roots
    }
}

/// One recorded `verify_chain` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub leaf: String,
    pub intermediates: Vec<String>,
    pub usage: CertificateUsage,
    pub hostname: String,
    pub time: i64,
    pub repeat: u32,
}

/// A verification engine that records its calls and answers with a fixed
/// code and durations `1..=repeat`.
#[derive(Debug, Default)]
pub struct RecordingVerifier {
    pub code: i32,
    pub calls: Vec<Call>,
    pub cache_clears: usize,
}

impl RecordingVerifier {
    pub fn answering(code: i32) -> Self {
        Self {
            code,
            ..Default::default()
        }
    }
}

impl ChainVerifier for RecordingVerifier {
    fn clear_revocation_cache(&mut self) {
        self.cache_clears += 1;
    }

    fn verify_chain(
        &mut self,
        _roots: &RootTrustSet,
        request: &VerifyRequest<'_>,
    ) -> Result<VerificationResult, Error> {
        self.calls.push(Call {
            leaf: request.leaf.to_string(),
            intermediates: request.intermediates.to_vec(),
            usage: request.usage,
            hostname: request.hostname.to_string(),
            time: request.time,
            repeat: request.repeat.get(),
        });

        Ok(VerificationResult {
            code: self.code,
            durations: (1..=u64::from(request.repeat.get())).collect(),
        })
    }
}

/// The timestamp the harness is started with in protocol tests.
pub const TIMESTAMP: i64 = 1_700_000_000;

/// Runs the harness over `input`, returning its outcome and output.
pub fn serve(input: &str, verifier: &mut RecordingVerifier) -> (Result<(), Error>, String) {
    let mut bench = Orchestrator::new(verifier, RootTrustSet::new(), TIMESTAMP);
    let mut output = Vec::new();
    let result = bench.serve(input.as_bytes(), &mut output);
    (result, String::from_utf8(output).unwrap())
}
