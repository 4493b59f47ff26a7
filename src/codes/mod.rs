// Copyright (C) Hygon Info Technologies Ltd.
//
// SPDX-License-Identifier: Apache-2.0

//! Symbolic names for verification result codes.
//!
//! Result codes are signed integers in the numbering of the NSS security
//! stack: `0` is success, SSL library errors start at `-12288`, security
//! library errors at `-8192` and mozilla::pkix errors at `-16384`. Codes
//! outside the table are rendered as plain decimal numbers.

mod table;

use std::{borrow::Cow, fmt};

use table::ERROR_NAMES;

/// The code reported for a successful verification.
pub const OK: i32 = 0;

/// `SSL_ERROR_BAD_CERT_DOMAIN`: the certificate does not match the hostname.
pub const SSL_ERROR_BAD_CERT_DOMAIN: i32 = -12276;

/// `SEC_ERROR_LIBRARY_FAILURE`
pub const SEC_ERROR_LIBRARY_FAILURE: i32 = -8191;

/// `SEC_ERROR_BAD_DER`: a certificate could not be decoded.
pub const SEC_ERROR_BAD_DER: i32 = -8183;

/// `SEC_ERROR_BAD_SIGNATURE`
pub const SEC_ERROR_BAD_SIGNATURE: i32 = -8182;

/// `SEC_ERROR_EXPIRED_CERTIFICATE`
pub const SEC_ERROR_EXPIRED_CERTIFICATE: i32 = -8181;

/// `SEC_ERROR_REVOKED_CERTIFICATE`
pub const SEC_ERROR_REVOKED_CERTIFICATE: i32 = -8180;

/// `SEC_ERROR_UNKNOWN_ISSUER`
pub const SEC_ERROR_UNKNOWN_ISSUER: i32 = -8179;

/// `SEC_ERROR_UNTRUSTED_ISSUER`
pub const SEC_ERROR_UNTRUSTED_ISSUER: i32 = -8172;

/// `SEC_ERROR_UNTRUSTED_CERT`
pub const SEC_ERROR_UNTRUSTED_CERT: i32 = -8171;

/// `SEC_ERROR_EXPIRED_ISSUER_CERTIFICATE`
pub const SEC_ERROR_EXPIRED_ISSUER_CERTIFICATE: i32 = -8162;

/// `SEC_ERROR_CA_CERT_INVALID`
pub const SEC_ERROR_CA_CERT_INVALID: i32 = -8156;

/// `SEC_ERROR_PATH_LEN_CONSTRAINT_INVALID`
pub const SEC_ERROR_PATH_LEN_CONSTRAINT_INVALID: i32 = -8155;

/// `SEC_ERROR_INADEQUATE_KEY_USAGE`
pub const SEC_ERROR_INADEQUATE_KEY_USAGE: i32 = -8102;

/// `SEC_ERROR_INADEQUATE_CERT_TYPE`
pub const SEC_ERROR_INADEQUATE_CERT_TYPE: i32 = -8101;

/// `MOZILLA_PKIX_ERROR_CA_CERT_USED_AS_END_ENTITY`
pub const MOZILLA_PKIX_ERROR_CA_CERT_USED_AS_END_ENTITY: i32 = -16383;

/// `MOZILLA_PKIX_ERROR_NOT_YET_VALID_CERTIFICATE`
pub const MOZILLA_PKIX_ERROR_NOT_YET_VALID_CERTIFICATE: i32 = -16379;

/// `MOZILLA_PKIX_ERROR_NOT_YET_VALID_ISSUER_CERTIFICATE`
pub const MOZILLA_PKIX_ERROR_NOT_YET_VALID_ISSUER_CERTIFICATE: i32 = -16378;

/// `MOZILLA_PKIX_ERROR_SELF_SIGNED_CERT`
pub const MOZILLA_PKIX_ERROR_SELF_SIGNED_CERT: i32 = -16370;

/// Returns the symbolic name of a known code.
///
/// `0` is not part of the table; see [`lookup`].
pub fn name(code: i32) -> Option<&'static str> {
    ERROR_NAMES
        .binary_search_by_key(&code, |&(c, _)| c)
        .ok()
        .map(|i| ERROR_NAMES[i].1)
}

/// Decodes a result code into its stable textual form.
///
/// `0` becomes `"OK"`, known codes become their symbolic name and anything
/// else is returned as its decimal representation. A miss is never an error.
pub fn lookup(code: i32) -> Cow<'static, str> {
    if code == OK {
        return Cow::Borrowed("OK");
    }

    match name(code) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(code.to_string()),
    }
}

/// A result code rendered through [`lookup`] when displayed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ErrorName(pub i32);

impl fmt::Display for ErrorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&lookup(self.0))
    }
}
