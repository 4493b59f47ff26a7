// Copyright (C) Hygon Info Technologies Ltd.
//
// SPDX-License-Identifier: Apache-2.0
//

mod common;

use cert_bench::{codes, verify::CertificateUsage, Error, ProtocolError};
use common::{serve, RecordingVerifier, TIMESTAMP};

fn protocol_error(result: Result<(), Error>) -> ProtocolError {
    match result {
        Err(Error::Protocol(e)) => e,
        other => panic!("expected a protocol error, got {other:?}"),
    }
}

#[test_log::test]
fn single_chain() {
    let mut verifier = RecordingVerifier::default();
    let (result, output) = serve(
        "leaf: AAA\ninterm: BBB\ndomain: example.com\n",
        &mut verifier,
    );

    result.unwrap();
    assert_eq!(output, "result: OK 1\n");
    assert_eq!(verifier.calls.len(), 1);

    let call = &verifier.calls[0];
    assert_eq!(call.leaf, "AAA");
    assert_eq!(call.intermediates, vec!["BBB"]);
    assert_eq!(call.hostname, "example.com");
    assert_eq!(call.usage, CertificateUsage::SSL_SERVER);
    assert_eq!(call.time, TIMESTAMP);
    assert_eq!(call.repeat, 1);
}

#[test]
fn revocation_cache_cleared_per_chain() {
    let mut verifier = RecordingVerifier::default();
    let (result, _) = serve(
        "leaf: A\ndomain: a.test\nleaf: B\ndomain: b.test\n",
        &mut verifier,
    );

    result.unwrap();
    assert_eq!(verifier.calls.len(), 2);
    assert_eq!(verifier.cache_clears, 2);
}

#[test]
fn leaf_only_chain() {
    let mut verifier = RecordingVerifier::default();
    let (result, output) = serve("leaf: AAA\ndomain: example.com\n", &mut verifier);

    result.unwrap();
    assert_eq!(output, "result: OK 1\n");
    assert!(verifier.calls[0].intermediates.is_empty());
}

#[test]
fn intermediates_keep_their_order() {
    let mut verifier = RecordingVerifier::default();
    let (result, _) = serve(
        "leaf: L\ninterm: I1\ninterm: I2\ninterm: I3\ndomain: x\n",
        &mut verifier,
    );

    result.unwrap();
    assert_eq!(verifier.calls[0].intermediates, vec!["I1", "I2", "I3"]);
}

#[test]
fn failing_code_is_reported_not_fatal() {
    let mut verifier = RecordingVerifier::answering(codes::SEC_ERROR_UNKNOWN_ISSUER);
    let (result, output) = serve(
        "leaf: A\ndomain: a.test\nleaf: B\ndomain: b.test\n",
        &mut verifier,
    );

    result.unwrap();
    assert_eq!(
        output,
        "result: SEC_ERROR_UNKNOWN_ISSUER 1\nresult: SEC_ERROR_UNKNOWN_ISSUER 1\n"
    );
}

#[test]
fn unknown_code_is_numeric() {
    let mut verifier = RecordingVerifier::answering(-42);
    let (result, output) = serve("leaf: A\ndomain: a.test\n", &mut verifier);

    result.unwrap();
    assert_eq!(output, "result: -42 1\n");
}

#[test_log::test]
fn domain_before_leaf() {
    let mut verifier = RecordingVerifier::default();
    let (result, output) = serve("domain: x\n", &mut verifier);

    assert_eq!(protocol_error(result), ProtocolError::LeafNotSet);
    assert_eq!(output, "error: leaf not set\n");
    assert!(verifier.calls.is_empty());
    assert_eq!(verifier.cache_clears, 0);
}

#[test]
fn intermediate_before_leaf() {
    let mut verifier = RecordingVerifier::default();
    let (result, output) = serve("interm: BBB\ndomain: x\n", &mut verifier);

    assert_eq!(protocol_error(result), ProtocolError::LeafNotSet);
    assert_eq!(output, "error: leaf not set\n");
    assert!(verifier.calls.is_empty());
}

#[test]
fn duplicate_leaf() {
    let mut verifier = RecordingVerifier::default();
    let (result, output) = serve("leaf: A\nleaf: B\ninterm: C\ndomain: x\n", &mut verifier);

    assert_eq!(protocol_error(result), ProtocolError::LeafAlreadySet);
    assert_eq!(output, "error: leaf already set\n");
    assert!(verifier.calls.is_empty());
}

#[test]
fn duplicate_leaf_reported_on_second_leaf_line() {
    let mut verifier = RecordingVerifier::default();
    let (result, output) = serve(
        "leaf: A\ndomain: first\nleaf: B\ninterm: C\nleaf: D\ndomain: second\n",
        &mut verifier,
    );

    assert_eq!(protocol_error(result), ProtocolError::LeafAlreadySet);
    assert_eq!(output, "result: OK 1\nerror: leaf already set\n");
    assert_eq!(verifier.calls.len(), 1);
}

#[test]
fn repeat_count() {
    let mut verifier = RecordingVerifier::default();
    let (result, output) = serve("repeat: 3\nleaf: A\ndomain: x\n", &mut verifier);

    result.unwrap();
    assert_eq!(output, "result: OK 1 2 3\n");
    assert_eq!(verifier.calls[0].repeat, 3);
}

#[test]
fn repeat_persists_across_chains() {
    let mut verifier = RecordingVerifier::default();
    let (result, output) = serve(
        "leaf: A\ninterm: B\nrepeat: 2\ndomain: x\nleaf: C\ndomain: y\n",
        &mut verifier,
    );

    result.unwrap();
    assert_eq!(output, "result: OK 1 2\nresult: OK 1 2\n");

    // The second chain starts from scratch.
    assert_eq!(verifier.calls[1].leaf, "C");
    assert!(verifier.calls[1].intermediates.is_empty());
    assert_eq!(verifier.calls[1].repeat, 2);
}

#[test]
fn invalid_repeat() {
    for input in ["repeat: 0\n", "repeat: -1\n", "leaf: A\nrepeat: 0\ndomain: x\n"] {
        let mut verifier = RecordingVerifier::default();
        let (result, output) = serve(input, &mut verifier);

        assert_eq!(protocol_error(result), ProtocolError::InvalidRepeat);
        assert_eq!(output, "error: invalid repeat\n");
        assert!(verifier.calls.is_empty());
    }
}

#[test]
fn non_numeric_repeat() {
    let mut verifier = RecordingVerifier::default();
    let (result, output) = serve("repeat: often\n", &mut verifier);

    assert_eq!(protocol_error(result), ProtocolError::IllFormed);
    assert_eq!(output, "error: ill-formed input\n");
}

#[test]
fn error_stops_processing() {
    let mut verifier = RecordingVerifier::default();
    let (result, output) = serve("domain: x\nleaf: A\ndomain: y\n", &mut verifier);

    assert!(result.is_err());
    assert_eq!(output, "error: leaf not set\n");
    assert!(verifier.calls.is_empty());
}

#[test]
fn reassembles_split_bodies() {
    let leaf = "MIIDazCCAlOgAwIBAgIUQk7Zb3x5Xq0+/w==";
    let interm = "MIIBszCCAVmgAwIBAgIUZ9x+K3r7PQ==";

    for at in 0..=leaf.len() {
        let input = format!(
            "leaf: {}\n{}\ninterm: {interm}\ndomain: example.com\n",
            &leaf[..at],
            &leaf[at..]
        );
        let mut verifier = RecordingVerifier::default();
        let (result, _) = serve(&input, &mut verifier);

        result.unwrap();
        assert_eq!(verifier.calls[0].leaf, leaf, "split at {at}");
        assert_eq!(verifier.calls[0].intermediates, vec![interm]);
    }

    for at in 0..=interm.len() {
        let input = format!(
            "leaf: {leaf}\ninterm: {}\n{}\ndomain: example.com\n",
            &interm[..at],
            &interm[at..]
        );
        let mut verifier = RecordingVerifier::default();
        let (result, _) = serve(&input, &mut verifier);

        result.unwrap();
        assert_eq!(verifier.calls[0].leaf, leaf);
        assert_eq!(verifier.calls[0].intermediates, vec![interm], "split at {at}");
    }
}

#[test]
fn reassembles_many_fragments() {
    let body: String = std::iter::repeat("ABCDEFGH").take(64).collect();
    let fragments: Vec<&str> = body
        .as_bytes()
        .chunks(7)
        .map(|chunk| std::str::from_utf8(chunk).unwrap())
        .collect();

    let mut input = format!("leaf: {}\n", fragments[0]);
    for fragment in &fragments[1..] {
        input.push_str(fragment);
        input.push('\n');
    }
    input.push_str(&format!("interm: {}\n", fragments[0]));
    for fragment in &fragments[1..] {
        input.push_str(fragment);
        input.push('\n');
    }
    input.push_str("domain: example.com\n");

    let mut verifier = RecordingVerifier::default();
    let (result, _) = serve(&input, &mut verifier);

    result.unwrap();
    assert_eq!(verifier.calls[0].leaf, body);
    assert_eq!(verifier.calls[0].intermediates, vec![body.clone()]);
}

#[test]
fn crlf_line_endings() {
    let mut verifier = RecordingVerifier::default();
    let (result, output) = serve(
        "leaf: AAA\r\nBBB\r\ninterm: CCC\r\ndomain: example.com\r\n",
        &mut verifier,
    );

    result.unwrap();
    assert_eq!(output, "result: OK 1\n");
    assert_eq!(verifier.calls[0].leaf, "AAABBB");
    assert_eq!(verifier.calls[0].hostname, "example.com");
}

#[test]
fn last_line_without_newline() {
    let mut verifier = RecordingVerifier::default();
    let (result, output) = serve("leaf: A\ndomain: example.com", &mut verifier);

    result.unwrap();
    assert_eq!(output, "result: OK 1\n");
    assert_eq!(verifier.calls[0].hostname, "example.com");
}

#[test]
fn unfinished_chain_at_end_of_input() {
    let mut verifier = RecordingVerifier::default();
    let (result, output) = serve("leaf: A\ninterm: B\nCC\n", &mut verifier);

    result.unwrap();
    assert_eq!(output, "");
    assert!(verifier.calls.is_empty());
}

#[test]
fn empty_input() {
    let mut verifier = RecordingVerifier::default();
    let (result, output) = serve("", &mut verifier);

    result.unwrap();
    assert_eq!(output, "");
}
