// Copyright (C) Hygon Info Technologies Ltd.
//
// SPDX-License-Identifier: Apache-2.0

//! The command state machine.

use super::line::{BodyKind, Line, Reassembler};
use crate::error::ProtocolError;

use log::*;
use std::num::NonZeroU32;

/// The chain being assembled from `leaf:` and `interm:` commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingChain {
    leaf: Option<String>,
    intermediates: Vec<String>,
    repeat: NonZeroU32,
}

impl Default for PendingChain {
    fn default() -> Self {
        Self {
            leaf: None,
            intermediates: Vec::new(),
            repeat: NonZeroU32::MIN,
        }
    }
}

impl PendingChain {
    /// The committed leaf, base64 encoded.
    pub fn leaf(&self) -> Option<&str> {
        self.leaf.as_deref()
    }

    /// The committed intermediates, in verification order.
    pub fn intermediates(&self) -> &[String] {
        &self.intermediates
    }

    /// How many timed verifications each `domain:` command performs.
    pub fn repeat(&self) -> NonZeroU32 {
        self.repeat
    }
}

/// A complete chain ready to be benchmarked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRequest {
    /// The leaf certificate, base64 encoded DER.
    pub leaf: String,

    /// Intermediate certificates, base64 encoded DER.
    pub intermediates: Vec<String>,

    /// The hostname the leaf is verified for.
    pub hostname: String,

    /// Number of timed verifications.
    pub repeat: NonZeroU32,
}

/// Where the session stands between two physical lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    /// No leaf and nothing being accumulated.
    Idle,

    /// A leaf is committed and nothing is being accumulated.
    HaveLeaf,

    /// A leaf body is being accumulated.
    BuildingLeaf,

    /// An intermediate body is being accumulated.
    BuildingIntermediate,
}

/// Interprets the control protocol one physical line at a time.
///
/// Bodies of `leaf:` and `interm:` lines are committed lazily: a body only
/// becomes part of the chain when the next command line arrives (or at
/// [`Session::finish`]), since until then more continuation lines may follow.
#[derive(Debug, Default)]
pub struct Session {
    chain: PendingChain,
    buffer: Reassembler,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> State {
        match (self.buffer.kind(), &self.chain.leaf) {
            (Some(BodyKind::Leaf), _) => State::BuildingLeaf,
            (Some(BodyKind::Intermediate), _) => State::BuildingIntermediate,
            (None, Some(_)) => State::HaveLeaf,
            (None, None) => State::Idle,
        }
    }

    pub fn chain(&self) -> &PendingChain {
        &self.chain
    }

    /// Feeds one physical line.
    ///
    /// Returns the chain to verify when the line is a `domain:` command.
    pub fn process_line(&mut self, raw: &str) -> Result<Option<ChainRequest>, ProtocolError> {
        match Line::parse(raw) {
            Line::Leaf(body) => self.on_leaf(body).map(|_| None),
            Line::Interm(body) => self.on_interm(body).map(|_| None),
            Line::Domain(hostname) => self.on_domain(hostname).map(Some),
            Line::Repeat(count) => self.on_repeat(count).map(|_| None),
            Line::Continuation(fragment) => {
                self.buffer.extend(fragment);
                Ok(None)
            }
        }
    }

    /// Signals the end of input and commits the body still being
    /// accumulated. Nothing is verified: only `domain:` triggers a
    /// verification.
    pub fn finish(&mut self) {
        self.flush();

        if let Some(leaf) = self.chain.leaf() {
            warn!(
                "input ended with an unverified chain (leaf of {} bytes, {} intermediates)",
                leaf.len(),
                self.chain.intermediates.len()
            );
        }
    }

    fn flush(&mut self) {
        match self.buffer.take() {
            Some((BodyKind::Leaf, body)) => {
                trace!("committing leaf of {} bytes", body.len());
                self.chain.leaf = Some(body);
            }
            Some((BodyKind::Intermediate, body)) => {
                trace!("committing intermediate of {} bytes", body.len());
                self.chain.intermediates.push(body);
            }
            None => {}
        }
    }

    fn on_leaf(&mut self, body: &str) -> Result<(), ProtocolError> {
        // A leaf body still in the buffer counts as set.
        if self.chain.leaf.is_some() || self.buffer.kind() == Some(BodyKind::Leaf) {
            return Err(ProtocolError::LeafAlreadySet);
        }

        self.flush();
        self.buffer.begin(BodyKind::Leaf, body);
        Ok(())
    }

    fn on_interm(&mut self, body: &str) -> Result<(), ProtocolError> {
        self.flush();

        if self.chain.leaf.is_none() {
            return Err(ProtocolError::LeafNotSet);
        }

        self.buffer.begin(BodyKind::Intermediate, body);
        Ok(())
    }

    fn on_domain(&mut self, hostname: &str) -> Result<ChainRequest, ProtocolError> {
        self.flush();

        let leaf = self.chain.leaf.take().ok_or(ProtocolError::LeafNotSet)?;
        let intermediates = std::mem::take(&mut self.chain.intermediates);

        Ok(ChainRequest {
            leaf,
            intermediates,
            hostname: hostname.to_string(),
            repeat: self.chain.repeat,
        })
    }

    fn on_repeat(&mut self, count: &str) -> Result<(), ProtocolError> {
        self.flush();

        let count: i64 = count.trim().parse().map_err(|_| ProtocolError::IllFormed)?;
        self.chain.repeat = u32::try_from(count)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(ProtocolError::InvalidRepeat)?;

        debug!("repeat count set to {}", self.chain.repeat);
        Ok(())
    }
}
