// Copyright (C) Hygon Info Technologies Ltd.
//
// SPDX-License-Identifier: Apache-2.0

//! Classification of physical lines and reassembly of logical lines.
//!
//! The line source may cut a logical line at a fixed length and hand back
//! the rest on the following reads, without any marker. A physical line
//! that does not start with a command prefix is therefore the continuation
//! of whatever body is being accumulated.

use log::*;

pub const LEAF_PREFIX: &str = "leaf: ";
pub const INTERM_PREFIX: &str = "interm: ";
pub const DOMAIN_PREFIX: &str = "domain: ";
pub const REPEAT_PREFIX: &str = "repeat: ";

/// One physical line, split into its command and body.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// `leaf: <base64>`
    Leaf(&'a str),

    /// `interm: <base64>`
    Interm(&'a str),

    /// `domain: <hostname>`
    Domain(&'a str),

    /// `repeat: <n>`
    Repeat(&'a str),

    /// Anything else: the remainder of a truncated line.
    Continuation(&'a str),
}

impl<'a> Line<'a> {
    /// Classifies a physical line. The line terminator, if any, is removed
    /// before matching.
    pub fn parse(raw: &'a str) -> Self {
        let line = strip_terminator(raw);

        if let Some(body) = line.strip_prefix(LEAF_PREFIX) {
            Line::Leaf(body)
        } else if let Some(body) = line.strip_prefix(INTERM_PREFIX) {
            Line::Interm(body)
        } else if let Some(body) = line.strip_prefix(DOMAIN_PREFIX) {
            Line::Domain(body)
        } else if let Some(body) = line.strip_prefix(REPEAT_PREFIX) {
            Line::Repeat(body)
        } else {
            Line::Continuation(line)
        }
    }

    /// Returns true if this line starts a new logical line.
    pub fn is_command(&self) -> bool {
        !matches!(self, Line::Continuation(_))
    }
}

/// Removes a trailing `\n` or `\r\n`.
pub fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// The kinds of body that may span several physical lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BodyKind {
    Leaf,
    Intermediate,
}

/// The logical line currently being accumulated.
#[derive(Debug, Default)]
pub struct Reassembler {
    kind: Option<BodyKind>,
    accumulated: String,
}

impl Reassembler {
    /// Starts a new body. Any previous body must have been taken first.
    pub fn begin(&mut self, kind: BodyKind, body: &str) {
        debug_assert!(self.kind.is_none(), "previous body was not flushed");
        self.kind = Some(kind);
        self.accumulated.clear();
        self.accumulated.push_str(body);
    }

    /// Appends a continuation verbatim. Returns false if nothing is being
    /// accumulated, in which case the fragment is dropped.
    pub fn extend(&mut self, fragment: &str) -> bool {
        if self.kind.is_none() {
            debug!("dropping {} byte continuation outside of a body", fragment.len());
            return false;
        }

        trace!("continuation of {} bytes", fragment.len());
        self.accumulated.push_str(fragment);
        true
    }

    /// The kind of body being accumulated, if any.
    pub fn kind(&self) -> Option<BodyKind> {
        self.kind
    }

    /// The body accumulated so far.
    pub fn accumulated(&self) -> &str {
        &self.accumulated
    }

    /// Completes the current body and resets the buffer.
    pub fn take(&mut self) -> Option<(BodyKind, String)> {
        let kind = self.kind.take()?;
        Some((kind, std::mem::take(&mut self.accumulated)))
    }
}
