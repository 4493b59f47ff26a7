// Copyright (C) Hygon Info Technologies Ltd.
//
// SPDX-License-Identifier: Apache-2.0

//! The line-oriented control protocol.
//!
//! ```text
//! leaf: <base64 DER>
//! interm: <base64 DER>
//! domain: <hostname>
//! repeat: <n>
//! ```
//!
//! Any other line continues the body of the previous `leaf:` or `interm:`
//! line.

pub mod line;
mod session;

pub use session::{ChainRequest, PendingChain, Session, State};
