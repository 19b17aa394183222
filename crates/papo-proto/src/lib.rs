//! Wire types for papo
//!
//! The protocol is a thin JSON envelope exchanged over a persistent
//! WebSocket connection:
//!
//! - Outbound: `{"mensagem": <string>, "timestamp": <ISO-8601 string>}`
//! - Inbound: `{"tipo": <string, optional>, "texto": <string>}`
//!
//! `tipo == "sistema"` marks a system notice; anything else (or a missing
//! discriminator) is ordinary peer text. Envelopes are transient: built
//! right before send, discarded after rendering.
//!
//! This crate also owns the text-formatting contract shared by renderers
//! (line breaks and bare-URL links), see [`format`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod envelope;
pub mod format;

pub use envelope::{EnvelopeError, Inbound, MessageKind, Outbound, SYSTEM_DISCRIMINATOR};
pub use format::{Segment, segments};
