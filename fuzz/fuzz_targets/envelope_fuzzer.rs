//! Fuzz target for inbound envelope decoding and body formatting
//!
//! # Strategy
//!
//! - Raw bytes: arbitrary data through the JSON decode path
//! - Decoded bodies: every successfully decoded body through the
//!   formatter
//!
//! # Invariants
//!
//! - Malformed input returns an error, never panics
//! - Formatting any body completes and reassembles losslessly
//! - Link segments never contain whitespace

#![no_main]

use libfuzzer_sys::fuzz_target;
use papo_proto::{Inbound, Segment, segments};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let Ok(envelope) = Inbound::from_json(text) else {
        return;
    };

    let segs = segments(&envelope.texto);

    let mut rebuilt = String::new();
    for seg in &segs {
        match seg {
            Segment::Text(t) => rebuilt.push_str(t),
            Segment::Break => rebuilt.push('\n'),
            Segment::Link(url) => {
                assert!(!url.is_empty());
                assert!(!url.contains(char::is_whitespace));
                rebuilt.push_str(url);
            },
        }
    }

    if !envelope.texto.is_empty() {
        assert_eq!(rebuilt, envelope.texto);
    }
});
