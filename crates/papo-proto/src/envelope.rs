//! JSON message envelope.
//!
//! Field names are fixed by the server (`mensagem`, `timestamp`, `tipo`,
//! `texto`) and must not be renamed. Outbound envelopes carry no sender
//! identity; the identity is implicit in the client id embedded in the
//! endpoint path.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Discriminator value marking an inbound system notice.
pub const SYSTEM_DISCRIMINATOR: &str = "sistema";

/// Envelope decode/encode errors.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// Payload is not a valid envelope object.
    #[error("malformed envelope: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Render class of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Sent by this client.
    Sent,
    /// Received peer text.
    Received,
    /// Server-issued system notice.
    System,
}

/// Outbound chat turn.
///
/// Serializes to exactly `{"mensagem": ..., "timestamp": ...}`, no extra
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outbound {
    /// Free-text body.
    pub mensagem: String,
    /// ISO-8601 send time.
    pub timestamp: String,
}

impl Outbound {
    /// Create an outbound envelope.
    pub fn new(mensagem: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self { mensagem: mensagem.into(), timestamp: timestamp.into() }
    }

    /// Encode as a single JSON text frame.
    pub fn to_json(&self) -> Result<String, EnvelopeError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Inbound frame: peer text or system notice.
///
/// Extra fields the server may attach (`categoria`, `timestamp`) are
/// tolerated and ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Inbound {
    /// Optional discriminator; [`SYSTEM_DISCRIMINATOR`] marks a system
    /// notice, anything else is peer text.
    #[serde(default)]
    pub tipo: Option<String>,
    /// Display text.
    pub texto: String,
}

impl Inbound {
    /// Decode an inbound text frame.
    ///
    /// Malformed payloads come back as an error value; callers drop them
    /// without surfacing anything to the user.
    pub fn from_json(raw: &str) -> Result<Self, EnvelopeError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Render class for this frame. Missing discriminator defaults to
    /// peer text.
    pub fn kind(&self) -> MessageKind {
        if self.tipo.as_deref() == Some(SYSTEM_DISCRIMINATOR) {
            MessageKind::System
        } else {
            MessageKind::Received
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outbound_wire_shape_is_exact() {
        let env = Outbound::new("oi", "2024-01-01T00:00:00Z");
        let value: serde_json::Value =
            serde_json::from_str(&env.to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({"mensagem": "oi", "timestamp": "2024-01-01T00:00:00Z"})
        );
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2, "no extra fields, no sender field");
    }

    #[test]
    fn sistema_discriminator_marks_system_notice() {
        let inb = Inbound::from_json(r#"{"tipo":"sistema","texto":"bem-vindo"}"#).unwrap();
        assert_eq!(inb.kind(), MessageKind::System);
    }

    #[test]
    fn missing_discriminator_defaults_to_peer_text() {
        let inb = Inbound::from_json(r#"{"texto":"oi"}"#).unwrap();
        assert_eq!(inb.kind(), MessageKind::Received);
    }

    #[test]
    fn other_discriminators_are_peer_text() {
        let inb = Inbound::from_json(r#"{"tipo":"resposta","texto":"pong"}"#).unwrap();
        assert_eq!(inb.kind(), MessageKind::Received);
    }

    #[test]
    fn server_extra_fields_are_ignored() {
        let raw = r#"{"tipo":"resposta","texto":"pong","categoria":"padrao","timestamp":""}"#;
        let inb = Inbound::from_json(raw).unwrap();
        assert_eq!(inb.texto, "pong");
    }

    #[test]
    fn malformed_payload_is_an_error_not_a_panic() {
        assert!(Inbound::from_json("not json").is_err());
        assert!(Inbound::from_json("{}").is_err());
        assert!(Inbound::from_json(r#"{"tipo":"sistema"}"#).is_err());
    }
}
