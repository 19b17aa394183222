//! Per-session client identity.

use rand::Rng;

const PREFIX: &str = "user_";
const TOKEN_LEN: usize = 9;
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Random token identifying this session in the endpoint path.
///
/// Generated once at startup. Collision risk across sessions is accepted
/// as negligible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Generate a fresh identifier: `user_` plus nine random lowercase
    /// alphanumerics.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        let token: String = (0..TOKEN_LEN)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        Self(format!("{PREFIX}{token}"))
    }

    /// The identifier as a path segment.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build the connection endpoint: `<base>/<client-id>`.
pub fn endpoint(base: &str, id: &ClientId) -> String {
    format!("{}/{}", base.trim_end_matches('/'), id)
}
