//! Session registration.
//!
//! Records the current session's metadata under the user data directory,
//! spawned fire-and-forget at startup. Success and failure are logged
//! only; chat works identically either way.

use std::{fs, io, path::PathBuf};

use chrono::{SecondsFormat, Utc};
use papo_client::ClientId;

const SESSION_FILE: &str = "session";

/// Spawn the registration task. Never awaited and never retried.
pub fn spawn(client_id: ClientId, endpoint: String) {
    tokio::spawn(async move {
        match register(&client_id, &endpoint) {
            Ok(path) => tracing::info!(path = %path.display(), "session registered"),
            Err(e) => tracing::warn!("session registration failed: {e}"),
        }
    });
}

fn register(client_id: &ClientId, endpoint: &str) -> Result<PathBuf, io::Error> {
    let dir = dirs::data_dir()
        .map(|dir| dir.join("papo"))
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no user data directory"))?;
    fs::create_dir_all(&dir)?;

    let path = dir.join(SESSION_FILE);
    let started_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    fs::write(&path, format!("{client_id} {endpoint} {started_at}\n"))?;
    Ok(path)
}
