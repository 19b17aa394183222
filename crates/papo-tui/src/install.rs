//! Desktop install glue.
//!
//! The one-shot install offer: copies the running binary into the user's
//! `~/.local/bin` and writes an XDG desktop entry so the client appears in
//! application launchers. The offer is only armed when the entry is
//! missing and the target directories can be resolved.

use std::{fs, io, path::PathBuf};

use thiserror::Error;

const BIN_NAME: &str = "papo";
const DESKTOP_FILE: &str = "papo.desktop";

/// Install errors.
#[derive(Debug, Error)]
pub enum InstallError {
    /// A required user directory could not be resolved.
    #[error("no user directory for {0}")]
    MissingDirectory(&'static str),

    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Whether a fresh install offer should be armed at startup.
///
/// True only when the desktop entry is absent and both install targets
/// can be resolved, so triggering the offer can plausibly succeed.
pub fn offer_available() -> bool {
    let Some(entry) = desktop_entry_path() else {
        return false;
    };
    if entry.exists() {
        return false;
    }
    binary_path().is_some() && std::env::current_exe().is_ok()
}

/// Run the install flow for an armed offer.
pub fn perform() -> Result<(), InstallError> {
    let source = std::env::current_exe()?;

    let target = binary_path().ok_or(InstallError::MissingDirectory("executables"))?;
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(&source, &target)?;

    let entry = desktop_entry_path().ok_or(InstallError::MissingDirectory("applications"))?;
    if let Some(parent) = entry.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&entry, desktop_entry(&target.display().to_string()))?;

    tracing::info!(target = %target.display(), entry = %entry.display(), "installed");
    Ok(())
}

fn binary_path() -> Option<PathBuf> {
    dirs::executable_dir().map(|dir| dir.join(BIN_NAME))
}

fn desktop_entry_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("applications").join(DESKTOP_FILE))
}

fn desktop_entry(exec: &str) -> String {
    format!(
        "[Desktop Entry]\n\
         Type=Application\n\
         Name=Papo\n\
         Comment=Terminal chat client\n\
         Exec={exec}\n\
         Terminal=true\n\
         Categories=Network;Chat;\n"
    )
}
