use super::types::{SessionSnapshot, SESSION_VERSION};
use crate::scoring::Report;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use serde::Serialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Get the default session file path (~/.config/ocean-profile/session.json)
pub fn get_session_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join("session.json"))
}

/// Load a session snapshot from a JSON file
///
/// A missing file is an error: there is no assessment in progress.
/// A file with an unsupported version is also an error.
pub fn load_session(path: &Path) -> Result<SessionSnapshot> {
    match find_session(path)? {
        Some(session) => Ok(session),
        None => anyhow::bail!(
            "No assessment in progress at {}. Run `ocean-profile start` first",
            path.display()
        ),
    }
}

/// Load a session snapshot if one exists.
///
/// Only a missing file yields `None`; unreadable, malformed or
/// wrong-version files are errors.
pub fn find_session(path: &Path) -> Result<Option<SessionSnapshot>> {
    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open session file at {}", path.display()))?;

    let session: SessionSnapshot =
        serde_json::from_reader(file).context("Failed to load session")?;

    if session.version != SESSION_VERSION {
        anyhow::bail!("Unsupported session version: {}", session.version);
    }

    Ok(Some(session))
}

/// Save a session snapshot atomically
pub fn save_session(path: &Path, session: &SessionSnapshot) -> Result<()> {
    write_json_atomic(path, session).context("Failed to save session")
}

/// Write an exported report atomically
pub fn save_report(path: &Path, report: &Report) -> Result<()> {
    write_json_atomic(path, report).context("Failed to export report")
}

/// Delete the session file.
/// Returns true if a file was removed.
pub fn clear_session(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path)
        .with_context(|| format!("Failed to remove session file at {}", path.display()))?;
    Ok(true)
}

fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, value).context("Failed to serialize JSON")?;

    file.commit()
        .with_context(|| format!("Failed to commit {}", path.display()))?;

    Ok(())
}
