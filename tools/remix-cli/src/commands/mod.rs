pub mod audio;
pub mod check;
pub mod overlays;
pub mod preview;
pub mod session;
pub mod submit;
pub mod video;

use std::path::Path;

use anyhow::Context;
use remix_session_model::EditSession;

/// Load the session file, or start fresh when it does not exist yet.
pub fn load_session(path: &Path) -> anyhow::Result<EditSession> {
    if !path.exists() {
        return Ok(EditSession::new());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read session file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse session file {}", path.display()))
}

pub fn save_session(path: &Path, session: &EditSession) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(session)?;
    std::fs::write(path, content)
        .with_context(|| format!("failed to write session file {}", path.display()))
}

/// Read a local file for upload, returning its bytes and bare filename.
pub fn read_upload(path: &Path) -> anyhow::Result<(Vec<u8>, String)> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow::anyhow!("{} has no file name", path.display()))?;
    Ok((bytes, filename))
}
