//! Overlay catalog management.

use std::path::{Path, PathBuf};

use remix_service_client::{MediaKind, ServiceClient};

use super::{load_session, read_upload, save_session};

pub fn list(client: &ServiceClient) -> anyhow::Result<()> {
    let overlays = client.list_overlays()?;
    if overlays.is_empty() {
        println!("No overlay assets in the catalog.");
        return Ok(());
    }

    println!("Overlay assets ({}):", overlays.len());
    for asset in overlays {
        let kind = match asset.kind {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        };
        println!("  {:20} {:6} {}", asset.id, kind, asset.url);
    }
    Ok(())
}

pub fn upload(client: &ServiceClient, path: PathBuf) -> anyhow::Result<()> {
    let (bytes, filename) = read_upload(&path)?;
    let asset = client.upload_overlay(&filename, &bytes)?;
    println!("Uploaded overlay '{}' ({})", asset.id, asset.url);
    Ok(())
}

/// Delete an overlay from the catalog, then scrub the session so no stale
/// reference survives the deletion.
pub fn delete(client: &ServiceClient, id: &str, session_path: &Path) -> anyhow::Result<()> {
    client.delete_overlay(id)?;
    println!("Deleted overlay '{id}'");

    let mut session = load_session(session_path)?;
    let before = session.settings().overlays.len();
    let staged = session.settings().overlay_id.as_deref() == Some(id);
    session.forget_asset(id);
    let removed = before - session.settings().overlays.len();
    if removed > 0 || staged {
        save_session(session_path, &session)?;
        println!("Scrubbed '{id}' from the session file");
    }
    Ok(())
}

pub fn remove_background(client: &ServiceClient, id: &str) -> anyhow::Result<()> {
    println!("Removing background from '{id}'...");
    let derived = client.remove_background(id)?;
    println!("Created '{}' ({})", derived.id, derived.url);
    Ok(())
}
