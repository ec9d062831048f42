//! Audio catalog management.

use std::path::PathBuf;

use remix_service_client::ServiceClient;

use super::read_upload;

pub fn list(client: &ServiceClient) -> anyhow::Result<()> {
    let tracks = client.list_audio()?;
    if tracks.is_empty() {
        println!("No audio tracks in the catalog.");
        return Ok(());
    }

    println!("Audio tracks ({}):", tracks.len());
    for track in tracks {
        println!("  {:20} {}", track.id, track.url);
    }
    Ok(())
}

pub fn upload(client: &ServiceClient, path: PathBuf) -> anyhow::Result<()> {
    let (bytes, filename) = read_upload(&path)?;
    let track = client.upload_audio(&filename, &bytes)?;
    println!("Uploaded audio '{}' ({})", track.id, track.url);
    Ok(())
}

pub fn delete(client: &ServiceClient, id: &str) -> anyhow::Result<()> {
    client.delete_audio(id)?;
    println!("Deleted audio '{id}'");
    Ok(())
}
