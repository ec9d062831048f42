//! Getting a base video into the session.

use std::path::{Path, PathBuf};

use remix_service_client::ServiceClient;
use remix_session_model::VideoState;

use super::{load_session, read_upload, save_session};

pub fn download(client: &ServiceClient, url: &str, session_path: &Path) -> anyhow::Result<()> {
    println!("Downloading {url}...");
    let video = client.download_video(url)?;
    describe(&video);
    load_into_session(video, session_path)
}

pub fn upload(client: &ServiceClient, path: PathBuf, session_path: &Path) -> anyhow::Result<()> {
    let (bytes, filename) = read_upload(&path)?;
    println!("Uploading {filename} ({} bytes)...", bytes.len());
    let video = client.upload_video(&filename, &bytes)?;
    describe(&video);
    load_into_session(video, session_path)
}

fn describe(video: &VideoState) {
    println!("Loaded video '{}'", video.video_id);
    if let Some(title) = &video.title {
        println!("  Title: {title}");
    }
    println!("  Filename: {}", video.filename);
    match video.duration_secs {
        Some(duration) => println!("  Duration: {duration:.1}s"),
        None => println!("  Duration: unknown"),
    }
    if let Some(preview) = &video.preview_url {
        println!("  Preview: {preview}");
    }
}

fn load_into_session(video: VideoState, session_path: &Path) -> anyhow::Result<()> {
    let mut session = load_session(session_path)?;
    session.load_video(video);
    save_session(session_path, &session)?;
    println!("Session saved to {}", session_path.display());
    Ok(())
}

/// Unload the video and ask the service to drop its temp files.
pub fn clear(client: &ServiceClient, session_path: &Path) -> anyhow::Result<()> {
    let mut session = load_session(session_path)?;
    let Some(video) = session.video().cloned() else {
        println!("No video loaded.");
        return Ok(());
    };

    client.cleanup_video(&video.video_id)?;
    session.clear_video();
    save_session(session_path, &session)?;
    println!("Cleared video '{}'", video.video_id);
    Ok(())
}
