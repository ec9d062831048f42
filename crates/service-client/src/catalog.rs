//! Overlay and audio asset catalog operations.

use remix_common::{StudioError, StudioResult};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::ServiceClient;
use crate::multipart;

const OVERLAY_EXTENSIONS: [&str; 5] = ["mov", "mp4", "webm", "gif", "png"];
const AUDIO_EXTENSIONS: [&str; 4] = ["mp3", "wav", "m4a", "aac"];

/// Whether an overlay asset renders as a still image or a looping clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    fn from_filename(filename: &str) -> Self {
        match multipart::extension(filename).as_deref() {
            Some("png") => MediaKind::Image,
            _ => MediaKind::Video,
        }
    }
}

/// A reusable overlay stored by the remote catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayAsset {
    pub id: String,
    pub filename: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

/// An audio track stored by the remote catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioAsset {
    pub id: String,
    pub filename: String,
    pub url: String,
}

#[derive(Deserialize)]
struct OverlayListing {
    overlays: Vec<OverlayAsset>,
}

#[derive(Deserialize)]
struct AudioListing {
    audio: Vec<AudioAsset>,
}

#[derive(Deserialize)]
struct UploadReceipt {
    id: String,
    filename: String,
    url: String,
}

fn require_extension(filename: &str, allowed: &[&str]) -> StudioResult<()> {
    let ext = multipart::extension(filename).unwrap_or_default();
    if allowed.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(StudioError::upload(format!(
            "unsupported file format '{filename}', expected one of: {}",
            allowed.join(", ")
        )))
    }
}

impl ServiceClient {
    /// Fetch all overlay assets the catalog knows about.
    pub fn list_overlays(&self) -> StudioResult<Vec<OverlayAsset>> {
        let listing: OverlayListing = self
            .get_json("/api/assets/overlays", "list overlays")
            .map_err(|e| e.into_transport())?;
        Ok(listing.overlays)
    }

    /// Fetch all audio tracks in the catalog.
    pub fn list_audio(&self) -> StudioResult<Vec<AudioAsset>> {
        let listing: AudioListing = self
            .get_json("/api/assets/audio", "list audio")
            .map_err(|e| e.into_transport())?;
        Ok(listing.audio)
    }

    /// Upload a new overlay. The filename's extension is checked before
    /// any bytes go on the wire.
    pub fn upload_overlay(&self, filename: &str, bytes: &[u8]) -> StudioResult<OverlayAsset> {
        require_extension(filename, &OVERLAY_EXTENSIONS)?;
        let receipt: UploadReceipt = self
            .post_file("/api/assets/overlays/upload", filename, bytes, "upload overlay")
            .map_err(|e| StudioError::upload(e.detail()))?;
        info!(id = %receipt.id, "overlay uploaded");
        Ok(OverlayAsset {
            kind: MediaKind::from_filename(&receipt.filename),
            id: receipt.id,
            filename: receipt.filename,
            url: receipt.url,
        })
    }

    /// Upload a new audio track.
    pub fn upload_audio(&self, filename: &str, bytes: &[u8]) -> StudioResult<AudioAsset> {
        require_extension(filename, &AUDIO_EXTENSIONS)?;
        let receipt: UploadReceipt = self
            .post_file("/api/assets/audio/upload", filename, bytes, "upload audio")
            .map_err(|e| StudioError::upload(e.detail()))?;
        info!(id = %receipt.id, "audio uploaded");
        Ok(AudioAsset {
            id: receipt.id,
            filename: receipt.filename,
            url: receipt.url,
        })
    }

    /// Delete an overlay asset. Callers are responsible for clearing any
    /// session references to the deleted id.
    pub fn delete_overlay(&self, id: &str) -> StudioResult<()> {
        self.delete(&format!("/api/assets/overlays/{id}"), "delete overlay")
            .map_err(|e| match e.status() {
                Some(404) => StudioError::not_found(format!("overlay '{id}'")),
                _ => e.into_transport(),
            })
    }

    /// Delete an audio track.
    pub fn delete_audio(&self, id: &str) -> StudioResult<()> {
        self.delete(&format!("/api/assets/audio/{id}"), "delete audio")
            .map_err(|e| match e.status() {
                Some(404) => StudioError::not_found(format!("audio '{id}'")),
                _ => e.into_transport(),
            })
    }

    /// Ask the service to derive a background-free copy of an overlay.
    /// The source asset is never mutated; the result is a brand-new asset.
    pub fn remove_background(&self, id: &str) -> StudioResult<OverlayAsset> {
        let receipt: UploadReceipt = self
            .post_json(
                &format!("/api/assets/overlays/{id}/remove-background"),
                &serde_json::json!({}),
                "remove background",
            )
            .map_err(|e| StudioError::processing(e.detail()))?;
        info!(source = %id, derived = %receipt.id, "background removed");
        Ok(OverlayAsset {
            kind: MediaKind::from_filename(&receipt.filename),
            id: receipt.id,
            filename: receipt.filename,
            url: receipt.url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_listing_parses() {
        let json = r#"{"overlays": [
            {"id": "dino", "filename": "dino.webm", "url": "/assets/overlays/dino.webm", "size": 1024, "type": "video"},
            {"id": "logo", "filename": "logo.png", "url": "/assets/overlays/logo.png", "size": 64, "type": "image"}
        ]}"#;
        let listing: OverlayListing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.overlays.len(), 2);
        assert_eq!(listing.overlays[0].kind, MediaKind::Video);
        assert_eq!(listing.overlays[1].kind, MediaKind::Image);
    }

    #[test]
    fn test_audio_listing_parses() {
        let json = r#"{"audio": [
            {"id": "beat.mp3", "filename": "beat.mp3", "url": "/assets/audio/beat.mp3", "size": 2048}
        ]}"#;
        let listing: AudioListing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.audio[0].id, "beat.mp3");
    }

    #[test]
    fn test_extension_checks() {
        assert!(require_extension("dino.WEBM", &OVERLAY_EXTENSIONS).is_ok());
        assert!(matches!(
            require_extension("script.exe", &OVERLAY_EXTENSIONS),
            Err(StudioError::Upload { .. })
        ));
        assert!(require_extension("track.m4a", &AUDIO_EXTENSIONS).is_ok());
        assert!(matches!(
            require_extension("clip.mp4", &AUDIO_EXTENSIONS),
            Err(StudioError::Upload { .. })
        ));
    }

    #[test]
    fn test_media_kind_from_filename() {
        assert_eq!(MediaKind::from_filename("a.png"), MediaKind::Image);
        assert_eq!(MediaKind::from_filename("a.gif"), MediaKind::Video);
    }
}
