//! Getting a base video into the service: download-by-URL or direct upload.

use remix_common::{StudioError, StudioResult};
use remix_session_model::VideoState;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::ServiceClient;
use crate::multipart;

const VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "mov", "avi", "webm", "mkv"];

#[derive(Serialize)]
struct DownloadRequest<'a> {
    url: &'a str,
    remove_watermark: bool,
}

#[derive(Deserialize)]
struct DownloadReceipt {
    video_id: String,
    filename: String,
    #[serde(default)]
    duration: Option<f64>,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Deserialize)]
struct UploadVideoReceipt {
    video_id: String,
    filename: String,
}

impl ServiceClient {
    /// Ask the service to fetch a video from a public URL. Blocks until the
    /// service has the file on disk.
    pub fn download_video(&self, url: &str) -> StudioResult<VideoState> {
        let url = url.trim();
        if url.is_empty() {
            return Err(StudioError::validation("video URL must not be empty"));
        }
        let receipt: DownloadReceipt = self
            .post_json(
                "/api/download/",
                &DownloadRequest { url, remove_watermark: true },
                "download video",
            )
            .map_err(|e| e.into_transport())?;
        info!(video_id = %receipt.video_id, "video downloaded");
        Ok(VideoState {
            preview_url: Some(self.url(&format!("/api/download/preview/{}", receipt.video_id))),
            video_id: receipt.video_id,
            filename: receipt.filename,
            title: receipt.title,
            duration_secs: receipt.duration,
        })
    }

    /// Push a local video file to the service instead of downloading one.
    pub fn upload_video(&self, filename: &str, bytes: &[u8]) -> StudioResult<VideoState> {
        if filename.trim().is_empty() {
            return Err(StudioError::validation("video filename must not be empty"));
        }
        let ext = multipart::extension(filename).unwrap_or_default();
        if !VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            return Err(StudioError::upload(format!(
                "unsupported video format '{filename}', expected one of: {}",
                VIDEO_EXTENSIONS.join(", ")
            )));
        }
        let receipt: UploadVideoReceipt = self
            .post_file("/api/process/upload-video", filename, bytes, "upload video")
            .map_err(|e| StudioError::upload(e.detail()))?;
        info!(video_id = %receipt.video_id, "video uploaded");
        Ok(VideoState {
            preview_url: Some(self.url(&format!("/api/download/preview/{}", receipt.video_id))),
            video_id: receipt.video_id,
            filename: receipt.filename,
            title: Some(filename.to_string()),
            duration_secs: None,
        })
    }

    /// Drop the service's temporary files for a video that is no longer
    /// loaded.
    pub fn cleanup_video(&self, video_id: &str) -> StudioResult<()> {
        self.delete(&format!("/api/process/cleanup/{video_id}"), "cleanup video")
            .map_err(|e| e.into_transport())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url_rejected_before_any_call() {
        let client = ServiceClient::new("http://localhost:8000");
        assert!(matches!(
            client.download_video("   "),
            Err(StudioError::Validation { .. })
        ));
    }

    #[test]
    fn test_unsupported_video_extension_rejected() {
        let client = ServiceClient::new("http://localhost:8000");
        assert!(matches!(
            client.upload_video("notes.txt", b"x"),
            Err(StudioError::Upload { .. })
        ));
        assert!(matches!(
            client.upload_video("", b"x"),
            Err(StudioError::Validation { .. })
        ));
    }

    #[test]
    fn test_download_receipt_parses_with_nulls() {
        let json = r#"{"success": true, "video_id": "ab12cd34", "filename": "ab12cd34.mp4",
                       "duration": null, "thumbnail": null, "title": "Video", "message": "ok"}"#;
        let receipt: DownloadReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.video_id, "ab12cd34");
        assert!(receipt.duration.is_none());
        assert_eq!(receipt.title.as_deref(), Some("Video"));
    }
}
