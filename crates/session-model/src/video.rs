//! Identity of the currently loaded source video.

use serde::{Deserialize, Serialize};

/// The loaded video's identity, as reported by the ingestion endpoints.
///
/// A `VideoState` is replaced wholesale when a new video is loaded and
/// cleared wholesale on removal; it is never partially mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoState {
    /// Server-assigned identifier of the ingested source.
    pub video_id: String,

    /// Stored filename on the service.
    pub filename: String,

    /// Locator for the client-local preview player, when available.
    pub preview_url: Option<String>,

    /// Human-readable title (from the source platform, or the upload name).
    pub title: Option<String>,

    /// Source duration in seconds, when the service could probe it.
    pub duration_secs: Option<f64>,
}

impl VideoState {
    /// Duration to assume for UI ranges when the service did not report one.
    pub const FALLBACK_DURATION_SECS: f64 = 60.0;

    /// Duration in seconds, falling back to the UI default when unknown.
    pub fn duration_or_default(&self) -> f64 {
        self.duration_secs.unwrap_or(Self::FALLBACK_DURATION_SECS)
    }
}
