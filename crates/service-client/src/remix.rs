//! Serializing an edit session into the processing service's remix contract.

use remix_common::{StudioError, StudioResult};
use remix_session_model::{
    EditSession, OverlayInstance, OverlayPlan, OverlayPosition, TextPosition,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::ServiceClient;

/// One overlay placement in the wire shape the service consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayItem {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub remove_green_screen: bool,
    pub remove_black_screen: bool,
}

impl From<&OverlayInstance> for OverlayItem {
    fn from(instance: &OverlayInstance) -> Self {
        let (remove_green_screen, remove_black_screen) = instance.chroma.to_flags();
        OverlayItem {
            id: instance.asset_id.clone(),
            x: instance.x,
            y: instance.y,
            scale: instance.scale,
            remove_green_screen,
            remove_black_screen,
        }
    }
}

/// The full remix submission body.
///
/// Carries both the overlay instance list and the legacy single-overlay
/// fields; exactly one of the two shapes is populated, decided by
/// [`EditSettings::overlay_plan`]. Nullable fields serialize as explicit
/// `null` rather than being omitted, matching what the service's own web
/// client sends.
///
/// [`EditSettings::overlay_plan`]: remix_session_model::EditSettings::overlay_plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemixRequest {
    pub video_id: String,

    pub overlays: Option<Vec<OverlayItem>>,

    pub overlay_id: Option<String>,
    pub overlay_position: OverlayPosition,
    pub overlay_x: Option<f64>,
    pub overlay_y: Option<f64>,
    pub overlay_scale: f64,
    pub remove_green_screen: bool,
    pub remove_black_screen: bool,

    pub audio_id: Option<String>,
    pub remove_original_audio: bool,

    pub text_overlay: Option<String>,
    pub text_position: TextPosition,
    pub text_x: Option<f64>,
    pub text_y: Option<f64>,
    pub text_font_size: u32,

    pub trim_start: f64,
    /// `None` means "through end of source".
    pub trim_end: Option<f64>,
    pub brightness: i32,
    pub contrast: i32,
    pub saturation: i32,
    pub playback_speed: f64,
}

impl RemixRequest {
    /// Build a request from the current session state.
    ///
    /// No re-validation happens here beyond requiring a loaded video; the
    /// store's invariants are trusted as-is.
    pub fn from_session(session: &EditSession) -> StudioResult<Self> {
        let video = session
            .video()
            .ok_or_else(|| StudioError::validation("no video loaded"))?;
        let settings = session.settings();

        let (overlays, overlay_id, overlay_position, overlay_x, overlay_y, overlay_scale, chroma) =
            match settings.overlay_plan() {
                OverlayPlan::Multi(instances) => (
                    Some(instances.iter().map(OverlayItem::from).collect()),
                    None,
                    settings.overlay_position,
                    None,
                    None,
                    settings.overlay_scale,
                    settings.chroma,
                ),
                OverlayPlan::Legacy(staged) => {
                    // Explicit coordinates only accompany an actual selection;
                    // without one the service's anchor default applies.
                    let (x, y) = match staged.overlay_id {
                        Some(_) => (Some(staged.x), Some(staged.y)),
                        None => (None, None),
                    };
                    (
                        None,
                        staged.overlay_id,
                        staged.position,
                        x,
                        y,
                        staged.scale,
                        staged.chroma,
                    )
                }
            };
        let (remove_green_screen, remove_black_screen) = chroma.to_flags();

        let text_overlay = match settings.text_overlay.trim() {
            "" => None,
            text => Some(text.to_string()),
        };

        Ok(RemixRequest {
            video_id: video.video_id.clone(),
            overlays,
            overlay_id,
            overlay_position,
            overlay_x,
            overlay_y,
            overlay_scale,
            remove_green_screen,
            remove_black_screen,
            audio_id: settings.audio_id.clone(),
            remove_original_audio: settings.remove_original_audio,
            text_overlay,
            text_position: settings.text_position,
            text_x: None,
            text_y: None,
            text_font_size: settings.text_font_size,
            trim_start: settings.trim_start,
            trim_end: settings.trim_end,
            brightness: settings.brightness,
            contrast: settings.contrast,
            saturation: settings.saturation,
            playback_speed: settings.playback_speed,
        })
    }
}

/// The service's answer to a remix submission.
#[derive(Debug, Clone, Deserialize)]
pub struct RemixResponse {
    pub success: bool,
    pub output_filename: String,
    pub output_url: String,
    pub message: String,
}

impl ServiceClient {
    /// Submit the session for processing. Blocks until the service has
    /// finished rendering; the returned `output_url` is service-relative.
    pub fn submit_remix(&self, session: &EditSession) -> StudioResult<RemixResponse> {
        let request = RemixRequest::from_session(session)?;
        info!(video_id = %request.video_id, multi = request.overlays.is_some(), "submitting remix");
        let response: RemixResponse = self
            .post_json("/api/process/remix", &request, "remix")
            .map_err(|e| match e.status() {
                Some(404) => StudioError::not_found(format!("video '{}'", request.video_id)),
                Some(_) => StudioError::processing(e.detail()),
                None => e.into_transport(),
            })?;
        info!(output = %response.output_url, "remix complete");
        Ok(response)
    }
}
