//! Mutable edit settings and the partial-update patch.

use serde::{Deserialize, Serialize};

use crate::overlay::{ChromaKey, OverlayInstance, OverlayPosition, TextPosition};

/// All mutable edit settings for the loaded video.
///
/// The store enforces no validation; the documented invariants (placement
/// bounds, exclusive chroma mode, `trim_end > trim_start + 1` when set) are
/// a contract its callers uphold. `trim_end = None` means "through end of
/// source".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditSettings {
    /// Ordered overlay placements. Order is insertion order and render
    /// z-order. When non-empty, the legacy staged selection below is
    /// ignored by the request builder.
    pub overlays: Vec<OverlayInstance>,

    /// Legacy single-overlay selection: the staged, pre-commit asset.
    pub overlay_id: Option<String>,
    pub overlay_position: OverlayPosition,
    /// Staged placement, percent of canvas.
    pub overlay_x: f64,
    pub overlay_y: f64,
    /// Staged scale, fraction of canvas width.
    pub overlay_scale: f64,
    /// Staged chroma-key mode.
    pub chroma: ChromaKey,

    /// Replacement audio track from the catalog, when selected.
    pub audio_id: Option<String>,
    pub remove_original_audio: bool,

    /// Text overlay content; empty string means no text.
    pub text_overlay: String,
    pub text_position: TextPosition,
    /// Requested output font size in pixels.
    pub text_font_size: u32,

    /// Trim window start, seconds from the source start.
    pub trim_start: f64,
    /// Trim window end in seconds; `None` = through end of source.
    pub trim_end: Option<f64>,

    /// Signed color offsets, each in `[-50, 50]`.
    pub brightness: i32,
    pub contrast: i32,
    pub saturation: i32,

    /// Playback speed multiplier, `[0.5, 2.0]` in the UI.
    pub playback_speed: f64,
}

impl Default for EditSettings {
    fn default() -> Self {
        Self {
            overlays: vec![],
            overlay_id: None,
            overlay_position: OverlayPosition::BottomRight,
            overlay_x: 70.0,
            overlay_y: 70.0,
            overlay_scale: 0.25,
            chroma: ChromaKey::Green,
            audio_id: None,
            remove_original_audio: false,
            text_overlay: String::new(),
            text_position: TextPosition::TopCenter,
            text_font_size: 48,
            trim_start: 0.0,
            trim_end: None,
            brightness: 0,
            contrast: 0,
            saturation: 0,
            playback_speed: 1.0,
        }
    }
}

impl EditSettings {
    /// Resolve which overlay shape the remix request should carry.
    ///
    /// The legacy-vs-multi duplication is a compatibility seam with older
    /// deployments of the processing service, resolved exactly once here.
    pub fn overlay_plan(&self) -> OverlayPlan {
        if !self.overlays.is_empty() {
            OverlayPlan::Multi(self.overlays.clone())
        } else {
            OverlayPlan::Legacy(StagedSelection {
                overlay_id: self.overlay_id.clone(),
                position: self.overlay_position,
                x: self.overlay_x,
                y: self.overlay_y,
                scale: self.overlay_scale,
                chroma: self.chroma,
            })
        }
    }

    /// The staged selection as an instance, for preview rendering.
    /// `None` when no asset is staged.
    pub fn staged_instance(&self) -> Option<OverlayInstance> {
        self.overlay_id.as_ref().map(|id| OverlayInstance {
            asset_id: id.clone(),
            x: self.overlay_x,
            y: self.overlay_y,
            scale: self.overlay_scale,
            chroma: self.chroma,
        })
    }

    /// Reset the display filters and speed to neutral.
    pub fn reset_filters(&mut self) {
        self.brightness = 0;
        self.contrast = 0;
        self.saturation = 0;
        self.playback_speed = 1.0;
    }
}

/// The staged single-overlay selection, used when the instance list is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedSelection {
    pub overlay_id: Option<String>,
    pub position: OverlayPosition,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub chroma: ChromaKey,
}

/// Which overlay shape a remix request carries: the newer instance list or
/// the legacy single selection. Transitional; goes away once every deployed
/// service accepts the list form.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayPlan {
    Legacy(StagedSelection),
    Multi(Vec<OverlayInstance>),
}

/// A partial update to [`EditSettings`].
///
/// Applying a patch is a shallow merge: every `None` field leaves the
/// current value untouched. The `overlays` field, when present, replaces
/// the whole sequence — instances are never merged element-wise, keeping
/// ordering and identity unambiguous. Fields that are themselves optional
/// in the settings use a nested `Option` so a patch can clear them.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub overlays: Option<Vec<OverlayInstance>>,
    pub overlay_id: Option<Option<String>>,
    pub overlay_position: Option<OverlayPosition>,
    pub overlay_x: Option<f64>,
    pub overlay_y: Option<f64>,
    pub overlay_scale: Option<f64>,
    pub chroma: Option<ChromaKey>,
    pub audio_id: Option<Option<String>>,
    pub remove_original_audio: Option<bool>,
    pub text_overlay: Option<String>,
    pub text_position: Option<TextPosition>,
    pub text_font_size: Option<u32>,
    pub trim_start: Option<f64>,
    pub trim_end: Option<Option<f64>>,
    pub brightness: Option<i32>,
    pub contrast: Option<i32>,
    pub saturation: Option<i32>,
    pub playback_speed: Option<f64>,
}

impl SettingsPatch {
    /// Merge this patch into `settings`.
    pub fn apply(self, settings: &mut EditSettings) {
        if let Some(overlays) = self.overlays {
            settings.overlays = overlays;
        }
        if let Some(overlay_id) = self.overlay_id {
            settings.overlay_id = overlay_id;
        }
        if let Some(position) = self.overlay_position {
            settings.overlay_position = position;
        }
        if let Some(x) = self.overlay_x {
            settings.overlay_x = x;
        }
        if let Some(y) = self.overlay_y {
            settings.overlay_y = y;
        }
        if let Some(scale) = self.overlay_scale {
            settings.overlay_scale = scale;
        }
        if let Some(chroma) = self.chroma {
            settings.chroma = chroma;
        }
        if let Some(audio_id) = self.audio_id {
            settings.audio_id = audio_id;
        }
        if let Some(remove) = self.remove_original_audio {
            settings.remove_original_audio = remove;
        }
        if let Some(text) = self.text_overlay {
            settings.text_overlay = text;
        }
        if let Some(position) = self.text_position {
            settings.text_position = position;
        }
        if let Some(size) = self.text_font_size {
            settings.text_font_size = size;
        }
        if let Some(start) = self.trim_start {
            settings.trim_start = start;
        }
        if let Some(end) = self.trim_end {
            settings.trim_end = end;
        }
        if let Some(brightness) = self.brightness {
            settings.brightness = brightness;
        }
        if let Some(contrast) = self.contrast {
            settings.contrast = contrast;
        }
        if let Some(saturation) = self.saturation {
            settings.saturation = saturation;
        }
        if let Some(speed) = self.playback_speed {
            settings.playback_speed = speed;
        }
    }
}
