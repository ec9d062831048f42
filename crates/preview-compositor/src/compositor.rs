//! Session → layered visual description.
//!
//! The preview is a client-local approximation for visual feedback, not the
//! real compositor: the processing service owns authoritative rendering,
//! chroma-key removal, and audio. Composition is pure and synchronous — no
//! network round-trip ever happens here.

use serde::Serialize;

use remix_gesture_control::{GestureController, GestureTarget};
use remix_session_model::{EditSession, TextPosition};

/// Preview text is capped at this size so long hooks stay legible in the
/// small player.
const TEXT_PREVIEW_MAX_PX: f64 = 24.0;

/// Everything a renderer needs to draw one preview frame.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewFrame {
    /// The base media, when a source (or output) is available.
    pub base: Option<BaseLayer>,

    /// Overlay layers in z-order: committed instances first (sequence order),
    /// then the staging overlay on top.
    pub overlays: Vec<OverlayLayer>,

    /// Text layer, when the session has non-empty text.
    pub text: Option<TextLayer>,

    /// Non-authoritative display filters.
    pub filters: DisplayFilters,
}

/// The base video layer.
#[derive(Debug, Clone, Serialize)]
pub struct BaseLayer {
    pub url: String,
    pub title: Option<String>,
    pub duration_secs: Option<f64>,
    /// True when this is the remix output rather than the source preview.
    pub is_output: bool,
}

/// How an overlay layer should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerMedia {
    /// Static image.
    Image,
    /// Muted, auto-playing, looping clip.
    LoopingClip,
    /// Locator not cached yet; draw a placeholder.
    Unresolved,
}

/// A positioned, scaled overlay layer.
#[derive(Debug, Clone, Serialize)]
pub struct OverlayLayer {
    pub asset_id: String,
    /// Where to fetch the media from, when the session has it cached.
    pub locator: Option<String>,
    pub media: LayerMedia,

    /// Left edge, percent of canvas width.
    pub x: f64,
    /// Top edge, percent of canvas height.
    pub y: f64,
    /// Width, percent of canvas width.
    pub width_percent: f64,

    /// Stacking order; higher draws on top.
    pub z: usize,
    /// True for the staged (pre-commit) selection.
    pub staging: bool,
    /// True while a gesture holds this layer (renderers dim it slightly).
    pub held: bool,

    pub handles: Handles,
}

/// Which affordances the layer shows.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Handles {
    pub drag: bool,
    pub resize: bool,
}

/// The text overlay layer.
#[derive(Debug, Clone, Serialize)]
pub struct TextLayer {
    pub content: String,
    pub position: TextPosition,
    /// Font size in preview pixels, scaled down from the requested output
    /// size for legibility.
    pub font_px: f64,
}

/// Color/speed settings applied as display-only filters; the service
/// re-applies them authoritatively at render time.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DisplayFilters {
    pub brightness: i32,
    pub contrast: i32,
    pub saturation: i32,
    pub playback_speed: f64,
}

impl DisplayFilters {
    fn neutral() -> Self {
        Self {
            brightness: 0,
            contrast: 0,
            saturation: 0,
            playback_speed: 1.0,
        }
    }
}

/// Scale a requested output font size down for the preview player.
pub fn preview_font_px(requested: u32) -> f64 {
    (requested as f64 / 2.0).min(TEXT_PREVIEW_MAX_PX)
}

/// Guess how to draw an asset from its locator extension. Matches the
/// catalog's own image/video split.
fn media_kind(locator: Option<&str>) -> LayerMedia {
    match locator {
        None => LayerMedia::Unresolved,
        Some(url) => {
            let lower = url.to_ascii_lowercase();
            if lower.ends_with(".png") {
                LayerMedia::Image
            } else {
                LayerMedia::LoopingClip
            }
        }
    }
}

/// Compose the current preview frame.
///
/// Pure function of the session and the in-flight gesture: committed
/// instances render in sequence order (later = on top), the staging overlay
/// renders above them with the only resize handle, and a captured target's
/// placement comes from the gesture's live value so feedback tracks the
/// pointer before commit. When the session is showing the remix output, the
/// output already has every edit burned in, so no overlay or text layers
/// are emitted.
pub fn compose(session: &EditSession, gesture: &GestureController) -> PreviewFrame {
    let video = session.video();

    if session.showing_output() {
        if let Some(url) = session.output_url() {
            return PreviewFrame {
                base: Some(BaseLayer {
                    url: url.to_string(),
                    title: video.and_then(|v| v.title.clone()),
                    duration_secs: video.and_then(|v| v.duration_secs),
                    is_output: true,
                }),
                overlays: vec![],
                text: None,
                filters: DisplayFilters::neutral(),
            };
        }
    }

    let base = video.and_then(|v| {
        v.preview_url.as_ref().map(|url| BaseLayer {
            url: url.clone(),
            title: v.title.clone(),
            duration_secs: v.duration_secs,
            is_output: false,
        })
    });

    let settings = session.settings();
    let mut overlays = Vec::with_capacity(settings.overlays.len() + 1);

    for (index, instance) in settings.overlays.iter().enumerate() {
        let target = GestureTarget::Committed(index);
        let live = gesture.live_placement(target);
        let (x, y, scale) = match live {
            Some(p) => (p.x, p.y, p.scale),
            None => (instance.x, instance.y, instance.scale),
        };
        let locator = session.locator(&instance.asset_id).map(str::to_string);
        overlays.push(OverlayLayer {
            asset_id: instance.asset_id.clone(),
            media: media_kind(locator.as_deref()),
            locator,
            x,
            y,
            width_percent: scale * 100.0,
            z: index,
            staging: false,
            held: live.is_some(),
            handles: Handles {
                drag: true,
                resize: false,
            },
        });
    }

    if let Some(staged) = settings.staged_instance() {
        let live = gesture.live_placement(GestureTarget::Staging);
        let (x, y, scale) = match live {
            Some(p) => (p.x, p.y, p.scale),
            None => (staged.x, staged.y, staged.scale),
        };
        let locator = session.locator(&staged.asset_id).map(str::to_string);
        overlays.push(OverlayLayer {
            asset_id: staged.asset_id,
            media: media_kind(locator.as_deref()),
            locator,
            x,
            y,
            width_percent: scale * 100.0,
            z: settings.overlays.len(),
            staging: true,
            held: live.is_some(),
            handles: Handles {
                drag: true,
                resize: true,
            },
        });
    }

    let text = if settings.text_overlay.is_empty() {
        None
    } else {
        Some(TextLayer {
            content: settings.text_overlay.clone(),
            position: settings.text_position,
            font_px: preview_font_px(settings.text_font_size),
        })
    };

    PreviewFrame {
        base,
        overlays,
        text,
        filters: DisplayFilters {
            brightness: settings.brightness,
            contrast: settings.contrast,
            saturation: settings.saturation,
            playback_speed: settings.playback_speed,
        },
    }
}
