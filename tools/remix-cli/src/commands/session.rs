//! Session file editing.

use std::path::Path;

use clap::Args;
use remix_session_model::overlay::{SCALE_MAX, SCALE_MIN, Y_MAX_PERCENT};
use remix_session_model::{ChromaKey, EditSession, EditSettings, SettingsPatch, TextPosition};

use super::{load_session, save_session};
use crate::SessionCommands;

/// Minimum gap the trim window must keep between start and end, seconds.
const TRIM_MIN_GAP_SECS: f64 = 1.0;

/// Settings updates, applied as one shallow merge. Flags that are not
/// given leave the current value untouched.
///
/// The store is permissive by contract, so range checks live here, at the
/// control site, before anything is saved.
#[derive(Args, Default)]
pub struct SetArgs {
    /// Staged overlay x, percent from the left
    #[arg(long)]
    x: Option<f64>,

    /// Staged overlay y, percent from the top
    #[arg(long)]
    y: Option<f64>,

    /// Staged overlay scale, fraction of video width [0.1, 0.6]
    #[arg(long)]
    scale: Option<f64>,

    /// Chroma-key mode: none|green|black
    #[arg(long, value_parser = ["none", "green", "black"])]
    chroma: Option<String>,

    /// Replacement audio track id
    #[arg(long)]
    audio: Option<String>,

    /// Drop the replacement audio selection
    #[arg(long, conflicts_with = "audio")]
    clear_audio: bool,

    /// Mute the original audio track
    #[arg(long)]
    remove_original_audio: Option<bool>,

    /// Text overlay content (empty string removes the text)
    #[arg(long)]
    text: Option<String>,

    /// Text anchor: top-left|top-center|top-right|center|bottom-center
    #[arg(long, value_parser = ["top-left", "top-center", "top-right", "center", "bottom-center"])]
    text_position: Option<String>,

    /// Text font size in pixels
    #[arg(long)]
    font_size: Option<u32>,

    /// Trim start, seconds from the source start
    #[arg(long)]
    trim_start: Option<f64>,

    /// Trim end in seconds
    #[arg(long)]
    trim_end: Option<f64>,

    /// Trim through the end of the source
    #[arg(long, conflicts_with = "trim_end")]
    no_trim_end: bool,

    /// Brightness offset [-50, 50]
    #[arg(long)]
    brightness: Option<i32>,

    /// Contrast offset [-50, 50]
    #[arg(long)]
    contrast: Option<i32>,

    /// Saturation offset [-50, 50]
    #[arg(long)]
    saturation: Option<i32>,

    /// Playback speed multiplier [0.5, 2.0]
    #[arg(long)]
    speed: Option<f64>,
}

impl SetArgs {
    /// Check the update against the placement and trim invariants, merged
    /// over the current settings so cross-field rules see the effective
    /// values.
    fn validate(&self, settings: &EditSettings) -> anyhow::Result<()> {
        let scale = self.scale.unwrap_or(settings.overlay_scale);
        if let Some(value) = self.scale {
            if !(SCALE_MIN..=SCALE_MAX).contains(&value) {
                anyhow::bail!("--scale must be in [{SCALE_MIN}, {SCALE_MAX}], got {value}");
            }
        }
        if let Some(x) = self.x {
            let max_x = 100.0 - scale * 100.0;
            if !(0.0..=max_x).contains(&x) {
                anyhow::bail!("--x must be in [0, {max_x}] at scale {scale}, got {x}");
            }
        }
        if let Some(y) = self.y {
            if !(0.0..=Y_MAX_PERCENT).contains(&y) {
                anyhow::bail!("--y must be in [0, {Y_MAX_PERCENT}], got {y}");
            }
        }

        let trim_start = self.trim_start.unwrap_or(settings.trim_start);
        if trim_start < 0.0 {
            anyhow::bail!("--trim-start must not be negative, got {trim_start}");
        }
        let trim_end = if self.no_trim_end {
            None
        } else {
            self.trim_end.or(settings.trim_end)
        };
        if let Some(end) = trim_end {
            if end < trim_start + TRIM_MIN_GAP_SECS {
                anyhow::bail!(
                    "--trim-end must exceed the trim start by at least \
                     {TRIM_MIN_GAP_SECS}s (start {trim_start}, end {end})"
                );
            }
        }

        for (flag, value) in [
            ("--brightness", self.brightness),
            ("--contrast", self.contrast),
            ("--saturation", self.saturation),
        ] {
            if let Some(value) = value {
                if !(-50..=50).contains(&value) {
                    anyhow::bail!("{flag} must be in [-50, 50], got {value}");
                }
            }
        }
        if let Some(speed) = self.speed {
            if !(0.5..=2.0).contains(&speed) {
                anyhow::bail!("--speed must be in [0.5, 2.0], got {speed}");
            }
        }
        Ok(())
    }

    fn into_patch(self, settings: &EditSettings) -> anyhow::Result<SettingsPatch> {
        self.validate(settings)?;
        Ok(SettingsPatch {
            overlay_x: self.x,
            overlay_y: self.y,
            overlay_scale: self.scale,
            chroma: self.chroma.as_deref().map(parse_chroma),
            audio_id: if self.clear_audio {
                Some(None)
            } else {
                self.audio.map(Some)
            },
            remove_original_audio: self.remove_original_audio,
            text_overlay: self.text,
            text_position: self.text_position.as_deref().map(parse_text_position),
            text_font_size: self.font_size,
            trim_start: self.trim_start,
            trim_end: if self.no_trim_end {
                Some(None)
            } else {
                self.trim_end.map(Some)
            },
            brightness: self.brightness,
            contrast: self.contrast,
            saturation: self.saturation,
            playback_speed: self.speed,
            ..Default::default()
        })
    }
}

fn parse_chroma(value: &str) -> ChromaKey {
    match value {
        "none" => ChromaKey::None,
        "black" => ChromaKey::Black,
        _ => ChromaKey::Green,
    }
}

fn parse_text_position(value: &str) -> TextPosition {
    match value {
        "top-left" => TextPosition::TopLeft,
        "top-right" => TextPosition::TopRight,
        "center" => TextPosition::Center,
        "bottom-center" => TextPosition::BottomCenter,
        _ => TextPosition::TopCenter,
    }
}

pub fn run(command: SessionCommands, path: &Path) -> anyhow::Result<()> {
    match command {
        SessionCommands::Init => {
            let session = EditSession::new();
            save_session(path, &session)?;
            println!("Created {}", path.display());
            Ok(())
        }
        SessionCommands::Show => {
            let session = load_session(path)?;
            show(&session);
            Ok(())
        }
        SessionCommands::Stage { id } => {
            let mut session = load_session(path)?;
            session.stage_overlay(id.clone());
            save_session(path, &session)?;
            println!("Staged overlay '{id}'");
            Ok(())
        }
        SessionCommands::Commit => {
            let mut session = load_session(path)?;
            let instance = session
                .settings()
                .staged_instance()
                .ok_or_else(|| anyhow::anyhow!("no overlay staged"))?;
            session.push_overlay(instance);
            session.clear_staged();
            save_session(path, &session)?;
            println!(
                "Committed overlay ({} in the sequence)",
                session.settings().overlays.len()
            );
            Ok(())
        }
        SessionCommands::Remove { index } => {
            let mut session = load_session(path)?;
            let before = session.settings().overlays.len();
            session.remove_overlay(index);
            if session.settings().overlays.len() == before {
                anyhow::bail!("no overlay at index {index} ({before} committed)");
            }
            save_session(path, &session)?;
            println!("Removed overlay {index}");
            Ok(())
        }
        SessionCommands::Set(args) => {
            let mut session = load_session(path)?;
            let patch = args.into_patch(session.settings())?;
            session.apply(patch);
            save_session(path, &session)?;
            println!("Settings updated");
            Ok(())
        }
        SessionCommands::ResetFilters => {
            let mut session = load_session(path)?;
            session.reset_filters();
            save_session(path, &session)?;
            println!("Filters reset to neutral");
            Ok(())
        }
        SessionCommands::View { side } => {
            let mut session = load_session(path)?;
            if side == "remixed" {
                if session.output_url().is_none() {
                    anyhow::bail!("no remix output recorded; run `remix submit` first");
                }
                session.show_remixed();
            } else {
                session.show_original();
            }
            save_session(path, &session)?;
            println!("Preview shows the {side} video");
            Ok(())
        }
    }
}

fn show(session: &EditSession) {
    match session.video() {
        Some(video) => {
            println!("Video: {} ({})", video.video_id, video.filename);
            println!("  Duration: {:.1}s", video.duration_or_default());
        }
        None => println!("Video: none loaded"),
    }

    let settings = session.settings();
    println!("Overlays: {} committed", settings.overlays.len());
    for (index, overlay) in settings.overlays.iter().enumerate() {
        println!(
            "  [{index}] {} at ({:.1}, {:.1}) scale {:.2} chroma {:?}",
            overlay.asset_id, overlay.x, overlay.y, overlay.scale, overlay.chroma
        );
    }
    match &settings.overlay_id {
        Some(id) => println!(
            "Staged: {} at ({:.1}, {:.1}) scale {:.2}",
            id, settings.overlay_x, settings.overlay_y, settings.overlay_scale
        ),
        None => println!("Staged: none"),
    }

    match &settings.audio_id {
        Some(id) => println!("Audio: {id} (mute original: {})", settings.remove_original_audio),
        None => println!("Audio: original track"),
    }

    if settings.text_overlay.is_empty() {
        println!("Text: none");
    } else {
        println!(
            "Text: \"{}\" ({:?}, {}px)",
            settings.text_overlay, settings.text_position, settings.text_font_size
        );
    }

    match settings.trim_end {
        Some(end) => println!("Trim: {:.1}s - {:.1}s", settings.trim_start, end),
        None => println!("Trim: {:.1}s - end", settings.trim_start),
    }
    println!(
        "Filters: brightness {} contrast {} saturation {} speed {:.2}x",
        settings.brightness, settings.contrast, settings.saturation, settings.playback_speed
    );

    match session.output_url() {
        Some(url) if session.showing_output() => println!("Output: {url} (previewing)"),
        Some(url) => println!("Output: {url}"),
        None => println!("Output: none"),
    }
}
