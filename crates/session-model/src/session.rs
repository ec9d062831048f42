//! The edit-session state store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::overlay::OverlayInstance;
use crate::settings::{EditSettings, SettingsPatch};
use crate::video::VideoState;

/// Single source of truth for the loaded video and its edit settings.
///
/// One explicitly owned object, passed by reference to whichever components
/// need it — never file-scope mutable state. The store itself performs no
/// validation; the invariants documented on [`EditSettings`] and
/// [`OverlayInstance`] are contracts its callers (gesture controller, UI
/// controls, request builder) uphold.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditSession {
    #[serde(default)]
    video: Option<VideoState>,
    #[serde(default)]
    settings: EditSettings,

    /// Output of the last successful remix submission.
    #[serde(default)]
    output_url: Option<String>,

    /// Whether the preview shows the remix output instead of the source.
    #[serde(default)]
    show_output: bool,

    /// Transient asset-id → locator cache for preview rendering. The
    /// catalog owns the assets; the session only remembers where to fetch
    /// them from for display. Not persisted.
    #[serde(skip)]
    locator_cache: BTreeMap<String, String>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn video(&self) -> Option<&VideoState> {
        self.video.as_ref()
    }

    pub fn settings(&self) -> &EditSettings {
        &self.settings
    }

    pub fn output_url(&self) -> Option<&str> {
        self.output_url.as_deref()
    }

    pub fn showing_output(&self) -> bool {
        self.show_output && self.output_url.is_some()
    }

    /// Load a new source video. Always a full [`VideoState`] replacement;
    /// any previous remix output is discarded.
    pub fn load_video(&mut self, video: VideoState) {
        self.video = Some(video);
        self.output_url = None;
        self.show_output = false;
    }

    /// Remove the loaded video and its output wholesale.
    pub fn clear_video(&mut self) {
        self.video = None;
        self.output_url = None;
        self.show_output = false;
    }

    /// Apply a partial settings update (shallow merge, see
    /// [`SettingsPatch::apply`]).
    pub fn apply(&mut self, patch: SettingsPatch) {
        patch.apply(&mut self.settings);
    }

    /// Record the output of a completed remix submission and switch the
    /// preview to it.
    pub fn set_output(&mut self, url: impl Into<String>) {
        self.output_url = Some(url.into());
        self.show_output = true;
    }

    pub fn show_original(&mut self) {
        self.show_output = false;
    }

    pub fn show_remixed(&mut self) {
        self.show_output = true;
    }

    /// Reset the color filters and playback speed to neutral.
    pub fn reset_filters(&mut self) {
        self.settings.reset_filters();
    }

    /// Stage an asset as the legacy single-overlay selection.
    pub fn stage_overlay(&mut self, asset_id: impl Into<String>) {
        self.settings.overlay_id = Some(asset_id.into());
    }

    /// Clear the staged selection.
    pub fn clear_staged(&mut self) {
        self.settings.overlay_id = None;
    }

    /// Append an instance to the committed sequence (it renders on top of
    /// the instances already present).
    pub fn push_overlay(&mut self, instance: OverlayInstance) {
        self.settings.overlays.push(instance);
    }

    /// Remove a committed instance by index. Out-of-range indices are a
    /// no-op; later instances keep their relative order.
    pub fn remove_overlay(&mut self, index: usize) {
        if index < self.settings.overlays.len() {
            self.settings.overlays.remove(index);
        }
    }

    /// Drop every session reference to a catalog asset, after the caller
    /// deleted it from the catalog.
    pub fn forget_asset(&mut self, asset_id: &str) {
        if self.settings.overlay_id.as_deref() == Some(asset_id) {
            self.settings.overlay_id = None;
        }
        self.settings.overlays.retain(|o| o.asset_id != asset_id);
        self.locator_cache.remove(asset_id);
    }

    /// Remember where an asset can be fetched from for preview display.
    pub fn cache_locator(&mut self, asset_id: impl Into<String>, url: impl Into<String>) {
        self.locator_cache.insert(asset_id.into(), url.into());
    }

    pub fn locator(&self, asset_id: &str) -> Option<&str> {
        self.locator_cache.get(asset_id).map(String::as_str)
    }
}
