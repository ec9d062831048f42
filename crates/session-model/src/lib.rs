//! Remix Studio Session Model
//!
//! Core data model for edit sessions: the loaded video's identity, ordered
//! overlay placements, text/trim/color/speed settings, and the state store
//! that owns them. Pure data — no I/O, no network.

pub mod overlay;
pub mod session;
pub mod settings;
pub mod video;

pub use overlay::{ChromaKey, OverlayInstance, OverlayPosition, TextPosition};
pub use session::EditSession;
pub use settings::{EditSettings, OverlayPlan, SettingsPatch, StagedSelection};
pub use video::VideoState;
