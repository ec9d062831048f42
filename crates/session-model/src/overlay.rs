//! Overlay placement types.
//!
//! Positions are percentages of the preview canvas: `(0, 0)` is top-left,
//! `x` grows rightward and `y` downward. Scale is a fraction of the canvas
//! width occupied by the overlay.

use serde::{Deserialize, Serialize};

/// Lower bound for overlay scale (fraction of canvas width).
pub const SCALE_MIN: f64 = 0.1;
/// Upper bound for overlay scale (fraction of canvas width).
pub const SCALE_MAX: f64 = 0.6;
/// Upper bound for the `y` coordinate (percent). The bottom margin keeps
/// the overlay visible above the player controls.
pub const Y_MAX_PERCENT: f64 = 85.0;

/// Chroma-key removal mode for an overlay.
///
/// A single three-way value: an overlay can key out green or black, never
/// both. The processing service's wire contract spells this as two booleans;
/// [`ChromaKey::to_flags`] and [`ChromaKey::from_flags`] convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChromaKey {
    /// Keep the overlay's background as-is.
    None,
    /// Key out a green background during compositing.
    #[default]
    Green,
    /// Key out a black background during compositing.
    Black,
}

impl ChromaKey {
    /// Wire representation: `(remove_green_screen, remove_black_screen)`.
    pub fn to_flags(self) -> (bool, bool) {
        match self {
            ChromaKey::None => (false, false),
            ChromaKey::Green => (true, false),
            ChromaKey::Black => (false, true),
        }
    }

    /// Build from the wire flag pair. Green wins if a peer ever sends both,
    /// matching the service's own filter precedence.
    pub fn from_flags(remove_green: bool, remove_black: bool) -> Self {
        match (remove_green, remove_black) {
            (true, _) => ChromaKey::Green,
            (false, true) => ChromaKey::Black,
            (false, false) => ChromaKey::None,
        }
    }
}

/// One concrete placement of a catalog asset within the session.
///
/// Held in an ordered sequence whose order is both insertion order and
/// render z-order (later = on top). The same asset may appear multiple
/// times with different placements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayInstance {
    /// Catalog id of the placed asset.
    pub asset_id: String,

    /// Left edge, percent of canvas width. Valid range `[0, 100 - scale*100]`.
    pub x: f64,

    /// Top edge, percent of canvas height. Valid range `[0, 85]`.
    pub y: f64,

    /// Width as a fraction of canvas width. Valid range `[0.1, 0.6]`.
    pub scale: f64,

    /// Chroma-key removal mode.
    #[serde(default)]
    pub chroma: ChromaKey,
}

impl OverlayInstance {
    /// Largest `x` that keeps the overlay fully on-canvas at its scale.
    pub fn max_x(&self) -> f64 {
        100.0 - self.scale * 100.0
    }
}

/// Legacy five-way overlay anchor, kept for the single-overlay wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OverlayPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
    Center,
}

/// Five-way anchor for the text overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextPosition {
    TopLeft,
    #[default]
    TopCenter,
    TopRight,
    Center,
    BottomCenter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chroma_flags_are_exclusive() {
        assert_eq!(ChromaKey::Green.to_flags(), (true, false));
        assert_eq!(ChromaKey::Black.to_flags(), (false, true));
        assert_eq!(ChromaKey::None.to_flags(), (false, false));
    }

    #[test]
    fn test_chroma_from_flags() {
        assert_eq!(ChromaKey::from_flags(true, false), ChromaKey::Green);
        assert_eq!(ChromaKey::from_flags(false, true), ChromaKey::Black);
        assert_eq!(ChromaKey::from_flags(false, false), ChromaKey::None);
        // Green takes precedence when both are set.
        assert_eq!(ChromaKey::from_flags(true, true), ChromaKey::Green);
    }

    #[test]
    fn test_max_x_shrinks_with_scale() {
        let instance = OverlayInstance {
            asset_id: "dino".to_string(),
            x: 70.0,
            y: 70.0,
            scale: 0.25,
            chroma: ChromaKey::Green,
        };
        assert!((instance.max_x() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_position_wire_spelling() {
        let json = serde_json::to_string(&OverlayPosition::BottomRight).unwrap();
        assert_eq!(json, "\"bottom-right\"");
        let json = serde_json::to_string(&TextPosition::TopCenter).unwrap();
        assert_eq!(json, "\"top-center\"");
    }
}
