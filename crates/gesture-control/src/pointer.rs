//! Unified pointer input.
//!
//! Mouse and touch are collapsed into one capability at the edge of the
//! system: a position in container device pixels plus a phase. Nothing
//! downstream branches on the input device kind.

use serde::{Deserialize, Serialize};

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// A single pointer event in container device-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub phase: PointerPhase,
}

impl PointerEvent {
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            phase: PointerPhase::Down,
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            phase: PointerPhase::Move,
        }
    }

    pub fn up(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            phase: PointerPhase::Up,
        }
    }
}

/// Measured size of the preview container in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

impl ContainerSize {
    /// Build a container size, rejecting degenerate measurements. `None`
    /// keeps the controller in its "layout unmeasured" mode where moves
    /// are no-ops.
    pub fn new(width: f64, height: f64) -> Option<Self> {
        if width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite() {
            Some(Self { width, height })
        } else {
            None
        }
    }
}
