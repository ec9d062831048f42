//! Remix Studio Gesture Control
//!
//! Converts pointer/touch event streams into normalized, clamped
//! position/scale updates for exactly one captured overlay at a time.
//! Pure state-machine logic — no windowing toolkit, no I/O.

pub mod controller;
pub mod pointer;

pub use controller::{GestureController, GestureKind, GestureTarget, Placement};
pub use pointer::{ContainerSize, PointerEvent, PointerPhase};
