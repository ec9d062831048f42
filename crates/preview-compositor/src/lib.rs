//! Remix Studio Preview Compositor
//!
//! Pure, non-authoritative rendering of the session as a layered visual
//! description: base media, positioned overlay layers with their handles,
//! text anchor, and display-only filters. A UI shell draws the description;
//! the processing service owns the real compositing.

pub mod compositor;

pub use compositor::{
    compose, BaseLayer, DisplayFilters, Handles, LayerMedia, OverlayLayer, PreviewFrame, TextLayer,
};
