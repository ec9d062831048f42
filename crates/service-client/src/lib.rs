//! Remix Studio Service Client
//!
//! Blocking client for the remote processing service: asset catalog CRUD,
//! video ingestion, and remix submission. Session state lives in
//! `remix-session-model`; this crate only moves it over the wire.

pub mod catalog;
pub mod client;
pub mod ingest;
mod multipart;
pub mod remix;

pub use catalog::{AudioAsset, MediaKind, OverlayAsset};
pub use client::ServiceClient;
pub use remix::{OverlayItem, RemixRequest, RemixResponse};
