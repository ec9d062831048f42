//! Minimal multipart/form-data encoding for single-file uploads.
//!
//! The service's upload endpoints take one `file` form field; that is the
//! whole surface this encoder needs to cover.

/// Encode one file as a multipart/form-data body.
///
/// Returns `(content_type_header_value, body)`.
pub(crate) fn encode_file(field: &str, filename: &str, bytes: &[u8]) -> (String, Vec<u8>) {
    let boundary = boundary();
    let content_type = format!("multipart/form-data; boundary={boundary}");

    let mut body = Vec::with_capacity(bytes.len() + 256);
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(
        format!("Content-Type: {}\r\n\r\n", content_type_for(filename)).as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    (content_type, body)
}

/// MIME type by filename extension; the service also sniffs server-side,
/// so octet-stream is an acceptable fallback.
pub(crate) fn content_type_for(filename: &str) -> &'static str {
    match extension(filename).as_deref() {
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        Some("mkv") => "video/x-matroska",
        Some("avi") => "video/x-msvideo",
        Some("gif") => "image/gif",
        Some("png") => "image/png",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("m4a") => "audio/mp4",
        Some("aac") => "audio/aac",
        _ => "application/octet-stream",
    }
}

/// Lowercased filename extension, without the dot.
pub(crate) fn extension(filename: &str) -> Option<String> {
    std::path::Path::new(filename)
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}

/// Generate a boundary unlikely to collide with the payload, seeded from
/// the wall clock.
fn boundary() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("remix-{seed:032x}")
}
