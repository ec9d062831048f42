//! Print the composited preview frame.

use std::path::Path;

use remix_gesture_control::GestureController;
use remix_preview_compositor::compose;

use super::load_session;

pub fn run(path: &Path) -> anyhow::Result<()> {
    let session = load_session(path)?;
    let gesture = GestureController::new();
    let frame = compose(&session, &gesture);
    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}
