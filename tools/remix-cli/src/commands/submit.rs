//! Submit the session for processing.

use std::path::Path;

use remix_service_client::ServiceClient;

use super::{load_session, save_session};

pub fn run(client: &ServiceClient, path: &Path) -> anyhow::Result<()> {
    let mut session = load_session(path)?;

    println!("Submitting remix...");
    let response = client.submit_remix(&session)?;

    let output_url = client.url(&response.output_url);
    session.set_output(output_url.clone());
    save_session(path, &session)?;

    println!("{}", response.message);
    println!("  Output: {output_url}");
    println!("  File:   {}", response.output_filename);
    Ok(())
}
