//! Probe the processing service.

use remix_service_client::ServiceClient;

pub fn run(client: &ServiceClient) -> anyhow::Result<()> {
    println!("Remix Studio Service Check");
    println!("{}", "=".repeat(50));
    println!("Service: {}", client.base_url());

    match client.health() {
        Ok(()) => println!("[OK] Service is healthy"),
        Err(e) => {
            println!("[FAIL] Service unreachable: {e}");
            return Ok(());
        }
    }

    let overlays = client.list_overlays()?;
    println!("[OK] Overlay assets: {}", overlays.len());

    let audio = client.list_audio()?;
    println!("[OK] Audio tracks: {}", audio.len());

    Ok(())
}
