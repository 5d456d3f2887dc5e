//! Serve placeholders on an ephemeral port and fetch one (feature: `server`)
//!
//! cargo run --example serve_local

use placeholdr::server::PlaceholderServer;
use placeholdr::ServerConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig {
        bind: "127.0.0.1:0".to_string(),
        workers: 1,
        ..Default::default()
    };
    let server = PlaceholderServer::bind(&config)?;
    let addr = server.local_addr().ok_or("server is not on an IP socket")?;
    let shutdown = server.shutdown_handle();
    let worker = std::thread::spawn(move || server.run());

    let url = format!("http://{}/img/320x180/336699/FFCC00", addr);
    println!("Fetching: {}", url);
    let resp = reqwest::blocking::get(&url)?;
    println!("  status: {}", resp.status());
    let body = resp.bytes()?;
    std::fs::write("placeholder.png", &body)?;
    println!("  wrote placeholder.png ({} bytes)", body.len());

    shutdown.shutdown();
    if let Ok(res) = worker.join() {
        res?;
    }
    Ok(())
}
