//! Observer forwarding example
//!
//! Demonstrates mirroring every emitted line to an observer callback,
//! renaming a logger in flight, and deriving a file-bound factory from
//! an existing one.
//!
//! Run with: cargo run --example observer_forwarding

use micro_logger::LoggerFactory;
use parking_lot::Mutex;
use std::sync::Arc;

fn main() -> std::io::Result<()> {
    println!("=== Micro Logger - Observer Forwarding Example ===\n");

    let captured: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let captured_clone = Arc::clone(&captured);

    let factory = LoggerFactory::builder(std::io::stdout())
        .app_name("Relay")
        .observer(Arc::new(move |line: &str| {
            captured_clone.lock().push(line.to_string());
        }))
        .build();

    println!("1. Lines go to stdout and to the observer:");
    let mut gateway = factory.create("gateway");
    gateway.info.append("listening on ").append("0.0.0.0:8443");
    gateway.warning.append("client retry budget at ").append(80).append("%");

    println!("\n2. Renaming a logger mid-flight:");
    gateway.rename("RelayEU");
    gateway.info.append("traffic pinned to eu-west");

    println!("\n3. Deriving a file-bound factory with its own observer:");
    let log_path = std::env::temp_dir().join("relay.log");
    let file = std::fs::File::create(&log_path)?;
    let file_factory = LoggerFactory::factory_from(
        file,
        &factory,
        Some(Arc::new(|line: &str| {
            print!("   [file observer] {}", line);
        })),
    );
    let archive = file_factory.create("archive");
    archive.info.append("mirroring session to ").append(log_path.display());
    archive.error.append("disk watermark at ").append(93).append("%");

    println!("\n4. What the first observer captured:");
    for line in captured.lock().iter() {
        print!("   captured: {}", line);
    }

    println!("\n5. Per-stream call statistics:");
    println!("   gateway.info calls: {}", gateway.info.stats().call_count());
    println!(
        "   gateway.warning calls: {}",
        gateway.warning.stats().call_count()
    );

    println!("\n=== Example completed successfully! ===");
    println!("Check '{}' for the derived factory's output", log_path.display());

    Ok(())
}
