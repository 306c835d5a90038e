//! Generate a badge QR code and save it to a file
//!
//! Usage: cargo run --example generate_badge

use qrbadge::Pipeline;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let pipeline = Pipeline::new(".");
    let artifact = pipeline.generate("Alice Example", "E-1042")?;

    println!("✓ Badge generated and saved to {}", artifact.path.display());
    println!("  Payload: {}", artifact.payload);

    Ok(())
}
