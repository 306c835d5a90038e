//! QRBADGE - employee badge QR generation
//!
//! This library turns an employee name and ID into a QR badge artifact:
//! it validates the inputs, encodes the derived payload text as a QR
//! symbol, writes a PNG to a configured output directory, and returns
//! the raster bytes for display.
//!
//! # Example
//!
//! ```no_run
//! use qrbadge::Pipeline;
//!
//! fn main() -> anyhow::Result<()> {
//!     let pipeline = Pipeline::new("/tmp/badges");
//!     let artifact = pipeline.generate("Alice", "100")?;
//!
//!     println!("Badge saved at {}", artifact.path.display());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod config;
pub mod encode;
pub mod error;
pub mod logging;
pub mod pipeline;

// Re-exports for convenience
pub use config::{BadgeConfig, LogRotation, LoggingOptions, OutputOptions};
pub use encode::QrEncoder;
pub use error::{Error, Result};
pub use pipeline::{GeneratedArtifact, GenerationRequest, Pipeline};
