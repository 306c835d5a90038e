//! The badge generation pipeline: validate, encode, persist
//!
//! Each [`Pipeline::generate`] call is independent and stateless. The
//! pipeline never logs and never creates directories; callers bootstrap
//! the output directory and present errors.

use crate::encode::QrEncoder;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A validated pair of badge inputs
///
/// Construction trims both fields and rejects empty values, so a request
/// in hand is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Employee name, trimmed, non-empty
    pub name: String,
    /// Employee ID, trimmed, non-empty
    pub employee_id: String,
}

impl GenerationRequest {
    /// Trim and validate the raw inputs
    pub fn new(name: &str, employee_id: &str) -> Result<Self> {
        let name = name.trim();
        let employee_id = employee_id.trim();

        if name.is_empty() {
            return Err(Error::MissingField("employee name"));
        }
        if employee_id.is_empty() {
            return Err(Error::MissingField("employee ID"));
        }

        Ok(Self {
            name: name.to_string(),
            employee_id: employee_id.to_string(),
        })
    }

    /// The text encoded into the QR symbol
    ///
    /// The delimiter is not escaped: a name containing `, id:` is
    /// ambiguous on decode. Known limitation.
    pub fn payload(&self) -> String {
        format!("name: {}, id: {}", self.name, self.employee_id)
    }

    /// Deterministic artifact filename for this request
    pub fn filename(&self) -> String {
        format!("{}_{}.png", self.name, self.employee_id)
    }
}

/// The generated badge: payload text, derived path, and PNG bytes
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    /// Text encoded into the QR symbol
    pub payload: String,
    /// Filename derived from name and ID
    pub filename: String,
    /// Full path the PNG was written to
    pub path: PathBuf,
    /// PNG-encoded raster bytes, as written to disk
    pub png: Vec<u8>,
}

/// Badge generation pipeline
///
/// Holds the explicit context for generation: the output directory and
/// the encoder handle. No process-wide state.
pub struct Pipeline {
    output_dir: PathBuf,
    encoder: QrEncoder,
}

impl Pipeline {
    /// Create a pipeline writing artifacts under `output_dir`
    ///
    /// The directory is not created here; a missing directory surfaces
    /// as [`Error::Io`] at generation time.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            encoder: QrEncoder::new(),
        }
    }

    /// The configured output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Validate inputs, encode the badge, and write the PNG artifact
    ///
    /// Overwrites unconditionally if a file already exists at the derived
    /// path (same name/ID pair). Write failures are returned, not retried.
    pub fn generate(&self, name: &str, employee_id: &str) -> Result<GeneratedArtifact> {
        let request = GenerationRequest::new(name, employee_id)?;

        let filename = request.filename();
        check_path_component(&filename)?;

        let payload = request.payload();
        let png = self.encoder.png_bytes(&payload)?;

        let path = self.output_dir.join(&filename);
        fs::write(&path, &png)?;

        Ok(GeneratedArtifact {
            payload,
            filename,
            path,
            png,
        })
    }
}

/// Reject filenames that would escape the output directory or that the
/// filesystem cannot represent. This is the only sanitization performed;
/// names and IDs are otherwise unrestricted.
fn check_path_component(filename: &str) -> Result<()> {
    if filename.contains(['/', '\\', '\0']) {
        return Err(Error::InvalidPathComponent(filename.to_string()));
    }
    Ok(())
}
