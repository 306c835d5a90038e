//! QR code encoding
//!
//! Thin wrapper around the `qrcode` crate. The QR algorithm itself
//! (Reed-Solomon, masking, module placement) lives entirely in that
//! dependency; this module only fixes rendering parameters and handles
//! PNG serialization.

use crate::error::{Error, Result};
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::QrCode;
use qrcode::render::unicode;
use std::io::Cursor;

/// QR code encoder with a fixed error correction level
pub struct QrEncoder {
    ecc_level: qrcode::EcLevel,
}

impl QrEncoder {
    /// Create a new QR encoder with default settings (Medium ECC)
    pub fn new() -> Self {
        Self {
            ecc_level: qrcode::EcLevel::M,
        }
    }

    /// Encode text into a QR code image
    pub fn encode(&self, data: &str) -> Result<DynamicImage> {
        let code = QrCode::with_error_correction_level(data, self.ecc_level)
            .map_err(|e| Error::Encoding(format!("Failed to create QR code: {}", e)))?;

        // Render with a minimum size for reliable scanning
        let image = code.render::<Luma<u8>>().min_dimensions(400, 400).build();

        Ok(DynamicImage::ImageLuma8(image))
    }

    /// Encode text into PNG bytes ready to be written to disk
    pub fn png_bytes(&self, data: &str) -> Result<Vec<u8>> {
        let image = self.encode(data)?;
        let mut buf = Vec::new();
        image.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        Ok(buf)
    }

    /// Render text as a Unicode half-block QR for terminal display
    pub fn render_terminal(&self, data: &str) -> Result<String> {
        let code = QrCode::with_error_correction_level(data, self.ecc_level)
            .map_err(|e| Error::Encoding(format!("Failed to create QR code: {}", e)))?;

        Ok(code
            .render::<unicode::Dense1x2>()
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark)
            .build())
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_string() {
        let encoder = QrEncoder::new();
        let result = encoder.encode("name: Alice, id: 100");
        assert!(result.is_ok());
    }

    #[test]
    fn test_png_bytes_have_signature() {
        let encoder = QrEncoder::new();
        let bytes = encoder.png_bytes("name: Alice, id: 100").unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_capacity_exceeded() {
        let encoder = QrEncoder::new();
        // Far beyond the maximum QR symbol capacity at any version
        let oversized = "x".repeat(8000);
        assert!(matches!(
            encoder.encode(&oversized),
            Err(Error::Encoding(_))
        ));
    }

    #[test]
    fn test_terminal_render_nonempty() {
        let encoder = QrEncoder::new();
        let art = encoder.render_terminal("name: Bob, id: 7").unwrap();
        assert!(!art.is_empty());
    }
}
