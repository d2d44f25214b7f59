// SPDX-License-Identifier: GPL-3.0-only

//! Photo encoding
//!
//! Encodes processed frames to JPEG (with quality control) or PNG
//! (lossless). Encoding is CPU-bound and runs on a blocking task so the
//! session's async driver stays responsive.

use crate::errors::PhotoError;
use crate::frame::Frame;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{RgbImage, RgbaImage};
use serde::{Deserialize, Serialize};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Supported encoding formats
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum EncodingFormat {
    /// JPEG format (lossy compression)
    #[default]
    Jpeg,
    /// PNG format (lossless compression)
    Png,
}

impl EncodingFormat {
    /// Get file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            EncodingFormat::Jpeg => "jpg",
            EncodingFormat::Png => "png",
        }
    }
}

/// Encoding quality settings (JPEG only; PNG is lossless)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum EncodingQuality {
    /// Low quality (high compression)
    Low,
    /// Medium quality (balanced)
    Medium,
    /// High quality (low compression)
    #[default]
    High,
    /// Maximum quality (minimal compression)
    Maximum,
}

impl EncodingQuality {
    /// Get JPEG quality value (0-100)
    pub fn jpeg_quality(&self) -> u8 {
        match self {
            EncodingQuality::Low => 60,
            EncodingQuality::Medium => 80,
            EncodingQuality::High => 92,
            EncodingQuality::Maximum => 98,
        }
    }
}

/// Photo encoder
#[derive(Debug, Clone, Copy)]
pub struct PhotoEncoder {
    format: EncodingFormat,
    quality: EncodingQuality,
}

impl PhotoEncoder {
    /// Create a new encoder with JPEG format and high quality
    pub fn new() -> Self {
        Self {
            format: EncodingFormat::Jpeg,
            quality: EncodingQuality::High,
        }
    }

    /// Create an encoder with explicit format and quality
    pub fn with_format(format: EncodingFormat, quality: EncodingQuality) -> Self {
        Self { format, quality }
    }

    pub fn format(&self) -> EncodingFormat {
        self.format
    }

    /// Encode a frame asynchronously, returning compressed image bytes
    pub async fn encode(&self, frame: Frame) -> Result<Vec<u8>, PhotoError> {
        debug!(
            width = frame.width(),
            height = frame.height(),
            format = ?self.format,
            "Encoding photo"
        );

        let format = self.format;
        let quality = self.quality;

        // Encoding is CPU-bound; keep it off the async executor
        tokio::task::spawn_blocking(move || match format {
            EncodingFormat::Jpeg => Self::encode_jpeg(frame, quality),
            EncodingFormat::Png => Self::encode_png(frame),
        })
        .await
        .map_err(|e| PhotoError::EncodingFailed(format!("Encoding task error: {}", e)))?
    }

    fn encode_jpeg(frame: Frame, quality: EncodingQuality) -> Result<Vec<u8>, PhotoError> {
        let (width, height) = (frame.width(), frame.height());
        let rgba = RgbaImage::from_raw(width, height, frame.into_raw())
            .ok_or_else(|| PhotoError::EncodingFailed("Invalid raster buffer".into()))?;

        // JPEG has no alpha channel
        let rgb: RgbImage = image::DynamicImage::ImageRgba8(rgba).to_rgb8();

        let mut bytes = Vec::new();
        let encoder = JpegEncoder::new_with_quality(Cursor::new(&mut bytes), quality.jpeg_quality());
        rgb.write_with_encoder(encoder)
            .map_err(|e| PhotoError::EncodingFailed(e.to_string()))?;
        Ok(bytes)
    }

    fn encode_png(frame: Frame) -> Result<Vec<u8>, PhotoError> {
        let (width, height) = (frame.width(), frame.height());
        let rgba = RgbaImage::from_raw(width, height, frame.into_raw())
            .ok_or_else(|| PhotoError::EncodingFailed("Invalid raster buffer".into()))?;

        let mut bytes = Vec::new();
        let encoder = PngEncoder::new(Cursor::new(&mut bytes));
        rgba.write_with_encoder(encoder)
            .map_err(|e| PhotoError::EncodingFailed(e.to_string()))?;
        Ok(bytes)
    }

    /// Save encoded photo bytes under a timestamped filename
    ///
    /// Creates the output directory if needed and returns the saved path.
    pub async fn save(&self, data: &[u8], output_dir: &Path, index: u32) -> Result<PathBuf, PhotoError> {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!("photobooth_{}_{:02}.{}", timestamp, index, self.format.extension());
        let path = output_dir.join(filename);

        tokio::fs::create_dir_all(output_dir).await?;
        tokio::fs::write(&path, data).await?;

        info!(path = %path.display(), size = data.len(), "Photo saved");
        Ok(path)
    }
}

impl Default for PhotoEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_png_roundtrip_is_lossless() {
        let frame = Frame::filled(16, 12, [10, 200, 30, 255]);
        let encoder = PhotoEncoder::with_format(EncodingFormat::Png, EncodingQuality::High);
        let bytes = encoder.encode(frame).await.unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (16, 12));
        assert_eq!(decoded.get_pixel(8, 6).0, [10, 200, 30, 255]);
    }

    #[tokio::test]
    async fn test_jpeg_is_decodable() {
        let frame = Frame::filled(32, 32, [128, 64, 32, 255]);
        let encoder = PhotoEncoder::with_format(EncodingFormat::Jpeg, EncodingQuality::High);
        let bytes = encoder.encode(frame).await.unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 32);
        assert_eq!(decoded.height(), 32);
    }

    #[tokio::test]
    async fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let encoder = PhotoEncoder::new();
        let path = encoder.save(b"not-a-real-jpeg", dir.path(), 3).await.unwrap();
        assert!(path.exists());
        assert_eq!(path.extension().unwrap(), "jpg");
    }
}
