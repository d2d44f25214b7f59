// SPDX-License-Identifier: GPL-3.0-only

//! Raster frame type shared across the capture pipeline
//!
//! A [`Frame`] is a mutable RGBA8 buffer in row-major order. It is the
//! canonical format between the camera source and the photo encoder:
//! effects and shape overlays transform it in place. A frame is owned
//! exclusively by the operation transforming it; it is never shared
//! across concurrent transforms.

/// Bytes per pixel (R, G, B, A)
pub const CHANNELS: usize = 4;

/// A single RGBA8 raster frame
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Frame {
    /// Create a transparent frame of the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * CHANNELS],
        }
    }

    /// Create a frame filled with a solid RGBA color
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut frame = Self::new(width, height);
        for px in frame.data.chunks_exact_mut(CHANNELS) {
            px.copy_from_slice(&rgba);
        }
        frame
    }

    /// Wrap an existing RGBA buffer, validating its length
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, String> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(format!(
                "Frame buffer size mismatch: expected {} bytes for {}x{}, got {}",
                expected,
                width,
                height,
                data.len()
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the frame, returning the raw RGBA buffer
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Read one pixel. Panics if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = self.index(x, y);
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Write one pixel. Panics if out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = self.index(x, y);
        self.data[idx..idx + CHANNELS].copy_from_slice(&rgba);
    }

    /// Iterate over all pixels as mutable 4-byte slices
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.data.chunks_exact_mut(CHANNELS)
    }

    /// Iterate over rows as (row_index, mutable row bytes)
    pub fn rows_mut(&mut self) -> impl Iterator<Item = (u32, &mut [u8])> {
        let row_len = self.width as usize * CHANNELS;
        self.data
            .chunks_exact_mut(row_len)
            .enumerate()
            .map(|(y, row)| (y as u32, row))
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Frame({}x{}, {} bytes)",
            self.width,
            self.height,
            self.data.len()
        )
    }
}
