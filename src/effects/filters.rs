// SPDX-License-Identifier: GPL-3.0-only

//! Deterministic per-pixel color filters
//!
//! Each filter visits every pixel exactly once and recomputes its
//! channels from a fixed formula. No filter reads neighbouring pixels,
//! so pixels are independent and the transforms could be tiled or
//! parallelized without changing output.

use crate::frame::Frame;

/// Clamp a computed channel value to the valid 8-bit range
#[inline]
fn clamp_u8(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Channel-mean grayscale: `R = G = B = round((R + G + B) / 3)`.
/// Idempotent: a second application leaves the frame unchanged.
pub fn grayscale(frame: &mut Frame) {
    for px in frame.pixels_mut() {
        let mean = (px[0] as f32 + px[1] as f32 + px[2] as f32) / 3.0;
        let gray = clamp_u8(mean);
        px[0] = gray;
        px[1] = gray;
        px[2] = gray;
    }
}

/// Classic sepia color matrix
pub fn vintage(frame: &mut Frame) {
    for px in frame.pixels_mut() {
        let (r, g, b) = (px[0] as f32, px[1] as f32, px[2] as f32);
        px[0] = clamp_u8(0.393 * r + 0.769 * g + 0.189 * b);
        px[1] = clamp_u8(0.349 * r + 0.686 * g + 0.168 * b);
        px[2] = clamp_u8(0.272 * r + 0.534 * g + 0.131 * b);
    }
}

/// Warm tint: lift red by 20 and green by 10
pub fn warm(frame: &mut Frame) {
    for px in frame.pixels_mut() {
        px[0] = clamp_u8(px[0] as f32 + 20.0);
        px[1] = clamp_u8(px[1] as f32 + 10.0);
    }
}

/// Cool tint: lift blue by 20
pub fn cool(frame: &mut Frame) {
    for px in frame.pixels_mut() {
        px[2] = clamp_u8(px[2] as f32 + 20.0);
    }
}

/// Saturation boost with a glow on bright areas. The brightness test
/// uses the original channel values, before scaling.
pub fn neon(frame: &mut Frame) {
    for px in frame.pixels_mut() {
        let (r, g, b) = (px[0] as f32, px[1] as f32, px[2] as f32);
        let brightness = (r + g + b) / 3.0;

        let mut new_r = 1.2 * r;
        let mut new_g = 1.3 * g;
        let new_b = 1.1 * b;

        if brightness > 150.0 {
            new_r += 50.0;
            new_g += 30.0;
        }

        px[0] = clamp_u8(new_r);
        px[1] = clamp_u8(new_g);
        px[2] = clamp_u8(new_b);
    }
}

/// Scan-line hologram: every fourth row is attenuated in alpha, and
/// all pixels shift toward blue
pub fn hologram(frame: &mut Frame) {
    for (y, row) in frame.rows_mut() {
        let scan_line = y % 4 == 0;
        for px in row.chunks_exact_mut(crate::frame::CHANNELS) {
            px[0] = clamp_u8(0.8 * px[0] as f32);
            px[1] = clamp_u8(0.9 * px[1] as f32);
            px[2] = clamp_u8(1.1 * px[2] as f32);
            if scan_line {
                px[3] = clamp_u8(0.7 * px[3] as f32);
            }
        }
    }
}

/// High-contrast magenta/blue grade with a tint in the shadows. The
/// brightness test uses the original channel values, before scaling.
pub fn cyberpunk(frame: &mut Frame) {
    for px in frame.pixels_mut() {
        let (r, g, b) = (px[0] as f32, px[1] as f32, px[2] as f32);
        let brightness = (r + g + b) / 3.0;

        let mut new_r = 1.4 * r;
        let new_g = 0.8 * g;
        let mut new_b = 1.6 * b;

        if brightness < 100.0 {
            new_r += 30.0;
            new_b += 40.0;
        }

        px[0] = clamp_u8(new_r);
        px[1] = clamp_u8(new_g);
        px[2] = clamp_u8(new_b);
    }
}

/// Faded luminance-based sepia tint
pub fn retro(frame: &mut Frame) {
    for px in frame.pixels_mut() {
        let luminance =
            0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32;
        px[0] = clamp_u8(luminance * 1.2 + 25.0);
        px[1] = clamp_u8(luminance * 0.9 + 12.0);
        px[2] = clamp_u8(luminance * 0.7);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grayscale_mean() {
        let mut frame = Frame::filled(2, 2, [10, 20, 40, 255]);
        grayscale(&mut frame);
        // round(70 / 3) = 23
        assert_eq!(frame.pixel(0, 0), [23, 23, 23, 255]);
    }

    #[test]
    fn test_grayscale_idempotent() {
        let mut once = Frame::filled(4, 4, [13, 77, 201, 255]);
        grayscale(&mut once);
        let mut twice = once.clone();
        grayscale(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_warm_clamps_on_white() {
        let mut frame = Frame::filled(2, 2, [255, 255, 255, 255]);
        warm(&mut frame);
        assert_eq!(frame.pixel(0, 0), [255, 255, 255, 255]);
    }

    #[test]
    fn test_cool_lifts_blue_only() {
        let mut frame = Frame::filled(1, 1, [50, 60, 70, 255]);
        cool(&mut frame);
        assert_eq!(frame.pixel(0, 0), [50, 60, 90, 255]);
    }

    #[test]
    fn test_vintage_matrix() {
        let mut frame = Frame::filled(1, 1, [100, 100, 100, 255]);
        vintage(&mut frame);
        // Row sums of the sepia matrix: 1.351, 1.203, 0.937
        assert_eq!(frame.pixel(0, 0), [135, 120, 94, 255]);
    }

    #[test]
    fn test_neon_highlight_boost() {
        let mut frame = Frame::filled(1, 1, [200, 200, 200, 255]);
        neon(&mut frame);
        // 1.2*200+50 and 1.3*200+30 both clamp; blue is 220
        assert_eq!(frame.pixel(0, 0), [255, 255, 220, 255]);
    }

    #[test]
    fn test_neon_no_boost_below_threshold() {
        let mut frame = Frame::filled(1, 1, [100, 100, 100, 255]);
        neon(&mut frame);
        assert_eq!(frame.pixel(0, 0), [120, 130, 110, 255]);
    }

    #[test]
    fn test_cyberpunk_shadow_tint() {
        let mut frame = Frame::filled(1, 1, [50, 50, 50, 255]);
        cyberpunk(&mut frame);
        assert_eq!(frame.pixel(0, 0), [100, 40, 120, 255]);
    }

    #[test]
    fn test_hologram_scan_lines() {
        let mut frame = Frame::filled(2, 5, [100, 100, 100, 255]);
        hologram(&mut frame);
        // Rows 0 and 4 are scan lines with attenuated alpha
        assert!(frame.pixel(0, 0)[3] < 255);
        assert!(frame.pixel(0, 4)[3] < 255);
        assert_eq!(frame.pixel(0, 1)[3], 255);
        assert_eq!(frame.pixel(0, 2)[3], 255);
        // Color shift applies to every row
        assert_eq!(frame.pixel(0, 1)[0], 80);
        assert_eq!(frame.pixel(0, 1)[2], 110);
    }

    #[test]
    fn test_retro_is_monotone_tint() {
        let mut frame = Frame::filled(1, 1, [0, 0, 0, 255]);
        retro(&mut frame);
        // Black lifts to the sepia base tone
        assert_eq!(frame.pixel(0, 0), [25, 12, 0, 255]);
    }
}
