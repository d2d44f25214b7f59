// SPDX-License-Identifier: GPL-3.0-only

//! Vector clip paths
//!
//! A clip shape computes a closed path in canvas coordinates and keeps
//! only the pixels inside it; outside pixels become transparent
//! background. Polygon interiors are resolved with an even-odd scanline
//! fill rather than per-pixel ray casting, so cost is linear in
//! `rows × edges` instead of `pixels × edges`.

use crate::constants::shapes::{CLIP_SIZE_RATIO, HEART_STEPS};
use crate::frame::{Frame, CHANNELS};

const BACKGROUND: [u8; 4] = [0, 0, 0, 0];

/// Parametric heart path, one point per degree:
/// `x(t) = 16 sin³ t`, `y(t) = -(13 cos t - 5 cos 2t - 2 cos 3t - cos 4t)`,
/// scaled so the 16-unit half-width maps to `0.4 * min(w, h)` and
/// centred on the canvas. The negated y keeps the heart upright in
/// screen coordinates (y grows downward).
pub fn heart_path(width: u32, height: u32) -> Vec<(f32, f32)> {
    let size = CLIP_SIZE_RATIO * width.min(height) as f32;
    let scale = size / 16.0;
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);

    (0..HEART_STEPS)
        .map(|deg| {
            let t = (deg as f32).to_radians();
            let x = 16.0 * t.sin().powi(3);
            let y = -(13.0 * t.cos()
                - 5.0 * (2.0 * t).cos()
                - 2.0 * (3.0 * t).cos()
                - (4.0 * t).cos());
            (cx + scale * x, cy + scale * y)
        })
        .collect()
}

/// Five-point star path: 10 alternating outer/inner vertices starting
/// at -90° (pointing up), stepping by π/5. Inner radius is half the
/// outer radius.
pub fn star_path(width: u32, height: u32) -> Vec<(f32, f32)> {
    let outer = CLIP_SIZE_RATIO * width.min(height) as f32;
    let inner = outer / 2.0;
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);

    (0..10)
        .map(|k| {
            let angle = -std::f32::consts::FRAC_PI_2 + k as f32 * std::f32::consts::PI / 5.0;
            let radius = if k % 2 == 0 { outer } else { inner };
            (cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}

/// Clip the frame to a closed polygon. Pixels whose centre falls
/// outside the path are replaced with transparent background.
pub fn clip_to_polygon(frame: &mut Frame, path: &[(f32, f32)]) {
    if path.len() < 3 {
        return;
    }
    let width = frame.width() as usize;

    let mut crossings: Vec<f32> = Vec::new();
    let mut inside = vec![false; width];

    for (y, row) in frame.rows_mut() {
        let yc = y as f32 + 0.5;

        crossings.clear();
        for i in 0..path.len() {
            let (x1, y1) = path[i];
            let (x2, y2) = path[(i + 1) % path.len()];
            // Half-open test so a vertex exactly on the scanline is
            // counted for only one of its two edges
            if (y1 <= yc) != (y2 <= yc) {
                crossings.push(x1 + (yc - y1) * (x2 - x1) / (y2 - y1));
            }
        }
        crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        inside.fill(false);
        for span in crossings.chunks_exact(2) {
            let start = (span[0] - 0.5).ceil().max(0.0) as usize;
            let end = ((span[1] - 0.5).floor() as i64 + 1).clamp(0, width as i64) as usize;
            for flag in &mut inside[start.min(width)..end] {
                *flag = true;
            }
        }

        for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
            if !inside[x] {
                px.copy_from_slice(&BACKGROUND);
            }
        }
    }
}

/// Clip the frame to a centred circle of radius `0.4 * min(w, h)`,
/// tested analytically per pixel
pub fn clip_to_circle(frame: &mut Frame) {
    let radius = CLIP_SIZE_RATIO * frame.width().min(frame.height()) as f32;
    let radius_sq = radius * radius;
    let (cx, cy) = (frame.width() as f32 / 2.0, frame.height() as f32 / 2.0);

    for (y, row) in frame.rows_mut() {
        let dy = y as f32 + 0.5 - cy;
        for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let dx = x as f32 + 0.5 - cx;
            if dx * dx + dy * dy > radius_sq {
                px.copy_from_slice(&BACKGROUND);
            }
        }
    }
}
