// SPDX-License-Identifier: GPL-3.0-only

//! Particle overlay effect
//!
//! Draws randomized bright specks over the frame. Unlike the filters in
//! [`super::filters`], this transform draws from a random source and is
//! only reproducible when the [`super::EffectEngine`] was seeded.

use crate::frame::Frame;
use rand::Rng;

/// One speck per this many pixels
const PIXELS_PER_PARTICLE: u32 = 1500;

/// Lower bound on speck count for small frames
const MIN_PARTICLES: u32 = 16;

/// Speck palette: white and two accent tones
const PALETTE: [[u8; 3]; 3] = [[255, 255, 255], [180, 230, 255], [255, 200, 240]];

/// Draw randomized specks over the frame
pub fn apply(frame: &mut Frame, rng: &mut impl Rng) {
    let (width, height) = (frame.width(), frame.height());
    if width == 0 || height == 0 {
        return;
    }

    let count = (width * height / PIXELS_PER_PARTICLE).max(MIN_PARTICLES);

    for _ in 0..count {
        let cx = rng.gen_range(0..width);
        let cy = rng.gen_range(0..height);
        let radius = rng.gen_range(1..=2i32);
        let color = PALETTE[rng.gen_range(0..PALETTE.len())];
        let intensity: f32 = rng.gen_range(0.5..1.0);

        draw_speck(frame, cx, cy, radius, color, intensity);
    }
}

/// Blend a small disc additively onto the frame
fn draw_speck(frame: &mut Frame, cx: u32, cy: u32, radius: i32, color: [u8; 3], intensity: f32) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let x = cx as i64 + dx as i64;
            let y = cy as i64 + dy as i64;
            if x < 0 || y < 0 || x >= frame.width() as i64 || y >= frame.height() as i64 {
                continue;
            }
            let (x, y) = (x as u32, y as u32);
            let mut px = frame.pixel(x, y);
            for c in 0..3 {
                let added = px[c] as f32 + color[c] as f32 * intensity;
                px[c] = added.round().clamp(0.0, 255.0) as u8;
            }
            frame.set_pixel(x, y, px);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_apply_is_reproducible() {
        let mut a = Frame::filled(64, 64, [10, 10, 10, 255]);
        let mut b = a.clone();
        apply(&mut a, &mut StdRng::seed_from_u64(42));
        apply(&mut b, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = Frame::filled(64, 64, [10, 10, 10, 255]);
        let mut b = a.clone();
        apply(&mut a, &mut StdRng::seed_from_u64(1));
        apply(&mut b, &mut StdRng::seed_from_u64(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_specks_only_brighten() {
        let base = Frame::filled(32, 32, [40, 40, 40, 255]);
        let mut frame = base.clone();
        apply(&mut frame, &mut StdRng::seed_from_u64(9));
        for y in 0..32 {
            for x in 0..32 {
                let before = base.pixel(x, y);
                let after = frame.pixel(x, y);
                for c in 0..3 {
                    assert!(after[c] >= before[c]);
                }
                assert_eq!(after[3], before[3]);
            }
        }
    }

    #[test]
    fn test_empty_frame_is_noop() {
        let mut frame = Frame::new(0, 0);
        apply(&mut frame, &mut StdRng::seed_from_u64(0));
    }
}
