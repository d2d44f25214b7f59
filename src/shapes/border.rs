// SPDX-License-Identifier: GPL-3.0-only

//! Border composites
//!
//! A border shape paints a solid backing over the full canvas and draws
//! the source frame scaled into an inset rectangle, leaving a visible
//! margin. Scaling uses nearest-neighbour sampling.

use crate::constants::shapes::{POLAROID_BOTTOM_RATIO, POLAROID_MARGIN_RATIO, RETRO_MARGIN_PX};
use crate::frame::Frame;

const POLAROID_BACKING: [u8; 4] = [255, 255, 255, 255];
const RETRO_BACKING: [u8; 4] = [46, 36, 30, 255];

/// Polaroid border: white backing, small side/top margin, and a large
/// bottom margin reserved for caption space
pub fn polaroid(frame: &mut Frame) {
    let (width, height) = (frame.width(), frame.height());
    let margin = (POLAROID_MARGIN_RATIO * width.min(height) as f32) as u32;
    let bottom = (POLAROID_BOTTOM_RATIO * height as f32) as u32;

    composite_inset(
        frame,
        POLAROID_BACKING,
        margin,
        margin,
        margin,
        margin + bottom,
    );
}

/// Retro border: uniform margin over a dark backing
pub fn retro(frame: &mut Frame) {
    let margin = RETRO_MARGIN_PX;
    composite_inset(frame, RETRO_BACKING, margin, margin, margin, margin);
}

/// Paint the backing color and draw the source scaled into the inset
/// rectangle. Degenerate insets (frame smaller than its margins) leave
/// the frame unchanged.
fn composite_inset(
    frame: &mut Frame,
    backing: [u8; 4],
    left: u32,
    top: u32,
    right: u32,
    bottom: u32,
) {
    let (width, height) = (frame.width(), frame.height());
    if left + right >= width || top + bottom >= height {
        return;
    }
    let inset_w = width - left - right;
    let inset_h = height - top - bottom;

    let source = frame.clone();
    let mut canvas = Frame::filled(width, height, backing);
    draw_scaled(&mut canvas, &source, left, top, inset_w, inset_h);
    *frame = canvas;
}

/// Nearest-neighbour draw of `src` into the destination rectangle
fn draw_scaled(dst: &mut Frame, src: &Frame, x0: u32, y0: u32, dst_w: u32, dst_h: u32) {
    for dy in 0..dst_h {
        let sy = (dy as u64 * src.height() as u64 / dst_h as u64) as u32;
        let sy = sy.min(src.height() - 1);
        for dx in 0..dst_w {
            let sx = (dx as u64 * src.width() as u64 / dst_w as u64) as u32;
            let sx = sx.min(src.width() - 1);
            dst.set_pixel(x0 + dx, y0 + dy, src.pixel(sx, sy));
        }
    }
}
