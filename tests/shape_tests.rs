// SPDX-License-Identifier: GPL-3.0-only

//! Shape overlay integration tests at realistic frame sizes

use photobooth::shapes::apply_shape;
use photobooth::{Frame, FrameShape};

const RED: [u8; 4] = [200, 10, 10, 255];
const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

fn coverage(frame: &Frame, color: [u8; 4]) -> f32 {
    let mut hits = 0u32;
    for y in 0..frame.height() {
        for x in 0..frame.width() {
            if frame.pixel(x, y) == color {
                hits += 1;
            }
        }
    }
    hits as f32 / (frame.width() * frame.height()) as f32
}

#[test]
fn test_heart_clip_on_camera_frame() {
    let mut frame = Frame::filled(640, 480, RED);
    apply_shape(&mut frame, FrameShape::Heart);

    assert_eq!(frame.width(), 640);
    assert_eq!(frame.height(), 480);

    // Corners fall outside the heart
    assert_eq!(frame.pixel(0, 0), TRANSPARENT);
    assert_eq!(frame.pixel(639, 0), TRANSPARENT);
    assert_eq!(frame.pixel(0, 479), TRANSPARENT);
    assert_eq!(frame.pixel(639, 479), TRANSPARENT);

    // The centre survives with its original color
    assert_eq!(frame.pixel(320, 240), RED);

    // The heart keeps a substantial interior
    let kept = coverage(&frame, RED);
    assert!(kept > 0.05 && kept < 0.95, "heart coverage {kept}");
}

#[test]
fn test_star_clip_keeps_center_drops_corners() {
    let mut frame = Frame::filled(400, 400, RED);
    apply_shape(&mut frame, FrameShape::Star);

    assert_eq!(frame.pixel(200, 200), RED);
    assert_eq!(frame.pixel(0, 0), TRANSPARENT);
    assert_eq!(frame.pixel(399, 399), TRANSPARENT);
}

#[test]
fn test_circle_clip_radius() {
    let mut frame = Frame::filled(100, 100, RED);
    apply_shape(&mut frame, FrameShape::Circle);

    // Radius is 40% of the smaller dimension
    assert_eq!(frame.pixel(50, 50), RED);
    assert_eq!(frame.pixel(50, 12), RED); // 38px from centre
    assert_eq!(frame.pixel(50, 8), TRANSPARENT); // 42px from centre
    assert_eq!(frame.pixel(0, 0), TRANSPARENT);
}

#[test]
fn test_polaroid_border_layout() {
    let mut frame = Frame::filled(100, 100, RED);
    apply_shape(&mut frame, FrameShape::Polaroid);

    const WHITE: [u8; 4] = [255, 255, 255, 255];
    // 5% margin on the sides and top, 20% reserved at the bottom
    assert_eq!(frame.pixel(2, 50), WHITE);
    assert_eq!(frame.pixel(50, 2), WHITE);
    assert_eq!(frame.pixel(50, 95), WHITE);
    assert_eq!(frame.pixel(50, 85), WHITE);
    // Interior keeps the photo
    assert_eq!(frame.pixel(50, 40), RED);
}

#[test]
fn test_retro_border_layout() {
    let mut frame = Frame::filled(100, 80, RED);
    apply_shape(&mut frame, FrameShape::RetroBorder);

    const BACKING: [u8; 4] = [46, 36, 30, 255];
    assert_eq!(frame.pixel(5, 5), BACKING);
    assert_eq!(frame.pixel(95, 75), BACKING);
    assert_eq!(frame.pixel(50, 40), RED);
}

#[test]
fn test_tiny_frames_survive_borders() {
    // Frames smaller than the border insets are left unchanged
    for shape in [FrameShape::Polaroid, FrameShape::RetroBorder] {
        let mut frame = Frame::filled(8, 8, RED);
        apply_shape(&mut frame, shape);
        assert_eq!(frame.width(), 8);
        assert_eq!(frame.height(), 8);
    }
}
