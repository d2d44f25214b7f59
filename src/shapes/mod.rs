// SPDX-License-Identifier: GPL-3.0-only

//! Frame and mask overlays
//!
//! Shapes decorate a captured frame with either a border composite
//! (the source is scaled into an inset rectangle over a solid backing)
//! or a vector clip path (pixels outside the path become transparent).
//! Every shape preserves the frame's dimensions; only interior content
//! changes.

pub mod border;
pub mod clip;

use crate::frame::Frame;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Available frame shapes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum FrameShape {
    /// No overlay (identity)
    #[default]
    None,
    /// White border with caption space at the bottom
    Polaroid,
    /// Clip to a parametric heart curve
    Heart,
    /// Clip to a five-point star
    Star,
    /// Clip to a centred circle
    Circle,
    /// Uniform dark border
    RetroBorder,
}

impl FrameShape {
    /// All shape variants for UI/CLI iteration
    pub const ALL: [FrameShape; 6] = [
        FrameShape::None,
        FrameShape::Polaroid,
        FrameShape::Heart,
        FrameShape::Star,
        FrameShape::Circle,
        FrameShape::RetroBorder,
    ];

    /// Get display name for the shape
    pub fn display_name(&self) -> &'static str {
        match self {
            FrameShape::None => "None",
            FrameShape::Polaroid => "Polaroid",
            FrameShape::Heart => "Heart",
            FrameShape::Star => "Star",
            FrameShape::Circle => "Circle",
            FrameShape::RetroBorder => "Retro Border",
        }
    }
}

impl std::fmt::Display for FrameShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Apply a shape overlay to the frame in place
pub fn apply_shape(frame: &mut Frame, shape: FrameShape) {
    debug!(
        shape = %shape,
        width = frame.width(),
        height = frame.height(),
        "Applying shape overlay"
    );
    match shape {
        FrameShape::None => {}
        FrameShape::Polaroid => border::polaroid(frame),
        FrameShape::RetroBorder => border::retro(frame),
        FrameShape::Heart => {
            let path = clip::heart_path(frame.width(), frame.height());
            clip::clip_to_polygon(frame, &path);
        }
        FrameShape::Star => {
            let path = clip::star_path(frame.width(), frame.height());
            clip::clip_to_polygon(frame, &path);
        }
        FrameShape::Circle => clip::clip_to_circle(frame),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_identity() {
        let mut frame = Frame::filled(16, 16, [200, 10, 10, 255]);
        let original = frame.clone();
        apply_shape(&mut frame, FrameShape::None);
        assert_eq!(frame, original);
    }

    #[test]
    fn test_all_shapes_preserve_dimensions() {
        for shape in FrameShape::ALL {
            let mut frame = Frame::filled(40, 30, [200, 10, 10, 255]);
            apply_shape(&mut frame, shape);
            assert_eq!(frame.width(), 40, "{shape} changed width");
            assert_eq!(frame.height(), 30, "{shape} changed height");
        }
    }
}
