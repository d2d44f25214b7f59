// SPDX-License-Identifier: GPL-3.0-only

//! Camera source abstraction
//!
//! The session core only needs "give me the current frame as a raster";
//! device negotiation, permissions, and preview streaming live behind
//! these traits. The state machine is the single writer: only it may
//! acquire or release a source.

pub mod synthetic;

use crate::frame::Frame;
use serde::{Deserialize, Serialize};

/// Which camera the session captures from
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Facing {
    /// User-facing (selfie) camera
    #[default]
    Front,
    /// Environment-facing camera
    Back,
}

impl Facing {
    /// The opposite facing, for stop-then-start camera switching
    pub fn toggled(&self) -> Self {
        match self {
            Facing::Front => Facing::Back,
            Facing::Back => Facing::Front,
        }
    }
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Facing::Front => write!(f, "front"),
            Facing::Back => write!(f, "back"),
        }
    }
}

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Error types for camera source operations. Both variants are
/// recoverable: capture is blocked but the session state survives and
/// the user may re-trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Camera access was refused
    PermissionDenied,
    /// No camera, or the device is busy or disconnected
    DeviceUnavailable(String),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceError::PermissionDenied => write!(f, "Camera permission denied"),
            SourceError::DeviceUnavailable(msg) => write!(f, "Camera unavailable: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

/// An acquired camera stream producing raster frames
pub trait FrameSource: Send {
    /// The current frame at the source's negotiated resolution
    fn current_frame(&mut self) -> SourceResult<Frame>;

    /// Stop the stream and release the device
    fn release(&mut self) {}
}

/// Factory for camera streams
pub trait CameraAdapter: Send {
    /// Open the camera for the given facing
    fn acquire(&self, facing: Facing) -> SourceResult<Box<dyn FrameSource>>;
}
