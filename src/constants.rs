// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

use std::time::Duration;

/// Session limits
pub mod session {
    /// Minimum photos per session
    pub const MIN_PHOTO_COUNT: u32 = 1;

    /// Maximum photos per session
    pub const MAX_PHOTO_COUNT: u32 = 12;

    /// Default photos per session
    pub const DEFAULT_PHOTO_COUNT: u32 = 4;

    /// Default countdown timer in seconds
    pub const DEFAULT_TIMER_SECONDS: u32 = 3;
}

/// Timing constants
pub mod timing {
    use super::Duration;

    /// Countdown tick spacing
    pub const COUNTDOWN_TICK: Duration = Duration::from_secs(1);
}

/// Shape overlay geometry
pub mod shapes {
    /// Clip shapes scale to this fraction of the smaller frame dimension
    pub const CLIP_SIZE_RATIO: f32 = 0.4;

    /// Heart path resolution: one point per degree
    pub const HEART_STEPS: u32 = 360;

    /// Polaroid side/top margin as a fraction of the smaller dimension
    pub const POLAROID_MARGIN_RATIO: f32 = 0.05;

    /// Polaroid caption space reserved at the bottom, as a fraction of height
    pub const POLAROID_BOTTOM_RATIO: f32 = 0.20;

    /// Retro border margin in pixels
    pub const RETRO_MARGIN_PX: u32 = 20;
}

/// Synthetic source defaults
pub mod synthetic {
    /// Default test-pattern width
    pub const DEFAULT_WIDTH: u32 = 1280;

    /// Default test-pattern height
    pub const DEFAULT_HEIGHT: u32 = 720;
}

/// Application information utilities
pub mod app_info {
    /// Get the application version
    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
